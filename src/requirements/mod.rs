//! Prerequisites that must be installed before any check runs.

pub mod probe;

pub use probe::{check_prerequisite, extract_version, Prerequisite, ProbeReport};
