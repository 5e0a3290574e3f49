//! Check execution and run results.
//!
//! - [`sequence`] runs the selected checks one after another
//! - [`report`] records outcomes and maps them to an exit code

pub mod report;
pub mod sequence;

pub use report::{
    exit_code_for, CheckOutcome, CheckRecord, RunReport, EXIT_CHECK_FAILED, EXIT_SUCCESS,
};
pub use sequence::{describe, CheckRunner};
