//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. The
//! [`CommandDispatcher`] picks one from the parsed flags.

pub mod completions;
pub mod dispatcher;
pub mod list;
pub mod verify;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use verify::{VerifyCommand, VerifyOptions};
