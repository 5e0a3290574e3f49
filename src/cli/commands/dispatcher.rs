//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing the parsed CLI to a command

use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::error::{GauntletError, Result};
use crate::runner::{EXIT_CHECK_FAILED, EXIT_SUCCESS};
use crate::ui::UserInterface;

use super::completions::CompletionsCommand;
use super::list::ListCommand;
use super::verify::{VerifyCommand, VerifyOptions};

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: EXIT_SUCCESS,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: u8) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Create a result from a process exit code.
    pub fn from_exit_code(exit_code: u8) -> Self {
        if exit_code == EXIT_SUCCESS {
            Self::success()
        } else {
            Self::failure(exit_code)
        }
    }

    /// The result of a run in which a check failed.
    pub fn check_failed() -> Self {
        Self::failure(EXIT_CHECK_FAILED)
    }
}

/// Dispatches the parsed CLI to a command implementation.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Dispatch and execute a command.
    ///
    /// `--completions` and `--list` short-circuit; otherwise the checks run.
    /// Everything except completions needs an existing project directory.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if let Some(shell) = cli.completions {
            return CompletionsCommand::new(shell).execute(ui);
        }

        if !self.project_root.is_dir() {
            return Err(GauntletError::ProjectNotFound {
                path: self.project_root.clone(),
            });
        }

        if cli.list {
            let cmd = ListCommand::new(
                &self.project_root,
                cli.config.clone(),
                cli.package.clone(),
            );
            return cmd.execute(ui);
        }

        let cmd = VerifyCommand::new(&self.project_root, VerifyOptions::from(cli));
        cmd.execute(ui)
    }
}
