//! Shell command execution.

use crate::error::{GauntletError, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use super::platform::shell_invocation;

/// Exit status of a command whose streams were inherited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Whether command succeeded (exit code 0).
    pub success: bool,

    /// Execution duration.
    pub duration: Duration,
}

impl CommandStatus {
    /// Create a success status.
    pub fn success(duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            success: true,
            duration,
        }
    }

    /// Create a failure status.
    pub fn failure(exit_code: Option<i32>, duration: Duration) -> Self {
        Self {
            exit_code,
            success: false,
            duration,
        }
    }
}

/// Output of a command whose streams were captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Whether command succeeded (exit code 0).
    pub success: bool,

    /// Standard output followed by standard error.
    pub combined: String,
}

/// Runs external commands.
///
/// The real implementation is [`SystemRunner`]; tests use
/// [`MockRunner`](super::MockRunner).
pub trait CommandRunner {
    /// Run a shell command line in `cwd` with inherited stdio and wait for it.
    fn run_inherited(&self, command: &str, cwd: &Path) -> Result<CommandStatus>;

    /// Run a program directly (no shell) in `cwd`, capturing its output.
    fn capture(&self, program: &str, args: &[String], cwd: &Path) -> Result<CapturedOutput>;
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run_inherited(&self, command: &str, cwd: &Path) -> Result<CommandStatus> {
        let start = Instant::now();
        let (shell, flag) = shell_invocation();

        let status = Command::new(shell)
            .arg(flag)
            .arg(command)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| GauntletError::CommandSpawn {
                command: command.to_string(),
                source,
            })?;

        let duration = start.elapsed();
        if status.success() {
            Ok(CommandStatus::success(duration))
        } else {
            Ok(CommandStatus::failure(status.code(), duration))
        }
    }

    fn capture(&self, program: &str, args: &[String], cwd: &Path) -> Result<CapturedOutput> {
        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| GauntletError::CommandSpawn {
                command: render(program, args),
                source,
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).to_string();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(CapturedOutput {
            exit_code: output.status.code(),
            success: output.status.success(),
            combined,
        })
    }
}

/// Render a program and its arguments for messages.
pub fn render(program: &str, args: &[String]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
