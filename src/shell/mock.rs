//! Scripted command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] without spawning anything. Each
//! shell command exits 0 unless an exit code was scripted for it, and every
//! invocation is recorded for later assertion.
//!
//! # Example
//!
//! ```
//! use gauntlet::shell::{CommandRunner, MockRunner};
//! use std::path::Path;
//!
//! let runner = MockRunner::new().with_exit_code("pytest", 1);
//! let status = runner.run_inherited("pytest", Path::new(".")).unwrap();
//! assert!(!status.success);
//! assert_eq!(runner.commands(), vec!["pytest".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::error::{GauntletError, Result};

use super::command::{render, CapturedOutput, CommandRunner, CommandStatus};

/// Scripted response for a captured program.
#[derive(Debug, Clone)]
enum Capture {
    Output { exit_code: i32, combined: String },
    NotFound,
}

/// Mock command runner.
#[derive(Debug, Default)]
pub struct MockRunner {
    exit_codes: HashMap<String, i32>,
    captures: HashMap<String, Capture>,
    commands: RefCell<Vec<String>>,
    captured: RefCell<Vec<String>>,
}

impl MockRunner {
    /// Create a runner where every command succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a shell command exit with the given code.
    pub fn with_exit_code(mut self, command: &str, code: i32) -> Self {
        self.exit_codes.insert(command.to_string(), code);
        self
    }

    /// Script the output of a captured program.
    pub fn with_capture(mut self, program: &str, exit_code: i32, combined: &str) -> Self {
        self.captures.insert(
            program.to_string(),
            Capture::Output {
                exit_code,
                combined: combined.to_string(),
            },
        );
        self
    }

    /// Make a captured program fail to spawn.
    pub fn with_missing_program(mut self, program: &str) -> Self {
        self.captures.insert(program.to_string(), Capture::NotFound);
        self
    }

    /// Shell commands run so far, in order.
    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }

    /// Captured programs run so far, rendered with their arguments.
    pub fn captured(&self) -> Vec<String> {
        self.captured.borrow().clone()
    }
}

impl CommandRunner for MockRunner {
    fn run_inherited(&self, command: &str, _cwd: &Path) -> Result<CommandStatus> {
        self.commands.borrow_mut().push(command.to_string());
        match self.exit_codes.get(command) {
            Some(&code) if code != 0 => Ok(CommandStatus::failure(Some(code), Duration::ZERO)),
            _ => Ok(CommandStatus::success(Duration::ZERO)),
        }
    }

    fn capture(&self, program: &str, args: &[String], _cwd: &Path) -> Result<CapturedOutput> {
        let rendered = render(program, args);
        self.captured.borrow_mut().push(rendered.clone());
        match self.captures.get(program) {
            Some(Capture::Output {
                exit_code,
                combined,
            }) => Ok(CapturedOutput {
                exit_code: Some(*exit_code),
                success: *exit_code == 0,
                combined: combined.clone(),
            }),
            Some(Capture::NotFound) | None => Err(GauntletError::CommandSpawn {
                command: rendered,
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "program not found"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscripted_commands_succeed() {
        let runner = MockRunner::new();
        let status = runner.run_inherited("anything", Path::new(".")).unwrap();
        assert!(status.success);
    }

    #[test]
    fn scripted_exit_code_is_returned() {
        let runner = MockRunner::new().with_exit_code("pylint pkg", 2);
        let status = runner.run_inherited("pylint pkg", Path::new(".")).unwrap();
        assert!(!status.success);
        assert_eq!(status.exit_code, Some(2));
    }

    #[test]
    fn records_commands_in_order() {
        let runner = MockRunner::new();
        runner.run_inherited("a", Path::new(".")).unwrap();
        runner.run_inherited("b", Path::new(".")).unwrap();
        assert_eq!(runner.commands(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn unscripted_capture_is_not_found() {
        let runner = MockRunner::new();
        let err = runner.capture("java", &[], Path::new(".")).unwrap_err();
        assert!(matches!(err, GauntletError::CommandSpawn { .. }));
        assert_eq!(runner.captured(), vec!["java".to_string()]);
    }

    #[test]
    fn scripted_capture_returns_output() {
        let runner = MockRunner::new().with_capture("java", 0, "openjdk version \"17\"");
        let output = runner
            .capture("java", &["-version".to_string()], Path::new("."))
            .unwrap();
        assert!(output.success);
        assert!(output.combined.contains("version"));
        assert_eq!(runner.captured(), vec!["java -version".to_string()]);
    }
}
