//! gauntlet - Run a project's verification checks in sequence.
//!
//! gauntlet runs a fixed sequence of external quality checks (tests, lint,
//! type checking, documentation build and checks, link checking and a
//! requirements consistency check) and stops at the first one that fails.
//!
//! # Modules
//!
//! - [`checks`] - The closed set of checks, their commands and selection
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - The prerequisite probe run before any check
//! - [`runner`] - Sequential execution and run reports
//! - [`shell`] - Shell command execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use gauntlet::checks::{CheckCatalog, CheckName, Selection};
//! use gauntlet::runner::CheckRunner;
//! use gauntlet::shell::MockRunner;
//! use gauntlet::ui::MockUI;
//! use std::path::Path;
//!
//! let catalog = CheckCatalog::new("mylib");
//! let runner = MockRunner::new();
//! let mut ui = MockUI::new();
//!
//! let selection = Selection::resolve(&[CheckName::Mypy, CheckName::Pytest]);
//! let report = CheckRunner::new(&catalog, &runner, Path::new("."))
//!     .run(&selection, &mut ui)
//!     .unwrap();
//!
//! assert_eq!(report.exit_code(), 0);
//! assert_eq!(runner.commands()[0], "pytest -v --color=yes");
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{GauntletError, Result};
