//! User-facing terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] for capturing output in tests
//!
//! Check commands write straight to the inherited stdout and stderr, so
//! everything here is line-oriented: no spinners or redrawn progress.
//!
//! # Example
//!
//! ```
//! use gauntlet::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Tests (pytest):");
//! ui.success("pylint checks passed");
//! assert_eq!(ui.messages(), &["Tests (pytest):".to_string()]);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, GauntletTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain line, such as a check banner.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Show a header line.
    fn show_header(&mut self, title: &str);
}
