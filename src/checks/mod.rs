//! The closed set of verification checks.
//!
//! - [`CheckName`] identifies a check and doubles as the clap value type
//! - [`catalog`] maps each check to its banner and command
//! - [`selection`] resolves the user's `--checks` request

pub mod catalog;
pub mod selection;

pub use catalog::{default_command, CheckCatalog, CheckDefinition};
pub use selection::Selection;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A verification check known to gauntlet.
///
/// Variant order is the canonical execution order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum CheckName {
    /// Test suite (pytest).
    Pytest,
    /// Style and lint checks (pylint).
    Pylint,
    /// Static type checking (mypy).
    Mypy,
    /// Build the documentation site.
    BuildDocs,
    /// Check documentation content.
    CheckDocs,
    /// Check links in Markdown files.
    CheckLinks,
    /// Check requirements.txt against setup.py.
    CheckRequirements,
}

impl CheckName {
    /// Every check, in canonical order.
    pub const ALL: [CheckName; 7] = [
        CheckName::Pytest,
        CheckName::Pylint,
        CheckName::Mypy,
        CheckName::BuildDocs,
        CheckName::CheckDocs,
        CheckName::CheckLinks,
        CheckName::CheckRequirements,
    ];

    /// The identifier accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckName::Pytest => "pytest",
            CheckName::Pylint => "pylint",
            CheckName::Mypy => "mypy",
            CheckName::BuildDocs => "build-docs",
            CheckName::CheckDocs => "check-docs",
            CheckName::CheckLinks => "check-links",
            CheckName::CheckRequirements => "check-requirements",
        }
    }
}

impl fmt::Display for CheckName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
