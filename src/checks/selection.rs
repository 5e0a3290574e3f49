//! Resolution of the `--checks` request into the checks to run.
//!
//! Execution order is always canonical: `--checks mypy pytest` runs
//! pytest before mypy. The request as typed is kept for display.

use std::collections::BTreeSet;

use super::CheckName;

/// The checks selected for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    requested: Vec<CheckName>,
    members: BTreeSet<CheckName>,
}

impl Selection {
    /// Resolve a request. An empty request selects every check.
    pub fn resolve(requested: &[CheckName]) -> Self {
        let requested = if requested.is_empty() {
            CheckName::ALL.to_vec()
        } else {
            requested.to_vec()
        };
        let members = requested.iter().copied().collect();
        Self { requested, members }
    }

    /// Select every check.
    pub fn all() -> Self {
        Self::resolve(&[])
    }

    /// Whether a check will run.
    pub fn contains(&self, check: CheckName) -> bool {
        self.members.contains(&check)
    }

    /// The request as the user typed it (or the full set).
    pub fn requested(&self) -> &[CheckName] {
        &self.requested
    }

    /// Selected checks in canonical order, each exactly once.
    pub fn ordered(&self) -> impl Iterator<Item = CheckName> + '_ {
        CheckName::ALL
            .into_iter()
            .filter(move |check| self.contains(*check))
    }

    /// Number of distinct selected checks.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false: an empty request selects everything.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
