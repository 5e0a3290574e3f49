//! Configuration schema definitions for gauntlet.
//!
//! This module contains the struct definitions that map to
//! the YAML configuration file format.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::checks::CheckName;

/// Root configuration structure for `.gauntlet/config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GauntletConfig {
    /// Source package substituted for `${package}` in check commands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    /// Runtime that must be installed before any check runs.
    pub prerequisite: PrerequisiteConfig,

    /// Per-check command overrides, keyed by check identifier.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub checks: BTreeMap<CheckName, CheckOverride>,
}

/// Prerequisite probe settings. Unset fields fall back to `java -version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrerequisiteConfig {
    /// Whether to probe at all.
    pub enabled: bool,

    /// Program to run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,

    /// Arguments for the program.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,

    /// Substring expected in the program's output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl Default for PrerequisiteConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: None,
            args: None,
            marker: None,
        }
    }
}

/// Override for a single check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckOverride {
    /// Replacement shell command. May reference `${package}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}
