//! Prerequisite probe.
//!
//! Several checks (the documentation build in particular) need a runtime
//! that is not installed by the project's own tooling. Before any check
//! runs, the runtime's version query is executed with its output captured,
//! and the output must contain a marker string. If the program is missing,
//! exits unsuccessfully or prints something unexpected, the whole run aborts
//! with [`GauntletError::PrerequisiteMissing`].
//!
//! # Example
//!
//! ```
//! use gauntlet::requirements::{check_prerequisite, Prerequisite};
//! use gauntlet::shell::MockRunner;
//! use std::path::Path;
//!
//! let runner = MockRunner::new().with_capture("java", 0, "openjdk version \"17.0.2\"");
//! let report = check_prerequisite(&Prerequisite::java(), &runner, Path::new(".")).unwrap();
//! assert_eq!(report.version.as_deref(), Some("17.0.2"));
//! ```

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use crate::config::schema::PrerequisiteConfig;
use crate::error::{GauntletError, Result};
use crate::shell::command::render;
use crate::shell::CommandRunner;

/// Regex for pulling a version number out of `-version` style output.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"version\s+"?([0-9][0-9A-Za-z._+-]*)"?"#).expect("VERSION_REGEX must compile")
});

/// A runtime that must be installed before checks run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prerequisite {
    /// Name used in error messages.
    pub name: String,
    /// Program to execute.
    pub program: String,
    /// Arguments for the version query.
    pub args: Vec<String>,
    /// Substring the captured output must contain.
    pub marker: String,
}

impl Prerequisite {
    /// The Java runtime, probed with `java -version`.
    pub fn java() -> Self {
        Self {
            name: "java".to_string(),
            program: "java".to_string(),
            args: vec!["-version".to_string()],
            marker: "version".to_string(),
        }
    }

    /// Build from configuration. Returns `None` when the probe is disabled.
    pub fn from_config(config: &PrerequisiteConfig) -> Option<Self> {
        if !config.enabled {
            return None;
        }

        let default = Self::java();
        let program = config.program.clone().unwrap_or(default.program);
        let args = match (&config.program, &config.args) {
            (_, Some(args)) => args.clone(),
            // A custom program does not inherit java's arguments.
            (Some(_), None) => Vec::new(),
            (None, None) => default.args,
        };

        Some(Self {
            name: program.clone(),
            program,
            args,
            marker: config.marker.clone().unwrap_or(default.marker),
        })
    }

    /// The probe command as it would be typed.
    pub fn command_line(&self) -> String {
        render(&self.program, &self.args)
    }
}

/// Result of a successful probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    /// Captured output (stdout then stderr).
    pub output: String,
    /// Version number found in the output, if any.
    pub version: Option<String>,
}

/// Extract a version number from version-query output.
pub fn extract_version(output: &str) -> Option<String> {
    VERSION_REGEX
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Verify that a prerequisite is installed.
///
/// # Errors
///
/// Returns `PrerequisiteMissing` if the program cannot be started, exits
/// unsuccessfully, or its output lacks the marker.
pub fn check_prerequisite(
    prerequisite: &Prerequisite,
    runner: &dyn CommandRunner,
    cwd: &Path,
) -> Result<ProbeReport> {
    let command = prerequisite.command_line();
    tracing::debug!("Probing prerequisite with `{}`", command);

    let missing = |detail: String| GauntletError::PrerequisiteMissing {
        name: prerequisite.name.clone(),
        message: detail,
    };

    let output = match runner.capture(&prerequisite.program, &prerequisite.args, cwd) {
        Ok(output) => output,
        Err(GauntletError::CommandSpawn { source, .. }) => {
            return Err(missing(format!("`{}` could not be run: {}", command, source)));
        }
        Err(e) => return Err(e),
    };

    if !output.success {
        let detail = match output.exit_code {
            Some(code) => format!("`{}` exited with code {}", command, code),
            None => format!("`{}` was terminated by a signal", command),
        };
        return Err(missing(detail));
    }

    if !output.combined.contains(&prerequisite.marker) {
        return Err(missing(format!(
            "`{}` output does not mention '{}'",
            command, prerequisite.marker
        )));
    }

    let version = extract_version(&output.combined);
    match &version {
        Some(v) => tracing::debug!("Found {} {}", prerequisite.name, v),
        None => tracing::debug!("Found {} (version not reported)", prerequisite.name),
    }

    Ok(ProbeReport {
        output: output.combined,
        version,
    })
}
