//! Verify command implementation.
//!
//! The default command: probe the prerequisite, then run the selected
//! checks in sequence until one fails.

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

use crate::checks::{CheckCatalog, CheckName, Selection};
use crate::cli::args::Cli;
use crate::config::{load_config, resolve_package};
use crate::error::Result;
use crate::requirements::{check_prerequisite, Prerequisite};
use crate::runner::{CheckOutcome, CheckRunner, RunReport};
use crate::shell::{CommandRunner, SystemRunner};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Options for a verification run.
#[derive(Debug, Clone, Default)]
pub struct VerifyOptions {
    /// Requested checks; empty means all.
    pub checks: Vec<CheckName>,
    /// Explicit config file.
    pub config: Option<PathBuf>,
    /// Package override.
    pub package: Option<String>,
    /// Where to write the JSON report.
    pub report: Option<PathBuf>,
}

impl From<&Cli> for VerifyOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            checks: cli.checks.clone(),
            config: cli.config.clone(),
            package: cli.package.clone(),
            report: cli.report.clone(),
        }
    }
}

/// The verify command implementation.
pub struct VerifyCommand {
    project_root: PathBuf,
    options: VerifyOptions,
    runner: Box<dyn CommandRunner>,
}

impl VerifyCommand {
    /// Create a verify command that runs real processes.
    pub fn new(project_root: &Path, options: VerifyOptions) -> Self {
        Self::with_runner(project_root, options, Box::new(SystemRunner::new()))
    }

    /// Create a verify command with a custom command runner.
    pub fn with_runner(
        project_root: &Path,
        options: VerifyOptions,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            options,
            runner,
        }
    }
}

impl Command for VerifyCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.options.config.as_deref())?;
        let package = resolve_package(self.options.package.as_deref(), &config, &self.project_root);
        let catalog = CheckCatalog::with_overrides(&package, &config.checks);
        let selection = Selection::resolve(&self.options.checks);

        if let Some(prerequisite) = Prerequisite::from_config(&config.prerequisite) {
            check_prerequisite(&prerequisite, self.runner.as_ref(), &self.project_root)?;
        } else {
            tracing::debug!("Prerequisite probe disabled");
        }

        let report = CheckRunner::new(&catalog, self.runner.as_ref(), &self.project_root)
            .run(&selection, ui)?;

        if let Some(path) = &self.options.report {
            write_report(&report, path)?;
        }

        if !report.is_success() && ui.output_mode().shows_detail() {
            summarize_failure(&report, ui);
        }

        Ok(CommandResult::from_exit_code(report.exit_code()))
    }
}

fn summarize_failure(report: &RunReport, ui: &mut dyn UserInterface) {
    if let Some(record) = report.failed_check() {
        let detail = match record.outcome {
            CheckOutcome::Failed {
                exit_code: Some(code),
            } => format!("exit code {}", code),
            _ => "terminated by a signal".to_string(),
        };
        ui.error(&format!("{} failed ({})", record.check, detail));
    }

    let skipped: Vec<&str> = report.not_run().map(|c| c.as_str()).collect();
    if !skipped.is_empty() {
        ui.warning(&format!("Not run: {}", skipped.join(", ")));
    }
}

/// Write a run report as pretty-printed JSON.
pub fn write_report(report: &RunReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize run report")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write run report to {}", path.display()))?;
    tracing::debug!("Wrote run report to {}", path.display());
    Ok(())
}
