//! Sequential check execution.
//!
//! Checks run one at a time in canonical order. The first failure stops the
//! run; every later selected check is recorded as [`CheckOutcome::NotRun`].

use chrono::Utc;
use std::path::{Path, PathBuf};

use crate::checks::{CheckCatalog, CheckName, Selection};
use crate::error::Result;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::report::{CheckOutcome, CheckRecord, RunReport};

/// Runs the selected checks against a project.
pub struct CheckRunner<'a> {
    catalog: &'a CheckCatalog,
    runner: &'a dyn CommandRunner,
    project_root: PathBuf,
}

impl<'a> CheckRunner<'a> {
    /// Create a check runner.
    pub fn new(catalog: &'a CheckCatalog, runner: &'a dyn CommandRunner, project_root: &Path) -> Self {
        Self {
            catalog,
            runner,
            project_root: project_root.to_path_buf(),
        }
    }

    /// Run every selected check, stopping at the first failure.
    ///
    /// A failing check is reported in the returned [`RunReport`], not as an
    /// error. Errors are reserved for commands that cannot be started.
    pub fn run(&self, selection: &Selection, ui: &mut dyn UserInterface) -> Result<RunReport> {
        let started_at = Utc::now();
        ui.show_header(&format!("Verifying with {}", describe(selection.requested())));

        let mut records = Vec::with_capacity(selection.len());
        let mut failed = false;

        for check in selection.ordered() {
            let definition = self.catalog.get(check);

            if failed {
                records.push(CheckRecord {
                    check,
                    command: definition.command.clone(),
                    outcome: CheckOutcome::NotRun,
                    duration_ms: 0,
                });
                continue;
            }

            ui.message(definition.banner);
            tracing::debug!("Running {}: {}", check, definition.command);

            let status = self
                .runner
                .run_inherited(&definition.command, &self.project_root)?;

            let outcome = if status.success {
                if let Some(banner) = definition.success_banner {
                    ui.success(banner);
                }
                CheckOutcome::Passed
            } else {
                tracing::debug!("{} exited with {:?}", check, status.exit_code);
                failed = true;
                CheckOutcome::Failed {
                    exit_code: status.exit_code,
                }
            };

            records.push(CheckRecord {
                check,
                command: definition.command.clone(),
                outcome,
                duration_ms: status.duration.as_millis() as u64,
            });
        }

        Ok(RunReport {
            started_at,
            finished_at: Utc::now(),
            checks: records,
        })
    }
}

/// Render the requested checks the way the header shows them: `[pytest, mypy]`.
pub fn describe(checks: &[CheckName]) -> String {
    let names: Vec<&str> = checks.iter().map(|c| c.as_str()).collect();
    format!("[{}]", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GauntletError;
    use crate::shell::command::CapturedOutput;
    use crate::shell::{CommandStatus, MockRunner};
    use crate::ui::MockUI;

    fn catalog() -> CheckCatalog {
        CheckCatalog::new("pkg")
    }

    fn command(catalog: &CheckCatalog, check: CheckName) -> String {
        catalog.get(check).command.clone()
    }

    #[test]
    fn runs_only_selected_checks_in_canonical_order() {
        let catalog = catalog();
        let runner = MockRunner::new();
        let mut ui = MockUI::new();
        let selection = Selection::resolve(&[CheckName::Mypy, CheckName::Pytest]);

        let report = CheckRunner::new(&catalog, &runner, Path::new("."))
            .run(&selection, &mut ui)
            .unwrap();

        assert_eq!(
            runner.commands(),
            vec![
                command(&catalog, CheckName::Pytest),
                command(&catalog, CheckName::Mypy)
            ]
        );
        assert!(report.is_success());
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.checks.len(), 2);
    }

    #[test]
    fn empty_selection_runs_everything() {
        let catalog = catalog();
        let runner = MockRunner::new();
        let mut ui = MockUI::new();

        CheckRunner::new(&catalog, &runner, Path::new("."))
            .run(&Selection::resolve(&[]), &mut ui)
            .unwrap();

        let expected: Vec<String> = catalog.iter().map(|d| d.command.clone()).collect();
        assert_eq!(runner.commands(), expected);
    }

    #[test]
    fn prints_header_banners_and_success_lines() {
        let catalog = catalog();
        let runner = MockRunner::new();
        let mut ui = MockUI::new();
        let selection = Selection::resolve(&[CheckName::Pytest, CheckName::Mypy]);

        CheckRunner::new(&catalog, &runner, Path::new("."))
            .run(&selection, &mut ui)
            .unwrap();

        assert_eq!(ui.headers(), &["Verifying with [pytest, mypy]".to_string()]);
        assert_eq!(
            ui.transcript()[1..],
            [
                "Tests (pytest):".to_string(),
                "Typechecker (mypy):".to_string(),
                "mypy checks passed".to_string(),
            ]
        );
    }

    #[test]
    fn first_failure_stops_the_run() {
        let catalog = catalog();
        let runner = MockRunner::new().with_exit_code(&command(&catalog, CheckName::Pylint), 2);
        let mut ui = MockUI::new();

        let report = CheckRunner::new(&catalog, &runner, Path::new("."))
            .run(&Selection::all(), &mut ui)
            .unwrap();

        assert_eq!(
            runner.commands(),
            vec![
                command(&catalog, CheckName::Pytest),
                command(&catalog, CheckName::Pylint)
            ]
        );
        assert_eq!(report.exit_code(), 1);
        assert_eq!(
            report.failed_check().map(|r| r.outcome),
            Some(CheckOutcome::Failed { exit_code: Some(2) })
        );
        assert_eq!(report.not_run().count(), CheckName::ALL.len() - 2);
        assert!(!ui.successes().contains(&"pylint checks passed".to_string()));
        assert_eq!(ui.messages().last().unwrap(), "Linter (pylint):");
    }

    #[test]
    fn single_failing_check_maps_to_exit_one() {
        let catalog = catalog();
        let runner = MockRunner::new().with_exit_code(&command(&catalog, CheckName::Pylint), 2);
        let mut ui = MockUI::new();

        let report = CheckRunner::new(&catalog, &runner, Path::new("."))
            .run(&Selection::resolve(&[CheckName::Pylint]), &mut ui)
            .unwrap();

        assert_eq!(report.checks.len(), 1);
        assert_eq!(report.exit_code(), 1);
    }

    struct SpawnFails;

    impl CommandRunner for SpawnFails {
        fn run_inherited(&self, command: &str, _cwd: &Path) -> Result<CommandStatus> {
            Err(GauntletError::CommandSpawn {
                command: command.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no shell"),
            })
        }

        fn capture(&self, _: &str, _: &[String], _: &Path) -> Result<CapturedOutput> {
            unreachable!("checks never capture")
        }
    }

    #[test]
    fn spawn_failure_is_an_error() {
        let catalog = catalog();
        let mut ui = MockUI::new();

        let err = CheckRunner::new(&catalog, &SpawnFails, Path::new("."))
            .run(&Selection::resolve(&[CheckName::Pytest]), &mut ui)
            .unwrap_err();

        assert!(matches!(err, GauntletError::CommandSpawn { .. }));
    }

    #[test]
    fn describe_formats_list() {
        assert_eq!(
            describe(&[CheckName::Pytest, CheckName::CheckLinks]),
            "[pytest, check-links]"
        );
    }
}
