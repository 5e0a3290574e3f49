//! Run results.
//!
//! A run produces one [`CheckRecord`] per selected check. The process exit
//! code is derived from the report alone, see [`RunReport::exit_code`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::checks::CheckName;

/// Exit code when every selected check passed.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code when any selected check failed, whatever the tool returned.
pub const EXIT_CHECK_FAILED: u8 = 1;

/// What happened to a selected check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// Ran and exited successfully.
    Passed,
    /// Ran and exited unsuccessfully. `exit_code` is `None` if killed by a signal.
    Failed { exit_code: Option<i32> },
    /// Skipped because an earlier check failed.
    NotRun,
}

impl CheckOutcome {
    /// Whether this outcome counts as success.
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Outcome of one selected check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRecord {
    pub check: CheckName,
    pub command: String,
    #[serde(flatten)]
    pub outcome: CheckOutcome,
    pub duration_ms: u64,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub checks: Vec<CheckRecord>,
}

impl RunReport {
    /// True when every selected check passed.
    pub fn is_success(&self) -> bool {
        self.checks.iter().all(|record| record.outcome.is_passed())
    }

    /// The check that stopped the run, if any.
    pub fn failed_check(&self) -> Option<&CheckRecord> {
        self.checks
            .iter()
            .find(|record| matches!(record.outcome, CheckOutcome::Failed { .. }))
    }

    /// Checks that never started because of an earlier failure.
    pub fn not_run(&self) -> impl Iterator<Item = CheckName> + '_ {
        self.checks
            .iter()
            .filter(|record| record.outcome == CheckOutcome::NotRun)
            .map(|record| record.check)
    }

    /// Process exit code for this report.
    pub fn exit_code(&self) -> u8 {
        exit_code_for(&self.checks)
    }
}

/// Map check outcomes to a process exit code.
pub fn exit_code_for(records: &[CheckRecord]) -> u8 {
    if records.iter().all(|record| record.outcome.is_passed()) {
        EXIT_SUCCESS
    } else {
        EXIT_CHECK_FAILED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(check: CheckName, outcome: CheckOutcome) -> CheckRecord {
        CheckRecord {
            check,
            command: check.as_str().to_string(),
            outcome,
            duration_ms: 0,
        }
    }

    fn report(checks: Vec<CheckRecord>) -> RunReport {
        let now = Utc::now();
        RunReport {
            started_at: now,
            finished_at: now,
            checks,
        }
    }

    #[test]
    fn all_passed_exits_zero() {
        let report = report(vec![
            record(CheckName::Pytest, CheckOutcome::Passed),
            record(CheckName::Mypy, CheckOutcome::Passed),
        ]);
        assert!(report.is_success());
        assert_eq!(report.exit_code(), 0);
        assert!(report.failed_check().is_none());
    }

    #[test]
    fn failure_exits_one_regardless_of_tool_code() {
        let report = report(vec![record(
            CheckName::Pylint,
            CheckOutcome::Failed { exit_code: Some(2) },
        )]);
        assert!(!report.is_success());
        assert_eq!(report.exit_code(), 1);
        assert_eq!(report.failed_check().unwrap().check, CheckName::Pylint);
    }

    #[test]
    fn signal_failure_exits_one() {
        let records = vec![record(
            CheckName::Pytest,
            CheckOutcome::Failed { exit_code: None },
        )];
        assert_eq!(exit_code_for(&records), 1);
    }

    #[test]
    fn not_run_lists_skipped_checks() {
        let report = report(vec![
            record(CheckName::Pytest, CheckOutcome::Failed { exit_code: Some(1) }),
            record(CheckName::Mypy, CheckOutcome::NotRun),
            record(CheckName::CheckDocs, CheckOutcome::NotRun),
        ]);
        assert_eq!(
            report.not_run().collect::<Vec<_>>(),
            vec![CheckName::Mypy, CheckName::CheckDocs]
        );
    }

    #[test]
    fn serializes_flat_records() {
        let record = record(CheckName::BuildDocs, CheckOutcome::Failed { exit_code: Some(2) });
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["check"], "build-docs");
        assert_eq!(value["status"], "failed");
        assert_eq!(value["exit_code"], 2);
    }

    #[test]
    fn report_round_trips_through_json() {
        let original = report(vec![record(CheckName::Mypy, CheckOutcome::NotRun)]);
        let json = serde_json::to_string(&original).unwrap();
        let parsed: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
