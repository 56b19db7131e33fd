//! The record handed to the run-history sink after each evaluation.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;
use crate::validation::rules::ValidationReport;

/// Summary of one validation run, as stored in the `rule_runs` table.
///
/// The per-rule trace is deliberately not part of the record; it stays in
/// the response only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleRunRecord {
    pub timestamp: Timestamp,
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl RuleRunRecord {
    /// Build a record from a finished report. The caller supplies the
    /// timestamp so the evaluator itself stays clock-free.
    pub fn from_report(report: &ValidationReport, timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            is_valid: report.is_valid,
            errors: report.errors.clone(),
            warnings: report.warnings.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::rules::RuleLogEntry;
    use chrono::TimeZone;

    #[test]
    fn copies_outcome_from_report() {
        let report = ValidationReport {
            is_valid: false,
            errors: vec!["Rule failed: a > 1".into()],
            warnings: vec!["Rule failed: b notEmpty ".into()],
            rule_log: vec![
                RuleLogEntry { rule: 1, passed: false },
                RuleLogEntry { rule: 2, passed: false },
            ],
        };
        let at = chrono::Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap();

        let record = RuleRunRecord::from_report(&report, at);

        assert_eq!(record.timestamp, at);
        assert!(!record.is_valid);
        assert_eq!(record.errors, report.errors);
        assert_eq!(record.warnings, report.warnings);
    }
}
