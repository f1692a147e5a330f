//! Report generation and formatting
//!
//! Wraps each `ValidationResult` with its source and the submission policy
//! verdict, and renders it for the terminal or as JSON.

use crate::host::input::MetadataRecord;
use crate::types::{ScoreBand, Severity, ValidationIssue, ValidationResult};
use crate::validator::MetadataValidator;
use serde::{Deserialize, Serialize};
use stockmeta_common::config::PolicyConfig;

/// Validation outcome for one metadata record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordReport {
    /// File path or `<stdin>`
    pub source: String,
    /// Position within the source document
    pub index: usize,
    /// Submission policy verdict
    pub accepted: bool,
    pub band: ScoreBand,
    pub result: ValidationResult,
}

impl RecordReport {
    /// Validate a record and apply the submission policy
    pub fn build(
        validator: &MetadataValidator,
        record: &MetadataRecord,
        policy: &PolicyConfig,
    ) -> Self {
        let result = validator.validate(&record.metadata);
        let accepted = policy.accepts(result.score, result.has_blocking_issues());
        Self {
            source: record.source.clone(),
            index: record.index,
            accepted,
            band: result.band(),
            result,
        }
    }
}

/// Every record satisfies the submission policy
pub const EXIT_ACCEPTED: u8 = 0;
/// At least one record was rejected
pub const EXIT_REJECTED: u8 = 1;
/// Input or configuration error
pub const EXIT_FAILURE: u8 = 2;

/// Process exit status for a completed run
pub fn exit_status(reports: &[RecordReport]) -> u8 {
    if reports.iter().all(|report| report.accepted) {
        EXIT_ACCEPTED
    } else {
        EXIT_REJECTED
    }
}

/// CLI formatter for validation reports
pub struct CliFormatter;

impl CliFormatter {
    /// Severity marker
    ///
    /// Example: `[✗] error`
    pub fn severity_symbol(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => "✗",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
        }
    }

    pub fn format_issue(issue: &ValidationIssue) -> String {
        match issue.field {
            Some(field) => format!(
                "[{}] {} ({}): {}",
                Self::severity_symbol(issue.severity),
                issue.severity,
                field,
                issue.message
            ),
            None => format!(
                "[{}] {}: {}",
                Self::severity_symbol(issue.severity),
                issue.severity,
                issue.message
            ),
        }
    }

    /// Format one record report as a text block
    pub fn format_report(report: &RecordReport) -> String {
        let mut output = String::new();
        let verdict = if report.accepted { "ACCEPTED" } else { "REJECTED" };

        output.push_str(&format!(
            "{} #{}: score {}/100 ({}) - {}\n",
            report.source, report.index, report.result.score, report.band, verdict
        ));

        if report.result.issues.is_empty() {
            output.push_str("  No issues found\n");
        } else {
            output.push_str("  Issues:\n");
            for issue in &report.result.issues {
                output.push_str(&format!("    {}\n", Self::format_issue(issue)));
            }
        }

        if !report.result.recommendations.is_empty() {
            output.push_str("  Recommendations:\n");
            for recommendation in &report.result.recommendations {
                output.push_str(&format!("    - {}\n", recommendation));
            }
        }

        output
    }

    /// Summary line across all reports
    pub fn format_summary(reports: &[RecordReport]) -> String {
        let accepted = reports.iter().filter(|r| r.accepted).count();
        format!(
            "{} record(s) checked: {} accepted, {} rejected",
            reports.len(),
            accepted,
            reports.len() - accepted
        )
    }

    pub fn format_json(report: &RecordReport, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        }
    }
}
