//! Report generation with multiple output formats
//!
//! CDD Principle: Anti-Corruption Layer - Formatters translate domain objects to external formats
//! - Plain output is the exact `ERROR: <path> is ...` diagnostic stream
//! - Line formats render one violation at a time so they can be streamed during a scan
//! - JSON is rendered once from the finished report

use crate::domain::violations::{
    CompletenessError, CompletenessResult, ValidationReport, Violation,
};
use serde_json::Value as JsonValue;
use std::io::Write;

/// Supported output formats for validation reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `ERROR:` line per violation
    #[default]
    Plain,
    /// JSON document for programmatic consumption
    Json,
    /// GitHub Actions workflow commands
    GitHub,
}

/// Formats violations and reports
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFormatter {
    format: OutputFormat,
}

impl ReportFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Render a single violation for streaming formats, `None` for JSON
    pub fn format_violation(&self, violation: &Violation) -> Option<String> {
        match self.format {
            OutputFormat::Plain => Some(violation.format_display()),
            OutputFormat::GitHub => Some(format!(
                "::error file={},title={}::{} is {}",
                violation.file_path.display(),
                violation.rule_id,
                violation.file_path.display(),
                violation.message
            )),
            OutputFormat::Json => None,
        }
    }

    /// Write one violation line if this format streams
    pub fn write_violation<W: Write>(
        &self,
        violation: &Violation,
        mut writer: W,
    ) -> CompletenessResult<()> {
        if let Some(line) = self.format_violation(violation) {
            writeln!(writer, "{line}")?;
        }
        Ok(())
    }

    /// Render the finished report. Streaming formats have already written everything.
    pub fn format_report(&self, report: &ValidationReport) -> CompletenessResult<Option<String>> {
        match self.format {
            OutputFormat::Json => self.format_json(report).map(Some),
            OutputFormat::Plain | OutputFormat::GitHub => Ok(None),
        }
    }

    fn format_json(&self, report: &ValidationReport) -> CompletenessResult<String> {
        let json_violations: Vec<JsonValue> = report
            .violations
            .iter()
            .map(|v| {
                serde_json::json!({
                    "rule_id": v.rule_id,
                    "file_path": v.file_path.display().to_string(),
                    "message": v.message,
                    "detected_at": v.detected_at.to_rfc3339()
                })
            })
            .collect();

        let json_report = serde_json::json!({
            "violations": json_violations,
            "summary": {
                "total_files": report.summary.total_files,
                "violation_count": report.violation_count(),
                "execution_time_ms": report.summary.execution_time_ms,
                "validated_at": report.summary.validated_at.to_rfc3339()
            }
        });

        serde_json::to_string_pretty(&json_report)
            .map_err(|e| CompletenessError::config(format!("JSON serialization failed: {e}")))
    }
}
