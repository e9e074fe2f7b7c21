//! Core domain models for documentation violations and validation results
//!
//! Architecture: Rich Domain Models - Violations are entities with behavior, not just data
//! - Violations know which rule produced them and how to render their diagnostic line
//! - ValidationReport acts as an aggregate root owning the violation count
//! - Rule failures are recorded values; only I/O and configuration problems are errors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single rule failure for a single document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Identifier of the rule that failed (`frontmatter` or `title`)
    pub rule_id: String,
    /// Path of the document as reported to the user
    pub file_path: PathBuf,
    /// Human-readable description, phrased to follow "<path> is"
    pub message: String,
    /// When this violation was detected
    pub detected_at: DateTime<Utc>,
}

impl Violation {
    /// Create a new violation
    pub fn new(rule_id: impl Into<String>, file_path: PathBuf, message: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            file_path,
            message: message.into(),
            detected_at: Utc::now(),
        }
    }

    /// Diagnostic line, e.g. `ERROR: docs/a.md is missing YAML frontmatter`
    pub fn format_display(&self) -> String {
        format!("ERROR: {} is {}", self.file_path.display(), self.message)
    }
}

/// Summary statistics for a validation report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Number of documents inspected
    pub total_files: usize,
    /// Total execution time in milliseconds
    pub execution_time_ms: u64,
    /// Timestamp when validation was performed
    pub validated_at: DateTime<Utc>,
}

/// Every violation found during one run, in detection order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// All violations, frontmatter before title within each document
    pub violations: Vec<Violation>,
    /// Summary statistics
    pub summary: ValidationSummary,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
            summary: ValidationSummary {
                validated_at: Utc::now(),
                ..Default::default()
            },
        }
    }

    /// Add a violation to the report
    pub fn add_violation(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Number of individual rule failures, not failing documents
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    /// Whether the report contains any violations
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Violations produced by one rule
    pub fn violations_for_rule<'a>(
        &'a self,
        rule_id: &'a str,
    ) -> impl Iterator<Item = &'a Violation> {
        self.violations.iter().filter(move |v| v.rule_id == rule_id)
    }

    /// Set the number of files analyzed
    pub fn set_files_analyzed(&mut self, count: usize) {
        self.summary.total_files = count;
    }

    /// Set the execution time
    pub fn set_execution_time(&mut self, duration_ms: u64) {
        self.summary.execution_time_ms = duration_ms;
    }

    /// Exit status for the process: the raw violation count
    pub fn exit_code(&self) -> i32 {
        i32::try_from(self.violation_count()).unwrap_or(i32::MAX)
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Error types that can occur during a completeness run
#[derive(Debug, thiserror::Error)]
pub enum CompletenessError {
    /// Configuration file could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Generic I/O failure
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// A discovered document could not be opened or decoded as text
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A document with no lines reached the title rule
    #[error("{path} has no first line to check for a title")]
    EmptyDocument { path: String },

    /// Discovery pattern compilation failed
    #[error("Pattern error: {message}")]
    Pattern { message: String },
}

impl CompletenessError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a read error for a document path
    pub fn read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create an empty-document error for a document path
    pub fn empty_document(path: impl Into<String>) -> Self {
        Self::EmptyDocument { path: path.into() }
    }

    /// Create a pattern error
    pub fn pattern(message: impl Into<String>) -> Self {
        Self::Pattern {
            message: message.into(),
        }
    }
}

/// Result type for completeness operations
pub type CompletenessResult<T> = Result<T, CompletenessError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_violation_creation() {
        let violation = Violation::new(
            "frontmatter",
            PathBuf::from("docs/b.md"),
            "missing YAML frontmatter",
        );

        assert_eq!(violation.rule_id, "frontmatter");
        assert_eq!(violation.file_path, Path::new("docs/b.md"));
        assert_eq!(violation.message, "missing YAML frontmatter");
    }

    #[test]
    fn test_violation_display() {
        let violation = Violation::new(
            "title",
            PathBuf::from("docs/a.md"),
            "missing a top-level title",
        );

        assert_eq!(
            violation.format_display(),
            "ERROR: docs/a.md is missing a top-level title"
        );
    }

    #[test]
    fn test_count_is_per_violation_not_per_file() {
        let mut report = ValidationReport::new();
        let path = PathBuf::from("docs/plain.md");

        report.add_violation(Violation::new(
            "frontmatter",
            path.clone(),
            "missing YAML frontmatter",
        ));
        report.add_violation(Violation::new("title", path, "missing a top-level title"));
        report.set_files_analyzed(1);

        assert_eq!(report.violation_count(), 2);
        assert_eq!(report.exit_code(), 2);
        assert_eq!(report.violations_for_rule("title").count(), 1);
    }

    #[test]
    fn test_empty_report() {
        let report = ValidationReport::default();

        assert!(!report.has_violations());
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.summary.total_files, 0);
    }

    #[test]
    fn test_error_messages() {
        let err = CompletenessError::config("bad version");
        assert_eq!(err.to_string(), "Configuration error: bad version");

        let err = CompletenessError::read(
            "docs/x.md",
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "stream did not contain valid UTF-8",
            ),
        );
        assert!(err.to_string().starts_with("Failed to read docs/x.md"));

        let err = CompletenessError::empty_document("docs/empty.md");
        assert_eq!(err.to_string(), "docs/empty.md has no first line to check for a title");
    }
}
