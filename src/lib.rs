//! Docs Completeness - documentation quality gate for CI pipelines
//!
//! Architecture: Clean Architecture - Library interface serves as the application layer
//! - Every Markdown file under `docs/` must open with `---` and have `# ` on its first line
//! - Rule failures are counted and reported, never raised
//! - An unreadable or empty document aborts the run

pub mod analyzer;
pub mod config;
pub mod discovery;
pub mod domain;
pub mod report;
pub mod rules;

// Re-export main types for convenient access
pub use domain::{
    CompletenessError, CompletenessResult, Document, ValidationReport, ValidationSummary, Violation,
};

pub use config::{CheckerConfig, ConfigBuilder, DocsConfig, RuleSettings};

pub use analyzer::Analyzer;

pub use report::{OutputFormat, ReportFormatter};

pub use rules::{DocumentRule, FrontmatterRule, RuleSet, TitleRule};

use std::io::Write;
use std::path::Path;

/// High-level checker combining analysis with streamed output
pub struct CompletenessChecker {
    analyzer: Analyzer,
    formatter: ReportFormatter,
}

impl CompletenessChecker {
    /// Create a checker with the given configuration and plain output
    pub fn new_with_config(config: CheckerConfig) -> CompletenessResult<Self> {
        Ok(Self {
            analyzer: Analyzer::new(config)?,
            formatter: ReportFormatter::default(),
        })
    }

    /// Create a checker with default configuration
    pub fn new() -> CompletenessResult<Self> {
        Self::new_with_config(CheckerConfig::default())
    }

    /// Select the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.formatter = ReportFormatter::new(format);
        self
    }

    pub fn config(&self) -> &CheckerConfig {
        self.analyzer.config()
    }

    /// Scan under `base`, writing output to `writer`, and return the report.
    ///
    /// Streaming formats write each violation as soon as it is detected, so lines
    /// produced before a fatal error are already in `writer`.
    pub fn check_to<W: Write>(
        &self,
        base: &Path,
        mut writer: W,
    ) -> CompletenessResult<ValidationReport> {
        let formatter = self.formatter;
        let report = self.analyzer.analyze_with(base, |violation| {
            formatter.write_violation(violation, &mut writer)
        })?;

        if let Some(rendered) = formatter.format_report(&report)? {
            writeln!(writer, "{rendered}")?;
        }

        writer.flush()?;
        Ok(report)
    }

    /// Scan the working directory's documentation tree, printing to stdout
    pub fn run(&self) -> CompletenessResult<ValidationReport> {
        let stdout = std::io::stdout();
        self.check_to(Path::new(""), stdout.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let docs = temp_dir.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("a.md"), "---\ntitle: x\n---\n# Hello\n").unwrap();
        fs::write(docs.join("b.md"), "# Hello\nbody text\n").unwrap();
        fs::write(docs.join("c.md"), "---\n# Hello\n---\nbody\n").unwrap();
        temp_dir
    }

    #[test]
    fn test_check_to_streams_plain_lines() {
        let temp_dir = fixture();
        let checker = CompletenessChecker::new().unwrap();

        let mut out = Vec::new();
        let report = checker.check_to(temp_dir.path(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap().replace('\\', "/");

        assert_eq!(
            text,
            "ERROR: docs/a.md is missing a top-level title\n\
             ERROR: docs/b.md is missing YAML frontmatter\n\
             ERROR: docs/c.md is missing a top-level title\n"
        );
        assert_eq!(report.exit_code(), 3);
    }

    #[test]
    fn test_json_output_count_matches_exit_code() {
        let temp_dir = fixture();
        let checker = CompletenessChecker::new().unwrap().with_format(OutputFormat::Json);

        let mut out = Vec::new();
        let report = checker.check_to(temp_dir.path(), &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(json["summary"]["violation_count"], report.exit_code());
        assert_eq!(json["summary"]["total_files"], 3);
    }

    #[test]
    fn test_empty_tree_prints_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let checker = CompletenessChecker::new().unwrap();

        let mut out = Vec::new();
        let report = checker.check_to(temp_dir.path(), &mut out).unwrap();

        assert!(out.is_empty());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_lines_before_read_error_are_written() {
        let temp_dir = TempDir::new().unwrap();
        let docs = temp_dir.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("a.md"), "# Hello\n").unwrap();
        fs::write(docs.join("z.md"), [0xff, 0xfe]).unwrap();

        let checker = CompletenessChecker::new().unwrap();
        let mut out = Vec::new();
        let result = checker.check_to(temp_dir.path(), &mut out);

        assert!(result.is_err());
        assert!(String::from_utf8(out).unwrap().contains("a.md is missing YAML frontmatter"));
    }

    #[test]
    fn test_empty_document_writes_frontmatter_line_then_fails() {
        let temp_dir = TempDir::new().unwrap();
        let docs = temp_dir.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("empty.md"), "").unwrap();

        let checker = CompletenessChecker::new().unwrap();
        let mut out = Vec::new();
        let result = checker.check_to(temp_dir.path(), &mut out);

        assert!(matches!(result, Err(CompletenessError::EmptyDocument { .. })));
        assert_eq!(
            String::from_utf8(out).unwrap().replace('\\', "/"),
            "ERROR: docs/empty.md is missing YAML frontmatter\n"
        );
    }

    #[test]
    fn test_config_file_disables_rule() {
        let temp_dir = fixture();
        let config_path = temp_dir.path().join("validate_completeness.yaml");
        fs::write(&config_path, "version: \"1.0\"\nrules:\n  title: false\n").unwrap();

        let config = CheckerConfig::load_from_file(&config_path).unwrap();
        let checker = CompletenessChecker::new_with_config(config).unwrap();
        let report = checker.check_to(temp_dir.path(), std::io::sink()).unwrap();

        assert!(!checker.config().rules.title);
        assert_eq!(report.violation_count(), 1);
    }
}
