//! Main analysis orchestrator for docs completeness
//!
//! CDD Principle: Domain Services - Analyzer drives the single validation pass
//! - Discovers documents, reads them one at a time, applies every enabled rule
//! - Violations are counted and handed to the caller as soon as they are found
//! - The first unreadable or empty document aborts the run

use crate::config::CheckerConfig;
use crate::discovery::discover_documents;
use crate::domain::{CompletenessResult, Document, ValidationReport, Violation};
use crate::rules::RuleSet;
use std::path::Path;
use std::time::Instant;

/// Runs the completeness rules over a documentation tree
pub struct Analyzer {
    /// Configuration for this analysis
    config: CheckerConfig,
    /// Rules enabled by the configuration
    rules: RuleSet,
}

impl Analyzer {
    /// Create a new analyzer with the given configuration
    pub fn new(config: CheckerConfig) -> CompletenessResult<Self> {
        config.validate()?;
        let rules = RuleSet::from_config(&config);
        tracing::debug!("Enabled rules: {}", rules.ids().join(", "));

        Ok(Self { config, rules })
    }

    /// Create an analyzer with default configuration
    pub fn with_defaults() -> CompletenessResult<Self> {
        Self::new(CheckerConfig::default())
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Scan the documentation tree under `base` and return the full report
    pub fn analyze(&self, base: &Path) -> CompletenessResult<ValidationReport> {
        self.analyze_with(base, |_| Ok(()))
    }

    /// Scan under `base`, calling `on_violation` for each violation as it is detected.
    ///
    /// An empty `base` scans relative to the working directory. Documents are
    /// processed sequentially in discovery order; a read failure, an empty
    /// document reaching the title rule, or an error from `on_violation` stops
    /// the scan and is returned.
    pub fn analyze_with<F>(
        &self,
        base: &Path,
        mut on_violation: F,
    ) -> CompletenessResult<ValidationReport>
    where
        F: FnMut(&Violation) -> CompletenessResult<()>,
    {
        let start_time = Instant::now();
        let mut report = ValidationReport::new();

        let docs = &self.config.docs;
        let documents = discover_documents(base, &docs.root, &docs.pattern)?;
        let total_files = documents.len();

        for discovered in &documents {
            tracing::debug!("Checking {}", discovered.display_path.display());

            let document = Document::load(&discovered.path, &discovered.display_path)?;
            self.check_document(&document, &mut report, &mut on_violation)?;
        }

        report.set_files_analyzed(total_files);
        report.set_execution_time(start_time.elapsed().as_millis() as u64);

        tracing::info!(
            "Checked {} documents, {} violation{}",
            total_files,
            report.violation_count(),
            if report.violation_count() == 1 { "" } else { "s" }
        );

        Ok(report)
    }

    /// Apply each rule in order, recording a violation before moving to the next rule
    fn check_document<F>(
        &self,
        document: &Document,
        report: &mut ValidationReport,
        on_violation: &mut F,
    ) -> CompletenessResult<()>
    where
        F: FnMut(&Violation) -> CompletenessResult<()>,
    {
        for rule in self.rules.iter() {
            if let Some(violation) = rule.evaluate(document)? {
                on_violation(&violation)?;
                report.add_violation(violation);
            }
        }

        Ok(())
    }
}
