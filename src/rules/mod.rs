//! Presence rules applied to every document
//!
//! Architectural Principle: Strategy - each rule is an independent check over raw text
//! - Rules never parse Markdown; they inspect literal prefixes and substrings
//! - A failing rule yields exactly one violation for the document
//! - A document with no lines at all cannot be checked for a title and aborts the run

use crate::config::CheckerConfig;
use crate::domain::{CompletenessError, CompletenessResult, Document, Violation};

/// Literal marker that must open the document
pub const FRONTMATTER_MARKER: &str = "---";

/// Substring that must appear on the first line
pub const TITLE_MARKER: &str = "# ";

/// A check applied to a single document
pub trait DocumentRule {
    /// Stable identifier used in configuration and reports
    fn id(&self) -> &'static str;

    /// Message rendered after "<path> is"
    fn message(&self) -> &'static str;

    /// Whether the document satisfies this rule
    fn check(&self, document: &Document) -> CompletenessResult<bool>;

    /// Run the check and build a violation on failure
    fn evaluate(&self, document: &Document) -> CompletenessResult<Option<Violation>> {
        if self.check(document)? {
            return Ok(None);
        }

        Ok(Some(Violation::new(
            self.id(),
            document.display_path.clone(),
            self.message(),
        )))
    }
}

/// Content must start with `---`
#[derive(Debug, Default, Clone, Copy)]
pub struct FrontmatterRule;

impl DocumentRule for FrontmatterRule {
    fn id(&self) -> &'static str {
        "frontmatter"
    }

    fn message(&self) -> &'static str {
        "missing YAML frontmatter"
    }

    fn check(&self, document: &Document) -> CompletenessResult<bool> {
        Ok(document.content.starts_with(FRONTMATTER_MARKER))
    }
}

/// First line must contain `# `.
///
/// Only line 1 is inspected, so a heading that follows a frontmatter block
/// does not satisfy this rule. An empty document has no line 1 and is an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct TitleRule;

impl DocumentRule for TitleRule {
    fn id(&self) -> &'static str {
        "title"
    }

    fn message(&self) -> &'static str {
        "missing a top-level title"
    }

    fn check(&self, document: &Document) -> CompletenessResult<bool> {
        let line = document.first_line().ok_or_else(|| {
            CompletenessError::empty_document(document.display_path.display().to_string())
        })?;

        Ok(line.contains(TITLE_MARKER))
    }
}

/// Ordered set of enabled rules
pub struct RuleSet {
    rules: Vec<Box<dyn DocumentRule>>,
}

impl RuleSet {
    /// Every built-in rule, frontmatter first
    pub fn builtin() -> Self {
        Self {
            rules: vec![Box::new(FrontmatterRule), Box::new(TitleRule)],
        }
    }

    /// Built-in rules filtered by the configuration toggles
    pub fn from_config(config: &CheckerConfig) -> Self {
        let mut set = Self::builtin();
        set.rules.retain(|rule| config.rule_enabled(rule.id()));
        set
    }

    /// Rules in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = &dyn DocumentRule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    /// Identifiers of the rules in this set
    pub fn ids(&self) -> Vec<&'static str> {
        self.iter().map(|rule| rule.id()).collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}
