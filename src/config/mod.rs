//! Configuration loading and management for docs completeness
//!
//! Architecture: Anti-Corruption Layer - Configuration translates external YAML formats
//! - Raw YAML structures are converted to clean domain objects
//! - Defaults reproduce the zero-configuration `docs/**/*.md` scan
//! - Missing sections fall back to defaults so partial files stay valid

use crate::domain::violations::{CompletenessError, CompletenessResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Config file names looked up in the working directory, in order
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "validate_completeness.yaml",
    "validate_completeness.yml",
    ".validate_completeness.yaml",
];

const SUPPORTED_VERSIONS: &[&str] = &["1.0"];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Configuration format version
    pub version: String,
    /// Which files are inspected
    #[serde(default)]
    pub docs: DocsConfig,
    /// Which rules are applied
    #[serde(default)]
    pub rules: RuleSettings,
}

/// Documentation tree location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Documentation root, relative to the scan base
    #[serde(default = "default_root")]
    pub root: String,
    /// Glob pattern applied beneath the root
    #[serde(default = "default_pattern")]
    pub pattern: String,
}

/// Per-rule toggles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSettings {
    #[serde(default = "default_true")]
    pub frontmatter: bool,
    #[serde(default = "default_true")]
    pub title: bool,
}

impl CheckerConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CompletenessResult<Self> {
        let contents = fs::read_to_string(&path).map_err(|e| {
            CompletenessError::config(format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            CompletenessError::config(format!(
                "Failed to parse config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load configuration from string content
    pub fn load_from_str(content: &str) -> CompletenessResult<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| CompletenessError::config(format!("Failed to parse config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Load the first default config file present under `dir`, or fall back to defaults
    pub fn discover<P: AsRef<Path>>(dir: P) -> CompletenessResult<Self> {
        for name in DEFAULT_CONFIG_FILES {
            let candidate = dir.as_ref().join(name);
            if candidate.is_file() {
                return Self::load_from_file(candidate);
            }
        }

        Ok(Self::default())
    }

    /// Validate the configuration for consistency and correctness
    pub fn validate(&self) -> CompletenessResult<()> {
        if !SUPPORTED_VERSIONS.contains(&self.version.as_str()) {
            return Err(CompletenessError::config(format!(
                "Unsupported configuration version: {}. Supported versions: {}",
                self.version,
                SUPPORTED_VERSIONS.join(", ")
            )));
        }

        if self.docs.root.trim().is_empty() {
            return Err(CompletenessError::config("docs.root must not be empty"));
        }

        glob::Pattern::new(&self.docs.pattern).map_err(|e| {
            CompletenessError::config(format!(
                "Invalid docs.pattern '{}': {}",
                self.docs.pattern, e
            ))
        })?;

        Ok(())
    }

    /// Whether the rule with this id is enabled. Unknown ids are disabled.
    pub fn rule_enabled(&self, rule_id: &str) -> bool {
        match rule_id {
            "frontmatter" => self.rules.frontmatter,
            "title" => self.rules.title,
            _ => false,
        }
    }

    /// Serialize back to YAML
    pub fn to_yaml(&self) -> CompletenessResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| CompletenessError::config(format!("Failed to serialize config: {e}")))
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            docs: DocsConfig::default(),
            rules: RuleSettings::default(),
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            pattern: default_pattern(),
        }
    }
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            frontmatter: true,
            title: true,
        }
    }
}

fn default_root() -> String {
    "docs".to_string()
}

fn default_pattern() -> String {
    "**/*.md".to_string()
}

fn default_true() -> bool {
    true
}

/// Configuration builder for programmatic construction
pub struct ConfigBuilder {
    config: CheckerConfig,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self { config: CheckerConfig::default() }
    }

    /// Set the documentation root
    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.config.docs.root = root.into();
        self
    }

    /// Set the glob pattern under the root
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.docs.pattern = pattern.into();
        self
    }

    /// Enable or disable the frontmatter rule
    pub fn frontmatter(mut self, enabled: bool) -> Self {
        self.config.rules.frontmatter = enabled;
        self
    }

    /// Enable or disable the title rule
    pub fn title(mut self, enabled: bool) -> Self {
        self.config.rules.title = enabled;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> CompletenessResult<CheckerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_matches_plain_scan() {
        let config = CheckerConfig::default();

        assert_eq!(config.docs.root, "docs");
        assert_eq!(config.docs.pattern, "**/*.md");
        assert!(config.rule_enabled("frontmatter"));
        assert!(config.rule_enabled("title"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config =
            CheckerConfig::load_from_str("version: \"1.0\"\nrules:\n  title: false\n").unwrap();

        assert_eq!(config.docs.root, "docs");
        assert!(config.rules.frontmatter);
        assert!(!config.rules.title);
    }

    #[test]
    fn test_unsupported_version() {
        let err = CheckerConfig::load_from_str("version: \"2.0\"\n").unwrap_err();
        assert!(err.to_string().contains("Unsupported configuration version"));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let result = ConfigBuilder::new().pattern("[unclosed").build();
        assert!(result.is_err());

        let result = ConfigBuilder::new().root("  ").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_yaml_round_trip_through_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConfigBuilder::new().root("handbook").frontmatter(false).build().unwrap();
        let path = temp_dir.path().join("validate_completeness.yaml");
        fs::write(&path, config.to_yaml().unwrap()).unwrap();

        let loaded = CheckerConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_discover_prefers_listed_order() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(CheckerConfig::discover(temp_dir.path()).unwrap(), CheckerConfig::default());

        fs::write(
            temp_dir.path().join(".validate_completeness.yaml"),
            "version: \"1.0\"\ndocs:\n  root: hidden\n",
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("validate_completeness.yml"),
            "version: \"1.0\"\ndocs:\n  root: manual\n",
        )
        .unwrap();

        let config = CheckerConfig::discover(temp_dir.path()).unwrap();
        assert_eq!(config.docs.root, "manual");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err =
            CheckerConfig::load_from_file("/nonexistent/validate_completeness.yaml").unwrap_err();
        assert!(matches!(err, CompletenessError::Configuration { .. }));
    }
}
