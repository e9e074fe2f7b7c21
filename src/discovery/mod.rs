//! Documentation file discovery using recursive glob patterns
//!
//! Architectural Principle: Service Layer - discovery owns the mapping from config to paths
//! - The base directory and root are matched literally, only the pattern is a glob
//! - Paths are reported relative to the base so output reads `docs/a.md`
//! - Names starting with `.` are never matched and hidden directories are not entered

use crate::domain::violations::{CompletenessError, CompletenessResult};
use glob::MatchOptions;
use std::path::{Path, PathBuf};

/// A path yielded by discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredPath {
    /// Path used to open the file
    pub path: PathBuf,
    /// Path relative to the scan base, used in diagnostics
    pub display_path: PathBuf,
}

/// Build the full glob expression for `base/root/pattern`
pub fn glob_expression(base: &Path, root: &str, pattern: &str) -> String {
    let root = glob::Pattern::escape(root.trim_end_matches('/'));

    if base.as_os_str().is_empty() {
        format!("{root}/{pattern}")
    } else {
        let base = glob::Pattern::escape(&base.to_string_lossy());
        format!("{}/{root}/{pattern}", base.trim_end_matches('/'))
    }
}

/// Find every path under `base/root` matching `pattern`, in glob order.
///
/// An empty `base` means the working directory. Entries that cannot be
/// listed are skipped with a warning; a missing root yields nothing.
/// Wildcards never match a leading `.`, so hidden files and everything
/// beneath hidden directories are left out.
pub fn discover_documents(
    base: &Path,
    root: &str,
    pattern: &str,
) -> CompletenessResult<Vec<DiscoveredPath>> {
    let expression = glob_expression(base, root, pattern);
    tracing::debug!("Discovering documents with pattern {}", expression);

    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let entries = glob::glob_with(&expression, options).map_err(|e| {
        CompletenessError::pattern(format!("Invalid pattern '{expression}': {e}"))
    })?;

    let mut found = Vec::new();

    for entry in entries {
        match entry {
            Ok(path) => {
                let display_path = path
                    .strip_prefix(base)
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|_| path.clone());
                found.push(DiscoveredPath { path, display_path });
            }
            Err(e) => {
                tracing::warn!(
                    "Skipping unreadable entry {}: {}",
                    e.path().display(),
                    e.error()
                );
            }
        }
    }

    tracing::debug!("Discovered {} documents", found.len());
    Ok(found)
}
