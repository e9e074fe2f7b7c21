//! A Markdown document loaded for inspection

use crate::domain::violations::{CompletenessError, CompletenessResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Characters that end a line, matching universal-newline text decoding
pub const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// A discovered file and its full text content
#[derive(Debug, Clone)]
pub struct Document {
    /// Path used to open the file
    pub path: PathBuf,
    /// Path shown in diagnostics
    pub display_path: PathBuf,
    /// Raw text content
    pub content: String,
}

impl Document {
    /// Build a document from content already in memory
    pub fn new(display_path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let display_path = display_path.into();
        Self {
            path: display_path.clone(),
            display_path,
            content: content.into(),
        }
    }

    /// Read a document from disk. Fails if the path cannot be opened or is not UTF-8.
    pub fn load(path: &Path, display_path: &Path) -> CompletenessResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CompletenessError::read(display_path.display().to_string(), e))?;

        Ok(Self {
            path: path.to_path_buf(),
            display_path: display_path.to_path_buf(),
            content,
        })
    }

    /// Text up to the first line break. An empty document has no lines and yields `None`.
    pub fn first_line(&self) -> Option<&str> {
        if self.content.is_empty() {
            return None;
        }

        match self.content.find(LINE_BREAKS) {
            Some(end) => Some(&self.content[..end]),
            None => Some(&self.content),
        }
    }
}
