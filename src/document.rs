use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config;

/// A text file read fully into memory as raw lines.
///
/// Lines keep their original case, punctuation and trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    filepath: String,
    lines: Vec<String>,
}

impl Document {
    /// Opens `filepath` relative to the configured base directory.
    pub fn open(filepath: &str) -> Result<Self> {
        Self::open_in(config::base_dir(), filepath)
    }

    /// Opens `filepath` relative to `base`. Absolute paths ignore `base`.
    pub fn open_in<P: AsRef<Path>>(base: P, filepath: &str) -> Result<Self> {
        let resolved: PathBuf = base.as_ref().join(filepath);

        if !resolved.exists() {
            anyhow::bail!("File not found: {}", resolved.display());
        }

        if resolved.is_dir() {
            anyhow::bail!("Path is a directory, not a file: {}", resolved.display());
        }

        let text = std::fs::read_to_string(&resolved)
            .with_context(|| format!("Failed to read file: {}", resolved.display()))?;

        let document = Self::from_text(filepath, &text);
        debug!(
            path = %resolved.display(),
            lines = document.lines.len(),
            "loaded document"
        );

        Ok(document)
    }

    /// Builds a document from in-memory text, splitting after each newline.
    pub fn from_text(filepath: &str, text: &str) -> Self {
        Document {
            filepath: filepath.to_string(),
            lines: text.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    /// The path as given by the caller, before base-directory resolution.
    pub fn filepath(&self) -> &str {
        &self.filepath
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
