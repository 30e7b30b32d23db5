//! Story import: turns a file or the clipboard into story text.

use crate::reading::is_space;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod clipboard;
pub mod epub;
pub mod pdf;
pub mod text;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No text found in {0}")]
    Empty(String),
}

/// Raw story text plus where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedText {
    pub content: String,
    /// `pdf:<path>`, `epub:<path>`, `text:<path>` or `clipboard`
    pub source: String,
    pub suggested_title: String,
}

impl LoadedText {
    /// Rejects blank content so every import can become a story.
    pub fn new(
        content: String,
        source: String,
        suggested_title: String,
    ) -> Result<Self, LoadError> {
        if content.trim_matches(is_space).is_empty() {
            return Err(LoadError::Empty(source));
        }
        Ok(Self {
            content,
            source,
            suggested_title,
        })
    }
}

/// Loads a story file, picking the reader from the extension. Anything that
/// is not `.pdf` or `.epub` is read as UTF-8 text.
pub fn load(path: &str) -> Result<LoadedText, LoadError> {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let loaded = match extension.as_deref() {
        Some("pdf") => pdf::load(path)?,
        Some("epub") => epub::load(path)?,
        _ => text::load(path)?,
    };

    tracing::info!(source = %loaded.source, bytes = loaded.content.len(), "story text loaded");
    Ok(loaded)
}

/// File stem used as the default story title.
pub fn title_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.replace(['_', '-'], " ").trim().to_string())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| "Untitled".to_string())
}
