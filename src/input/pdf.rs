use super::{title_from_path, LoadError, LoadedText};
use std::fs;
use std::path::Path;

/// Load story text from a PDF file using pdf-extract.
pub fn load(path: &str) -> Result<LoadedText, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let buffer = fs::read(path).map_err(|e| LoadError::PdfParse(e.to_string()))?;

    let text = pdf_extract::extract_text_from_mem(&buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))?;

    LoadedText::new(
        text,
        format!("pdf:{}", path.display()),
        title_from_path(path),
    )
}
