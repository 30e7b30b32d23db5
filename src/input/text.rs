use super::{title_from_path, LoadError, LoadedText};
use std::fs;
use std::path::Path;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Load a plain UTF-8 story file. A leading byte order mark is dropped.
pub fn load(path: &str) -> Result<LoadedText, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let mut content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if content.starts_with(BYTE_ORDER_MARK) {
        content.drain(..BYTE_ORDER_MARK.len_utf8());
    }

    LoadedText::new(
        content,
        format!("text:{}", path.display()),
        title_from_path(path),
    )
}
