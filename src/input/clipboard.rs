use super::{LoadError, LoadedText};

/// Load pasted story text from the system clipboard.
pub fn load() -> Result<LoadedText, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    let title = suggested_title(&text);
    LoadedText::new(text, "clipboard".to_string(), title)
}

/// First few words of the pasted text.
fn suggested_title(text: &str) -> String {
    const TITLE_WORDS: usize = 6;

    let words: Vec<&str> = text.split_whitespace().take(TITLE_WORDS + 1).collect();
    if words.len() > TITLE_WORDS {
        format!("{}…", words[..TITLE_WORDS].join(" "))
    } else if words.is_empty() {
        "Pasted story".to_string()
    } else {
        words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggested_title_short_text() {
        assert_eq!(suggested_title("  Hello   world. "), "Hello world.");
    }

    #[test]
    fn test_suggested_title_long_text() {
        assert_eq!(
            suggested_title("one two three four five six seven eight"),
            "one two three four five six…"
        );
    }

    #[test]
    fn test_suggested_title_blank() {
        assert_eq!(suggested_title(" "), "Pasted story");
    }
}
