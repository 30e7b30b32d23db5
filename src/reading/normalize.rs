/// Whitespace as the splitter sees it: Unicode `White_Space` plus the byte
/// order mark, which editors leave at the start of UTF-8 files.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Trims `text` and collapses every run of whitespace to a single space.
///
/// Runs before shielding and scanning so the scanner can rely on exactly one
/// space between a terminator and the next sentence.
pub fn normalize_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());

    for word in text.split(is_space).filter(|w| !w.is_empty()) {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(word);
    }

    normalized
}
