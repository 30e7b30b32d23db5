use super::abbreviation::ShieldMap;
use std::ops::Range;

/// A sentence end found by [`find_boundaries`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary {
    /// Byte span of the terminator run (`.`, `!`, `?` in any combination).
    pub terminator: Range<usize>,
    /// Byte offset of the character that starts the next sentence.
    pub cut: usize,
}

pub fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Quote or apostrophe that may close a sentence right after its terminator.
pub fn is_closing_quote(c: char) -> bool {
    matches!(c, '"' | '\'' | '\u{201D}' | '\u{2019}' | '\u{00BB}')
}

/// A character that may open a new sentence: ASCII capitals, plus the
/// accented capitals of Latin-1 Supplement and Latin Extended-A.
pub fn starts_sentence(c: char) -> bool {
    c.is_ascii_uppercase() || (('\u{00C0}'..='\u{017F}').contains(&c) && c.is_uppercase())
}

/// Scans `text` for sentence ends.
///
/// A boundary is a terminator run not covered by `shields`, an optional
/// closing quote, at least one whitespace character, and then a character
/// accepted by [`starts_sentence`]. That last character is only peeked at; the
/// cut lands right before it. A shielded abbreviation never opens a sentence,
/// so `left. Mr. Brown` stays whole.
pub fn find_boundaries(text: &str, shields: &ShieldMap<'_>) -> Vec<Boundary> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let is_open_terminator =
        |(offset, c): (usize, char)| is_terminator(c) && !shields.covers(offset);

    let mut boundaries = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if !is_open_terminator(chars[i]) {
            i += 1;
            continue;
        }

        let run_start = i;
        while i < chars.len() && is_open_terminator(chars[i]) {
            i += 1;
        }
        let run_end = chars.get(i).map_or(text.len(), |&(offset, _)| offset);

        let mut peek = i;
        if chars.get(peek).is_some_and(|&(_, c)| is_closing_quote(c)) {
            peek += 1;
        }
        let whitespace_start = peek;
        while chars.get(peek).is_some_and(|&(_, c)| c.is_whitespace()) {
            peek += 1;
        }

        if peek > whitespace_start {
            if let Some(&(offset, c)) = chars.get(peek) {
                if starts_sentence(c) && !shields.starts_at(offset) {
                    boundaries.push(Boundary {
                        terminator: chars[run_start].0..run_end,
                        cut: offset,
                    });
                }
            }
        }
    }

    boundaries
}

/// Splits `text` into consecutive untrimmed spans at every boundary. The
/// spans cover the whole text; the last one holds whatever follows the final
/// boundary.
pub fn sentence_spans(text: &str, shields: &ShieldMap<'_>) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = 0;

    for boundary in find_boundaries(text, shields) {
        spans.push(start..boundary.cut);
        start = boundary.cut;
    }

    if start < text.len() {
        spans.push(start..text.len());
    }

    spans
}
