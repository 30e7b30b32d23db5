use super::abbreviation::ShieldMap;
use super::boundary::sentence_spans;
use super::normalize::normalize_whitespace;
use std::ops::Range;

/// Splits story text into trimmed, non-empty sentences in source order.
///
/// Never fails. Empty or whitespace-only input yields an empty vector;
/// deciding whether that is acceptable is up to the caller.
pub fn parse_sentences(text: &str) -> Vec<String> {
    let normalized = normalize_whitespace(text);
    if normalized.is_empty() {
        return Vec::new();
    }

    let shields = ShieldMap::build(&normalized);
    let sentences: Vec<String> = sentence_spans(&normalized, &shields)
        .into_iter()
        .filter_map(|span| restore_sentence(&normalized, span, &shields))
        .collect();

    tracing::trace!(
        sentences = sentences.len(),
        abbreviations = shields.len(),
        "parsed sentences"
    );

    sentences
}

/// Materialises the sentence in `span`, putting every shielded abbreviation
/// back verbatim. Returns `None` when the span is blank.
///
/// Spans come from the scanner, which never cuts inside a shielded
/// occurrence, so each one lies wholly inside a single sentence.
pub fn restore_sentence(text: &str, span: Range<usize>, shields: &ShieldMap<'_>) -> Option<String> {
    let mut restored = String::with_capacity(span.len());
    let mut cursor = span.start;

    for shielded in shields.within(span.clone()) {
        debug_assert!(shielded.span.end <= span.end, "shield straddles a cut");
        restored.push_str(&text[cursor..shielded.span.start]);
        restored.push_str(shielded.original);
        cursor = shielded.span.end;
    }
    restored.push_str(&text[cursor..span.end]);

    let trimmed = restored.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == restored.len() {
        Some(restored)
    } else {
        Some(trimmed.to_string())
    }
}

/// Sentence splitting as a method on anything string-like.
pub trait SplitSentences {
    fn split_sentences(&self) -> Vec<String>;
}

impl<T: AsRef<str>> SplitSentences for T {
    fn split_sentences(&self) -> Vec<String> {
        parse_sentences(self.as_ref())
    }
}
