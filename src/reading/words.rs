use super::normalize::is_space;

/// Counts whitespace-delimited words. Punctuation stays attached, so
/// `"Hello,"` is one word.
pub fn word_count(text: &str) -> usize {
    text.split(is_space).filter(|w| !w.is_empty()).count()
}

/// A word of a sentence as the reader can tap it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TappableWord<'a> {
    /// The word exactly as it appears in the sentence.
    pub original: &'a str,
    /// Vocabulary lookup key, `None` for pure punctuation.
    pub key: Option<String>,
}

/// Splits a sentence into its whitespace-delimited words, each paired with
/// the key used to look it up and to mark it as saved.
pub fn tappable_words(sentence: &str) -> Vec<TappableWord<'_>> {
    sentence
        .split(is_space)
        .filter(|w| !w.is_empty())
        .map(|original| TappableWord {
            original,
            key: lookup_key(original),
        })
        .collect()
}

/// Normalises a tapped word for lookup: leading punctuation goes, trailing
/// punctuation goes except periods (so `"M."` survives), the result is
/// lowercased. Apostrophes are kept for contractions like `don't` or `c'est`.
pub fn lookup_key(word: &str) -> Option<String> {
    let key = word
        .trim_start_matches(|c: char| !(is_word_char(c) || c == '\''))
        .trim_end_matches(|c: char| !(is_word_char(c) || c == '\'' || c == '.'))
        .to_lowercase();

    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
