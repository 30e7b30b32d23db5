pub mod abbreviation;
pub mod boundary;
pub mod normalize;
pub mod sentence;
pub mod words;

pub use abbreviation::{is_abbreviation, ShieldMap, ABBREVIATIONS};
pub use boundary::{find_boundaries, Boundary};
pub use normalize::{is_space, normalize_whitespace};
pub use sentence::{parse_sentences, SplitSentences};
pub use words::{lookup_key, tappable_words, word_count, TappableWord};
