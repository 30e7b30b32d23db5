use lazy_static::lazy_static;
use std::collections::{BTreeMap, HashSet};
use std::ops::Range;

/// Tokens whose trailing period never ends a sentence.
///
/// Case-sensitive. `May` is left out on purpose since it is also a full word.
pub const ABBREVIATIONS: &[&str] = &[
    // Titles
    "Mr", "Mrs", "Ms", "Dr", "Prof", "Sr", "Jr",
    // Qualifiers
    "vs", "etc", "e.g", "i.e", "viz", "al",
    // Addresses and companies
    "St", "Ave", "Blvd", "Rd", "Inc", "Ltd", "Co",
    // Months
    "Jan", "Feb", "Mar", "Apr", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    // Weekdays
    "Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun",
    // French
    "M", "Mme", "Mlle", "Dr", "Pr",
];

lazy_static! {
    static ref ABBREVIATION_SET: HashSet<&'static str> = ABBREVIATIONS.iter().copied().collect();
    static ref LONGEST_ABBREVIATION: usize = ABBREVIATIONS.iter().map(|a| a.len()).max().unwrap_or(0);
}

pub fn is_abbreviation(token: &str) -> bool {
    ABBREVIATION_SET.contains(token)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// One shielded `abbreviation + "."` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shielded<'a> {
    /// Occurrence index, unique within one [`ShieldMap`].
    pub marker: usize,
    /// Byte span in the text the map was built from, period included.
    pub span: Range<usize>,
    pub original: &'a str,
}

/// Abbreviation periods of one text, keyed by the byte offset where each
/// occurrence starts.
///
/// Built fresh for every parse and dropped with it. The scanner asks
/// [`ShieldMap::covers`] before treating a `.` as a terminator, so nothing is
/// ever substituted into the text.
#[derive(Debug, Default)]
pub struct ShieldMap<'a> {
    entries: BTreeMap<usize, Shielded<'a>>,
}

impl<'a> ShieldMap<'a> {
    /// Finds every abbreviation occurrence in `text`, left to right and
    /// non-overlapping. A token only matches when it starts on a word edge.
    pub fn build(text: &'a str) -> Self {
        let mut entries = BTreeMap::new();
        let mut prev: Option<char> = None;
        let mut offset = 0;

        while let Some(c) = text[offset..].chars().next() {
            let at_word_edge = !prev.is_some_and(is_word_char);

            if at_word_edge && is_word_char(c) {
                if let Some(end) = abbreviation_end(text, offset) {
                    let marker = entries.len();
                    entries.insert(
                        offset,
                        Shielded {
                            marker,
                            span: offset..end,
                            original: &text[offset..end],
                        },
                    );
                    prev = Some('.');
                    offset = end;
                    continue;
                }
            }

            prev = Some(c);
            offset += c.len_utf8();
        }

        Self { entries }
    }

    /// True if the byte at `offset` belongs to a shielded abbreviation.
    pub fn covers(&self, offset: usize) -> bool {
        self.entries
            .range(..=offset)
            .next_back()
            .is_some_and(|(_, shielded)| shielded.span.contains(&offset))
    }

    /// True if a shielded abbreviation begins exactly at `offset`.
    pub fn starts_at(&self, offset: usize) -> bool {
        self.entries.contains_key(&offset)
    }

    /// Shielded occurrences starting inside `range`, in text order.
    pub fn within(&self, range: Range<usize>) -> impl Iterator<Item = &Shielded<'a>> {
        self.entries.range(range).map(|(_, shielded)| shielded)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shielded<'a>> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns the end offset (after the period) of an abbreviation starting at
/// `start`, if there is one.
fn abbreviation_end(text: &str, start: usize) -> Option<usize> {
    for (i, c) in text[start..].char_indices() {
        if i > *LONGEST_ABBREVIATION {
            return None;
        }
        match c {
            '.' => {
                if is_abbreviation(&text[start..start + i]) {
                    return Some(start + i + 1);
                }
            }
            c if is_word_char(c) => {}
            _ => return None,
        }
    }
    None
}
