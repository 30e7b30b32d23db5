//! Plain-text rendering of library contents for the terminal.

use crate::story::{Story, StorySummary};
use crate::vocabulary::WordWithContext;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::fmt::Write;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Truncates `text` to at most `max_width` terminal columns, cutting on
/// grapheme boundaries and marking the cut with `…`.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut truncated = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let width = grapheme.width();
        if used + width > budget {
            break;
        }
        truncated.push_str(grapheme);
        used += width;
    }
    truncated.push('…');
    truncated
}

/// Left-aligns `text` in a column `width` columns wide.
fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

pub fn format_story_list(stories: &[StorySummary], title_width: usize) -> String {
    if stories.is_empty() {
        return "No stories yet. Import one with @path or paste with @@.".to_string();
    }

    let mut out = String::new();
    for story in stories {
        let title = pad_to_width(&truncate_to_width(&story.title, title_width), title_width);
        let difficulty = story
            .difficulty
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:>4}  {}  {:<5} {:<12} {:>5} words {:>4} sentences",
            story.id, title, story.language, difficulty, story.word_count, story.sentence_count
        );
    }
    out.trim_end().to_string()
}

/// Numbered sentences; words already saved from this story are bracketed.
pub fn format_story(story: &Story, saved: &HashSet<String>, limit: Option<usize>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "#{} {} [{}] {} words",
        story.id,
        story.title,
        story.language,
        story.word_count()
    );

    let shown = limit.unwrap_or(story.sentences.len());
    for sentence in story.sentences.iter().take(shown) {
        let line: Vec<String> = crate::reading::tappable_words(&sentence.text)
            .into_iter()
            .map(|word| match word.key {
                Some(ref key) if saved.contains(key) => format!("[{}]", word.original),
                _ => word.original.to_string(),
            })
            .collect();
        let _ = writeln!(out, "{:>4}  {}", sentence.position, line.join(" "));
    }

    if shown < story.sentences.len() {
        let _ = writeln!(out, "      … {} more", story.sentences.len() - shown);
    }
    out.trim_end().to_string()
}

/// Saved words with their source sentence. Words whose review card is due at
/// `now` are flagged.
pub fn format_words(words: &[WordWithContext<'_>], now: DateTime<Utc>) -> String {
    if words.is_empty() {
        return "No saved words.".to_string();
    }

    let mut out = String::new();
    for entry in words {
        let word = entry.word;
        let due = if word.review.is_due(now) { "  [due]" } else { "" };
        let _ = writeln!(
            out,
            "{:>4}  {} = {} ({}){}",
            word.id, word.word, word.translation, word.definition, due
        );
        let _ = writeln!(
            out,
            "      {} #{}:{} \"{}\"",
            entry.story_title, word.story_id, entry.sentence_position, entry.sentence_text
        );
    }
    out.trim_end().to_string()
}

pub const HELP: &str = "\
Commands:
  @path                         import a story file (.txt, .pdf, .epub)
  @@                            import a story from the clipboard
  :ls                           list stories
  :show N                       show the sentences of story N
  :rm N                         delete story N and its saved words
  :level N difficulty           set story N to beginner, intermediate or advanced
  :add N:P word | def | trans [| pos [| note]]
                                save a word from sentence P of story N
  :words [N]                    list saved words, optionally for story N
  :unsave ID                    delete a saved word
  :w                            write the library file
  :h                            this help
  :q                            save and quit";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::NewStory;
    use chrono::Utc;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_to_width("Le marché", 20), "Le marché");
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_to_width("The quick brown fox", 10), "The quick…");
    }

    #[test]
    fn test_truncate_wide_characters() {
        // Each CJK character is two columns wide
        let truncated = truncate_to_width("日本語の物語", 7);
        assert_eq!(truncated, "日本語…");
        assert!(truncated.width() <= 7);
    }

    #[test]
    fn test_truncate_keeps_graphemes_whole() {
        // "e" + combining acute accent is one grapheme
        let truncated = truncate_to_width("e\u{301}e\u{301}e\u{301}e\u{301}", 3);
        assert_eq!(truncated, "e\u{301}e\u{301}…");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("日本", 6), "日本  ");
        assert_eq!(pad_to_width("toolong", 3), "toolong");
    }

    #[test]
    fn test_format_story_marks_saved_words() {
        let story = Story::create(
            1,
            NewStory {
                title: "Marché".to_string(),
                content: "Bonjour, Marie. Au revoir.".to_string(),
                language: "fr".to_string(),
                ..NewStory::default()
            },
            Utc::now(),
            || 1,
        )
        .unwrap();
        let saved: HashSet<String> = ["bonjour".to_string()].into_iter().collect();

        let out = format_story(&story, &saved, None);
        assert!(out.contains("[Bonjour,] Marie."));
        assert!(out.contains("   1  Au revoir."));

        let preview = format_story(&story, &saved, Some(1));
        assert!(preview.contains("… 1 more"));
    }

    #[test]
    fn test_empty_listings() {
        assert!(format_story_list(&[], 10).contains("No stories"));
        assert_eq!(format_words(&[], Utc::now()), "No saved words.");
    }

    #[test]
    fn test_format_words_flags_due_cards() {
        use crate::config::ReviewConfig;
        use crate::vocabulary::{SaveWord, VocabularyWord};
        use chrono::Duration;

        let now = Utc::now();
        let word = VocabularyWord::create(
            3,
            1,
            SaveWord {
                sentence_id: 1,
                word: "marché".to_string(),
                definition: "place where goods are sold".to_string(),
                translation: "market".to_string(),
                ..SaveWord::default()
            },
            &ReviewConfig::default(),
            now,
        )
        .unwrap();
        let entry = WordWithContext {
            word: &word,
            sentence_text: "Au marché.",
            sentence_position: 0,
            story_title: "Marché",
            story_language: "fr",
        };

        let due = format_words(std::slice::from_ref(&entry), now);
        assert!(due.contains("   3  marché = market (place where goods are sold)  [due]"));
        assert!(due.contains("Marché #1:0 \"Au marché.\""));

        let not_yet = format_words(&[entry], now - Duration::hours(1));
        assert!(!not_yet.contains("[due]"));
    }
}
