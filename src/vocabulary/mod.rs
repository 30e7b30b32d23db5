//! Saved words and their review cards.

use crate::config::ReviewConfig;
use crate::story::{SentenceId, StoryId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type WordId = u64;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum VocabularyError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Sentence not found: {0}")]
    SentenceNotFound(SentenceId),

    #[error("Word already saved for this sentence: {0}")]
    Duplicate(String),

    #[error("Word not found: {0}")]
    WordNotFound(WordId),
}

/// Input for saving a word tapped in a sentence.
#[derive(Debug, Clone, Default)]
pub struct SaveWord {
    pub sentence_id: SentenceId,
    pub word: String,
    pub definition: String,
    pub translation: String,
    pub context_note: Option<String>,
    pub part_of_speech: Option<String>,
}

/// Spaced-repetition scaffolding. Created with the configured SM-2 values and
/// due immediately; nothing advances it yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewCard {
    pub ease_factor: f64,
    pub interval_days: u32,
    pub repetitions: u32,
    pub next_review_at: DateTime<Utc>,
}

impl ReviewCard {
    pub fn new(config: &ReviewConfig, now: DateTime<Utc>) -> Self {
        Self {
            ease_factor: config.ease_factor,
            interval_days: config.interval_days,
            repetitions: config.repetitions,
            next_review_at: now,
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review_at <= now
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyWord {
    pub id: WordId,
    pub story_id: StoryId,
    pub sentence_id: SentenceId,
    pub word: String,
    pub definition: String,
    pub translation: String,
    pub context_note: Option<String>,
    pub part_of_speech: Option<String>,
    pub created_at: DateTime<Utc>,
    pub review: ReviewCard,
}

/// A saved word joined with the sentence and story it was saved from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordWithContext<'a> {
    pub word: &'a VocabularyWord,
    pub sentence_text: &'a str,
    pub sentence_position: usize,
    pub story_title: &'a str,
    pub story_language: &'a str,
}

fn required(value: &str, field: &'static str) -> Result<String, VocabularyError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(VocabularyError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl VocabularyWord {
    /// Builds a word and its review card. Duplicate and sentence checks are
    /// done by the library, which knows the other saved words.
    pub fn create(
        id: WordId,
        story_id: StoryId,
        input: SaveWord,
        review: &ReviewConfig,
        now: DateTime<Utc>,
    ) -> Result<Self, VocabularyError> {
        Ok(Self {
            id,
            story_id,
            sentence_id: input.sentence_id,
            word: required(&input.word, "Word")?,
            definition: required(&input.definition, "Definition")?,
            translation: required(&input.translation, "Translation")?,
            context_note: optional(input.context_note),
            part_of_speech: optional(input.part_of_speech),
            created_at: now,
            review: ReviewCard::new(review, now),
        })
    }
}
