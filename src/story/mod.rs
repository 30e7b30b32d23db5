//! Stories and the sentences parsed out of them.

use crate::reading::{is_space, parse_sentences, word_count};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub type StoryId = u64;
pub type SentenceId = u64;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoryError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Story content must contain at least one sentence")]
    NoSentences,

    #[error("Invalid difficulty: {0}. Must be beginner, intermediate, or advanced")]
    InvalidDifficulty(String),
}

/// Where a story came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorySource {
    #[default]
    UserAdded,
    AiGenerated,
}

impl fmt::Display for StorySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorySource::UserAdded => write!(f, "USER_ADDED"),
            StorySource::AiGenerated => write!(f, "AI_GENERATED"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl FromStr for Difficulty {
    type Err = StoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(StoryError::InvalidDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "beginner"),
            Difficulty::Intermediate => write!(f, "intermediate"),
            Difficulty::Advanced => write!(f, "advanced"),
        }
    }
}

/// Input for [`Story::create`].
#[derive(Debug, Clone, Default)]
pub struct NewStory {
    pub title: String,
    pub content: String,
    pub language: String,
    pub source: StorySource,
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    pub id: SentenceId,
    /// 0-based index within the story, in source order
    pub position: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub content: String,
    pub language: String,
    pub source: StorySource,
    pub difficulty: Option<Difficulty>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub sentences: Vec<Sentence>,
}

/// Listing row for a story. Counts are derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorySummary {
    pub id: StoryId,
    pub title: String,
    pub language: String,
    pub source: StorySource,
    pub difficulty: Option<Difficulty>,
    pub word_count: usize,
    pub sentence_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn required(value: &str, field: &'static str) -> Result<String, StoryError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(StoryError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

impl Story {
    /// Validates `input` and splits its content into sentences.
    ///
    /// `next_sentence_id` is called once per sentence, in order.
    pub fn create<F>(
        id: StoryId,
        input: NewStory,
        now: DateTime<Utc>,
        mut next_sentence_id: F,
    ) -> Result<Story, StoryError>
    where
        F: FnMut() -> SentenceId,
    {
        let title = required(&input.title, "Title")?;
        let language = required(&input.language, "Language")?;

        let texts = parse_sentences(&input.content);
        if texts.is_empty() {
            return Err(StoryError::NoSentences);
        }

        let sentences = texts
            .into_iter()
            .enumerate()
            .map(|(position, text)| Sentence {
                id: next_sentence_id(),
                position,
                text,
            })
            .collect();

        Ok(Story {
            id,
            title,
            content: input.content.trim_matches(is_space).to_string(),
            language,
            source: input.source,
            difficulty: input.difficulty,
            created_at: now,
            updated_at: now,
            sentences,
        })
    }

    /// Recomputed from the content on every call.
    pub fn word_count(&self) -> usize {
        word_count(&self.content)
    }

    pub fn sentence(&self, position: usize) -> Option<&Sentence> {
        self.sentences.get(position)
    }

    pub fn summary(&self) -> StorySummary {
        StorySummary {
            id: self.id,
            title: self.title.clone(),
            language: self.language.clone(),
            source: self.source,
            difficulty: self.difficulty,
            word_count: self.word_count(),
            sentence_count: self.sentences.len(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
