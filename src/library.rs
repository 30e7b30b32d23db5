//! In-memory store of stories and saved words, persisted as one JSON file.

use crate::config::ReviewConfig;
use crate::reading::lookup_key;
use crate::story::{
    Difficulty, NewStory, Sentence, SentenceId, Story, StoryError, StoryId, StorySummary,
};
use crate::vocabulary::{SaveWord, VocabularyError, VocabularyWord, WordId, WordWithContext};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Story not found: {0}")]
    StoryNotFound(StoryId),

    #[error(transparent)]
    Story(#[from] StoryError),

    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),

    #[error("I/O error on {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Invalid library file {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Library {
    next_story_id: StoryId,
    next_sentence_id: SentenceId,
    next_word_id: WordId,
    stories: BTreeMap<StoryId, Story>,
    words: BTreeMap<WordId, VocabularyWord>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a library file. A missing file is an empty library.
    pub fn load(path: &Path) -> Result<Self, LibraryError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no library file yet, starting empty");
                return Ok(Self::new());
            }
            Err(source) => {
                return Err(LibraryError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let library: Self = serde_json::from_str(&raw).map_err(|source| LibraryError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(
            path = %path.display(),
            stories = library.stories.len(),
            words = library.words.len(),
            "library loaded"
        );
        Ok(library)
    }

    pub fn save(&self, path: &Path) -> Result<(), LibraryError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| LibraryError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| LibraryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), "library saved");
        Ok(())
    }

    pub fn create_story(
        &mut self,
        input: NewStory,
        now: DateTime<Utc>,
    ) -> Result<&Story, LibraryError> {
        let id = self.next_story_id + 1;
        let mut next_sentence_id = self.next_sentence_id;
        let story = Story::create(id, input, now, || {
            next_sentence_id += 1;
            next_sentence_id
        })?;

        self.next_story_id = id;
        self.next_sentence_id = next_sentence_id;
        tracing::info!(
            story = id,
            sentences = story.sentences.len(),
            words = story.word_count(),
            "story created"
        );

        Ok(self.stories.entry(id).or_insert(story))
    }

    /// Newest first.
    pub fn list_stories(&self) -> Vec<StorySummary> {
        let mut summaries: Vec<StorySummary> = self.stories.values().map(Story::summary).collect();
        summaries.sort_by_key(|s| Reverse((s.created_at, s.id)));
        summaries
    }

    pub fn story(&self, id: StoryId) -> Option<&Story> {
        self.stories.get(&id)
    }

    pub fn set_difficulty(
        &mut self,
        id: StoryId,
        difficulty: Difficulty,
        now: DateTime<Utc>,
    ) -> Result<&Story, LibraryError> {
        let story = self
            .stories
            .get_mut(&id)
            .ok_or(LibraryError::StoryNotFound(id))?;
        story.difficulty = Some(difficulty);
        story.updated_at = now;
        tracing::info!(story = id, %difficulty, "story difficulty set");
        Ok(story)
    }

    /// Removes the story and every word saved from it.
    pub fn delete_story(&mut self, id: StoryId) -> bool {
        if self.stories.remove(&id).is_none() {
            return false;
        }
        let before = self.words.len();
        self.words.retain(|_, word| word.story_id != id);
        tracing::info!(story = id, words = before - self.words.len(), "story deleted");
        true
    }

    pub fn sentence(&self, id: SentenceId) -> Option<(&Story, &Sentence)> {
        self.stories.values().find_map(|story| {
            story
                .sentences
                .iter()
                .find(|sentence| sentence.id == id)
                .map(|sentence| (story, sentence))
        })
    }

    /// Saves a word with a fresh review card. A word can be saved once per
    /// sentence.
    pub fn save_word(
        &mut self,
        input: SaveWord,
        review: &ReviewConfig,
        now: DateTime<Utc>,
    ) -> Result<&VocabularyWord, LibraryError> {
        let story_id = self
            .sentence(input.sentence_id)
            .map(|(story, _)| story.id)
            .ok_or(VocabularyError::SentenceNotFound(input.sentence_id))?;

        let id = self.next_word_id + 1;
        let word = VocabularyWord::create(id, story_id, input, review, now)?;

        if self
            .words
            .values()
            .any(|saved| saved.sentence_id == word.sentence_id && saved.word == word.word)
        {
            return Err(VocabularyError::Duplicate(word.word).into());
        }

        self.next_word_id = id;
        tracing::info!(
            word = %word.word,
            story = story_id,
            sentence = word.sentence_id,
            "word saved"
        );

        Ok(self.words.entry(id).or_insert(word))
    }

    /// Newest first, optionally limited to one story.
    pub fn list_words(&self, story: Option<StoryId>) -> Vec<WordWithContext<'_>> {
        let mut words: Vec<WordWithContext<'_>> = self
            .words
            .values()
            .filter(|word| story.map_or(true, |id| word.story_id == id))
            .filter_map(|word| self.with_context(word))
            .collect();
        words.sort_by_key(|w| Reverse((w.word.created_at, w.word.id)));
        words
    }

    pub fn word(&self, id: WordId) -> Option<WordWithContext<'_>> {
        self.words.get(&id).and_then(|word| self.with_context(word))
    }

    pub fn delete_word(&mut self, id: WordId) -> Result<(), LibraryError> {
        match self.words.remove(&id) {
            Some(word) => {
                tracing::info!(word = %word.word, id, "word deleted");
                Ok(())
            }
            None => Err(VocabularyError::WordNotFound(id).into()),
        }
    }

    /// Lookup keys of the words saved from a story, for highlighting.
    pub fn saved_keys(&self, story: StoryId) -> HashSet<String> {
        self.words
            .values()
            .filter(|word| word.story_id == story)
            .filter_map(|word| lookup_key(&word.word))
            .collect()
    }

    fn with_context<'a>(&'a self, word: &'a VocabularyWord) -> Option<WordWithContext<'a>> {
        let (story, sentence) = self.sentence(word.sentence_id)?;
        Some(WordWithContext {
            word,
            sentence_text: &sentence.text,
            sentence_position: sentence.position,
            story_title: &story.title,
            story_language: &story.language,
        })
    }
}
