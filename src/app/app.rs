use super::display::{format_story, format_story_list, format_words, HELP};
use super::event::AppEvent;
use super::mode::AppMode;
use crate::config::Config;
use crate::error::AppError;
use crate::input::{self, LoadedText};
use crate::library::{Library, LibraryError};
use crate::story::{Difficulty, NewStory, StoryId, StorySource};
use crate::vocabulary::SaveWord;
use chrono::Utc;

pub struct App {
    pub mode: AppMode,
    pub library: Library,
    config: Config,
}

impl App {
    pub fn new(library: Library, config: Config) -> Self {
        Self {
            mode: AppMode::Command,
            library,
            config,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.mode == AppMode::Quit
    }

    /// Handles one event and returns the text to show the user. Failures are
    /// reported as messages; the loop keeps running.
    pub fn handle_event(&mut self, event: AppEvent) -> String {
        match self.dispatch(event) {
            Ok(message) => message,
            Err(err) => {
                tracing::warn!(error = %err, "command failed");
                format!("Error: {}", err)
            }
        }
    }

    fn dispatch(&mut self, event: AppEvent) -> Result<String, AppError> {
        match event {
            AppEvent::LoadFile(path) => {
                let loaded = input::load(&path)?;
                self.import(loaded)
            }
            AppEvent::LoadClipboard => {
                let loaded = input::clipboard::load()?;
                self.import(loaded)
            }
            AppEvent::ListStories => Ok(format_story_list(
                &self.library.list_stories(),
                self.config.display.title_width,
            )),
            AppEvent::ShowStory(id) => {
                let story = self
                    .library
                    .story(id)
                    .ok_or(LibraryError::StoryNotFound(id))?;
                Ok(format_story(story, &self.library.saved_keys(id), None))
            }
            AppEvent::DeleteStory(id) => {
                if self.library.delete_story(id) {
                    Ok(format!("Deleted story #{}", id))
                } else {
                    Err(LibraryError::StoryNotFound(id).into())
                }
            }
            AppEvent::SetDifficulty { story, level } => {
                let difficulty: Difficulty = level.parse().map_err(LibraryError::from)?;
                self.library.set_difficulty(story, difficulty, Utc::now())?;
                Ok(format!("Story #{} is now {}", story, difficulty))
            }
            AppEvent::SaveWord {
                story,
                position,
                word,
                definition,
                translation,
                part_of_speech,
                context_note,
            } => self.save_word(
                story,
                position,
                SaveWord {
                    word,
                    definition,
                    translation,
                    part_of_speech,
                    context_note,
                    ..SaveWord::default()
                },
            ),
            AppEvent::ListWords(story) => {
                Ok(format_words(&self.library.list_words(story), Utc::now()))
            }
            AppEvent::DeleteWord(id) => {
                self.library.delete_word(id)?;
                Ok(format!("Deleted word #{}", id))
            }
            AppEvent::SaveLibrary => {
                self.library.save(&self.config.library.path)?;
                Ok(format!("Saved {}", self.config.library.path.display()))
            }
            AppEvent::Quit => {
                // Only leave once the library is written.
                if self.config.library.save_on_exit {
                    self.library.save(&self.config.library.path)?;
                }
                self.mode = AppMode::Quit;
                Ok("Bye.".to_string())
            }
            AppEvent::Help => Ok(HELP.to_string()),
            AppEvent::InvalidCommand(input) => Ok(format!(
                "Unknown command: {:?} (type :h for help)",
                input
            )),
        }
    }

    fn import(&mut self, loaded: LoadedText) -> Result<String, AppError> {
        let preview = self.config.display.preview_sentences;
        let story = self.library.create_story(
            NewStory {
                title: loaded.suggested_title,
                content: loaded.content,
                language: self.config.library.default_language.clone(),
                source: StorySource::UserAdded,
                difficulty: None,
            },
            Utc::now(),
        )?;
        tracing::debug!(story = story.id, source = %loaded.source, "story imported");

        Ok(format!(
            "Imported story #{} ({} sentences)\n{}",
            story.id,
            story.sentences.len(),
            format_story(story, &Default::default(), Some(preview))
        ))
    }

    /// Resolves sentence `position` of `story_id` and saves `input` from it.
    fn save_word(
        &mut self,
        story_id: StoryId,
        position: usize,
        input: SaveWord,
    ) -> Result<String, AppError> {
        let story = self
            .library
            .story(story_id)
            .ok_or(LibraryError::StoryNotFound(story_id))?;
        let sentence_id = story
            .sentence(position)
            .map(|sentence| sentence.id)
            .ok_or(AppError::NoSuchSentence {
                story: story_id,
                position,
            })?;

        let saved = self.library.save_word(
            SaveWord {
                sentence_id,
                ..input
            },
            &self.config.review,
            Utc::now(),
        )?;

        Ok(format!("Saved \"{}\" as word #{}", saved.word, saved.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut config = Config::default();
        config.library.save_on_exit = false;
        App::new(Library::new(), config)
    }

    fn app_with_story() -> App {
        let mut app = app();
        app.library
            .create_story(
                NewStory {
                    title: "Market".to_string(),
                    content: "Dr. Smith went to the store. He met Mrs. Jones there.".to_string(),
                    language: "en".to_string(),
                    ..NewStory::default()
                },
                Utc::now(),
            )
            .unwrap();
        app
    }

    #[test]
    fn test_app_handle_event_quit() {
        let mut app = app();
        app.handle_event(AppEvent::Quit);
        assert_eq!(app.mode, AppMode::Quit);
    }

    #[test]
    fn test_quit_saves_library() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_story();
        app.config.library.save_on_exit = true;
        app.config.library.path = dir.path().join("library.json");

        assert_eq!(app.handle_event(AppEvent::Quit), "Bye.");
        assert!(app.should_quit());

        let reloaded = Library::load(&dir.path().join("library.json")).unwrap();
        assert_eq!(reloaded.list_stories().len(), 1);
    }

    #[test]
    fn test_failed_save_on_quit_keeps_running() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_story();
        app.config.library.save_on_exit = true;
        app.config.library.path = dir.path().join("missing").join("library.json");

        let out = app.handle_event(AppEvent::Quit);
        assert!(out.starts_with("Error: I/O error"));
        assert!(!app.should_quit());
        assert_eq!(app.mode, AppMode::Command);
    }

    #[test]
    fn test_failed_write_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_story();
        app.config.library.path = dir.path().join("missing").join("library.json");

        assert!(app
            .handle_event(AppEvent::SaveLibrary)
            .starts_with("Error: I/O error"));
        assert!(!app.should_quit());
    }

    #[test]
    fn test_write_saves_library() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_story();
        app.config.library.path = dir.path().join("library.json");

        assert!(app.handle_event(AppEvent::SaveLibrary).starts_with("Saved "));
        let reloaded = Library::load(&dir.path().join("library.json")).unwrap();
        assert!(reloaded.story(1).is_some());
    }

    #[test]
    fn test_app_handle_event_help() {
        let mut app = app();
        assert!(app.handle_event(AppEvent::Help).contains(":add"));
    }

    #[test]
    fn test_show_story() {
        let mut app = app_with_story();
        let out = app.handle_event(AppEvent::ShowStory(1));
        assert!(out.contains("Dr. Smith went to the store."));
        assert!(out.contains("He met Mrs. Jones there."));
    }

    #[test]
    fn test_show_missing_story_is_error_message() {
        let mut app = app();
        assert_eq!(
            app.handle_event(AppEvent::ShowStory(9)),
            "Error: Story not found: 9"
        );
    }

    #[test]
    fn test_save_word_then_list() {
        let mut app = app_with_story();
        let out = app.handle_event(AppEvent::SaveWord {
            story: 1,
            position: 1,
            word: "met".to_string(),
            definition: "past tense of meet".to_string(),
            translation: "rencontra".to_string(),
            part_of_speech: Some("verb".to_string()),
            context_note: None,
        });
        assert_eq!(out, "Saved \"met\" as word #1");

        let words = app.handle_event(AppEvent::ListWords(None));
        assert!(words.contains("met = rencontra"));
        assert!(words.contains("He met Mrs. Jones there."));

        let shown = app.handle_event(AppEvent::ShowStory(1));
        assert!(shown.contains("He [met] Mrs."));

        let saved = app.library.word(1).unwrap();
        assert_eq!(saved.word.part_of_speech.as_deref(), Some("verb"));
    }

    #[test]
    fn test_set_difficulty() {
        let mut app = app_with_story();
        assert_eq!(
            app.handle_event(AppEvent::SetDifficulty {
                story: 1,
                level: "Intermediate".to_string(),
            }),
            "Story #1 is now intermediate"
        );
        assert_eq!(
            app.library.story(1).unwrap().difficulty,
            Some(Difficulty::Intermediate)
        );

        let out = app.handle_event(AppEvent::SetDifficulty {
            story: 1,
            level: "expert".to_string(),
        });
        assert!(out.starts_with("Error: Invalid difficulty: expert"));

        let out = app.handle_event(AppEvent::SetDifficulty {
            story: 9,
            level: "beginner".to_string(),
        });
        assert_eq!(out, "Error: Story not found: 9");
    }

    #[test]
    fn test_save_word_bad_position() {
        let mut app = app_with_story();
        let out = app.handle_event(AppEvent::SaveWord {
            story: 1,
            position: 5,
            word: "x".to_string(),
            definition: "y".to_string(),
            translation: "z".to_string(),
            part_of_speech: None,
            context_note: None,
        });
        assert!(out.starts_with("Error:"));
    }

    #[test]
    fn test_delete_story() {
        let mut app = app_with_story();
        assert_eq!(app.handle_event(AppEvent::DeleteStory(1)), "Deleted story #1");
        assert!(app.handle_event(AppEvent::DeleteStory(1)).starts_with("Error:"));
    }

    #[test]
    fn test_load_missing_file_reports_error() {
        let mut app = app();
        let out = app.handle_event(AppEvent::LoadFile("/nonexistent/story.txt".to_string()));
        assert!(out.starts_with("Error: File not found"));
    }

    #[test]
    fn test_invalid_command() {
        let mut app = app();
        assert!(app
            .handle_event(AppEvent::InvalidCommand("nope".to_string()))
            .contains("Unknown command"));
    }
}
