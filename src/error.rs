use crate::config::ConfigError;
use crate::input::LoadError;
use crate::library::LibraryError;
use crate::story::StoryId;
use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Library(#[from] LibraryError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Story #{story} has no sentence {position}")]
    NoSuchSentence { story: StoryId, position: usize },

    #[error("Line editor error: {0}")]
    Readline(#[from] ReadlineError),
}
