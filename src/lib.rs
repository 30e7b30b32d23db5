//! Story reader for language learners: parses stories into tappable
//! sentences and keeps the words saved from them.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod library;
pub mod reading;
pub mod repl;
pub mod story;
pub mod vocabulary;

pub use error::AppError;
pub use reading::{parse_sentences, SplitSentences};
