// Configuration for the vocab reader
// Every value has a documented default; `Config::from_env` overlays VOCAB_* variables

use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Where the library is persisted
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryConfig {
    /// JSON file holding stories and vocabulary (default `vocab-library.json`)
    pub path: PathBuf,

    /// Save the library when the command loop exits (default true)
    pub save_on_exit: bool,

    /// Language code given to imported stories (default `en`)
    pub default_language: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("vocab-library.json"),
            save_on_exit: true,
            default_language: "en".to_string(),
        }
    }
}

/// Initial SM-2 values stamped onto every new review card.
/// The schedule is stored, never advanced.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewConfig {
    pub ease_factor: f64,    // default 2.5
    pub interval_days: u32,  // default 0
    pub repetitions: u32,    // default 0
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            ease_factor: 2.5,
            interval_days: 0,
            repetitions: 0,
        }
    }
}

/// Terminal listing options
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Display columns allotted to a story title in `:ls` (default 32)
    pub title_width: usize,

    /// Sentences shown as a preview after an import (default 3)
    pub preview_sentences: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title_width: 32,
            preview_sentences: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    pub level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::INFO,
        }
    }
}

/// Master configuration combining all settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub library: LibraryConfig,
    pub review: ReviewConfig,
    pub display: DisplayConfig,
    pub log: LogConfig,
}

impl Config {
    /// Defaults overlaid with `VOCAB_LIBRARY`, `VOCAB_LANGUAGE`, `VOCAB_LOG`
    /// and `VOCAB_TITLE_WIDTH` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("VOCAB_LIBRARY") {
            if path.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    var: "VOCAB_LIBRARY",
                    value: path,
                });
            }
            config.library.path = PathBuf::from(path);
        }

        if let Some(language) = lookup("VOCAB_LANGUAGE") {
            let language = language.trim();
            if !language.is_empty() {
                config.library.default_language = language.to_string();
            }
        }

        if let Some(level) = lookup("VOCAB_LOG") {
            config.log.level = level
                .trim()
                .parse::<LevelFilter>()
                .map_err(|_| ConfigError::InvalidValue {
                    var: "VOCAB_LOG",
                    value: level.clone(),
                })?;
        }

        if let Some(width) = lookup("VOCAB_TITLE_WIDTH") {
            config.display.title_width = match width.trim().parse::<usize>() {
                Ok(w) if w > 0 => w,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "VOCAB_TITLE_WIDTH",
                        value: width,
                    })
                }
            };
        }

        Ok(config)
    }
}
