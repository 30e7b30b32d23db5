use crate::app::AppEvent;
use crate::story::StoryId;
use crate::vocabulary::WordId;

/// Commands that can be parsed from REPL input
///
/// These commands map to AppEvent for handling in App core.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Save and quit
    Quit,

    /// Show help information
    Help,

    /// Import a story file (PDF, EPUB, plain text)
    LoadFile(String),

    /// Import a pasted story from the clipboard
    LoadClipboard,

    ListStories,
    ShowStory(StoryId),
    DeleteStory(StoryId),

    /// Set the difficulty of `story`; `level` is checked by the app
    SetDifficulty { story: StoryId, level: String },

    /// Save a word from sentence `position` of `story`
    SaveWord {
        story: StoryId,
        position: usize,
        word: String,
        definition: String,
        translation: String,
        part_of_speech: Option<String>,
        context_note: Option<String>,
    },

    ListWords(Option<StoryId>),
    DeleteWord(WordId),

    /// Write the library file now
    SaveLibrary,

    /// Unknown/invalid command
    Unknown(String),
}

/// Convert a parsed REPL command into an AppEvent
pub fn command_to_app_event(command: ReplCommand) -> AppEvent {
    match command {
        ReplCommand::Quit => AppEvent::Quit,
        ReplCommand::Help => AppEvent::Help,
        ReplCommand::LoadFile(path) => AppEvent::LoadFile(path),
        ReplCommand::LoadClipboard => AppEvent::LoadClipboard,
        ReplCommand::ListStories => AppEvent::ListStories,
        ReplCommand::ShowStory(id) => AppEvent::ShowStory(id),
        ReplCommand::DeleteStory(id) => AppEvent::DeleteStory(id),
        ReplCommand::SetDifficulty { story, level } => AppEvent::SetDifficulty { story, level },
        ReplCommand::SaveWord {
            story,
            position,
            word,
            definition,
            translation,
            part_of_speech,
            context_note,
        } => AppEvent::SaveWord {
            story,
            position,
            word,
            definition,
            translation,
            part_of_speech,
            context_note,
        },
        ReplCommand::ListWords(story) => AppEvent::ListWords(story),
        ReplCommand::DeleteWord(id) => AppEvent::DeleteWord(id),
        ReplCommand::SaveLibrary => AppEvent::SaveLibrary,
        ReplCommand::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
