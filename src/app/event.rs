use crate::story::StoryId;
use crate::vocabulary::WordId;

/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    LoadClipboard,
    ListStories,
    ShowStory(StoryId),
    DeleteStory(StoryId),
    SetDifficulty {
        story: StoryId,
        level: String,
    },
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
    SaveLibrary,
    Quit,
    Help,
    InvalidCommand(String),
}
