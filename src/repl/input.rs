use crate::app::AppEvent;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::command::command_to_app_event;
use super::parser::parse_repl_input;

/// Line editor for the command loop
///
/// Provides:
/// - Command history for the session
/// - Arrow key navigation and basic editing
pub struct ReplInput {
    editor: DefaultEditor,
}

impl ReplInput {
    pub fn new() -> Result<Self, ReadlineError> {
        let editor = DefaultEditor::new()?;
        Ok(Self { editor })
    }

    /// Read a line of input with the "vocab> " prompt
    ///
    /// Blocks until the user presses Enter
    pub fn readline(&mut self) -> Result<String, ReadlineError> {
        self.editor.readline("vocab> ")
    }

    pub fn add_history_entry(&mut self, line: &str) -> Result<(), ReadlineError> {
        self.editor.add_history_entry(line).map(|_| ())
    }

    /// Parses an input line into an AppEvent
    pub fn to_app_event(&self, line: &str) -> AppEvent {
        command_to_app_event(parse_repl_input(line))
    }
}
