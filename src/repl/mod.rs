//! REPL (Read-Eval-Print Loop) module
//!
//! ## Module Structure
//!
//! - **command.rs**: Command definitions and conversion to AppEvent
//! - **parser.rs**: Manual string parsing for `@` and `:` prefixes
//! - **input.rs**: Rustyline wrapper with session history
//!
//! ## Usage in main.rs
//!
//! ```rust,ignore
//! let mut repl = ReplInput::new()?;
//! loop {
//!     let line = repl.readline()?;
//!     let event = repl.to_app_event(&line);
//!     app.handle_event(event);
//! }
//! ```

pub mod command;
pub mod input;
pub mod parser;

pub use command::{command_to_app_event, ReplCommand};
pub use input::ReplInput;
pub use parser::parse_repl_input;
