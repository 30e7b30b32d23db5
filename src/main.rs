use std::process;

use rustyline::error::ReadlineError;
use tracing_subscriber::{filter::LevelFilter, fmt};
use vocab_reader::app::{App, AppEvent};
use vocab_reader::config::Config;
use vocab_reader::library::Library;
use vocab_reader::repl::ReplInput;
use vocab_reader::AppError;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn init_tracing(level: LevelFilter) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("Tracing subscriber already set; skipping re-initialization.");
    }
}

fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;
    init_tracing(config.log.level);

    let library = Library::load(&config.library.path)?;
    let mut app = App::new(library, config);
    let mut input = ReplInput::new()?;

    println!("Type :h for help.");
    while !app.should_quit() {
        let event = match input.readline() {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                input.add_history_entry(&line)?;
                input.to_app_event(&line)
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => AppEvent::Quit,
            Err(err) => return Err(err.into()),
        };

        println!("{}", app.handle_event(event));
    }

    Ok(())
}
