//! Interactive prompt with line editing and persistent history.
//!
//! Each line is run against one long-lived [`Context`], so variables survive
//! from one line to the next. Errors are printed and the prompt carries on.

use std::{path::PathBuf, process::ExitCode};

use rustyline::{DefaultEditor, error::ReadlineError};
use spy::{interpreter::evaluator::core::Context, run_source};
use tracing::{debug, warn};

const HISTORY_FILE: &str = ".spy_history";
const PROMPT: &str = "spy> ";

/// Runs the prompt until end of input or Ctrl-C.
///
/// Besides statements, the prompt understands `:vars` (print the variable
/// store), `:symbols` (print the symbol table) and `:quit`.
pub fn run() -> ExitCode {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to start the interactive prompt: {e}");
            return ExitCode::FAILURE;
        },
    };

    let history = history_file_path();
    if let Err(e) = editor.load_history(&history) {
        debug!(path = %history.display(), error = %e, "no history loaded");
    }

    let mut context = Context::new();
    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{e}");
                break;
            },
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if let Err(e) = editor.add_history_entry(input) {
            warn!(error = %e, "could not record history entry");
        }

        match input {
            ":quit" => break,
            ":vars" => println!("{}", context.memory()),
            ":symbols" => println!("{}", context.symbols()),
            _ => match run_source(&line, &mut context) {
                Ok(Some(value)) => println!("{value}"),
                Ok(None) => {},
                Err(e) => eprintln!("{e}"),
            },
        }
    }

    if let Err(e) = editor.save_history(&history) {
        warn!(path = %history.display(), error = %e, "could not save history");
    }
    ExitCode::SUCCESS
}

/// `~/.spy_history`, or `.spy_history` in the working directory when no home
/// directory is known.
fn history_file_path() -> PathBuf {
    let home = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
    std::env::var_os(home).map_or_else(|| PathBuf::from(HISTORY_FILE),
                                       |home| PathBuf::from(home).join(HISTORY_FILE))
}
