use std::io::Write;

use anyhow::{anyhow, Result};
use mkyc_lexer::Lexer;
use rustyline::{error::ReadlineError, Editor};
use tracing::{debug, warn};

use crate::config::{ReplConfig, LANG_NAME, VERSION};

/// Prints every token of `source`, one per line, stopping at end of input.
pub fn write_tokens(out: &mut impl Write, source: &str) -> std::io::Result<()> {
    let mut lexer = Lexer::new(source);
    loop {
        let token = lexer.next_token();
        if token.is_eof() {
            break;
        }
        writeln!(out, "{token}")?;
    }
    Ok(())
}

pub fn start(config: &ReplConfig) -> Result<()> {
    let mut rl = Editor::<()>::new().map_err(|e| anyhow!("failed to open the terminal: {e}"))?;
    if let Some(history) = &config.history_file {
        if rl.load_history(history).is_err() {
            println!("No previous REPL history");
        }
    }

    match &config.user {
        Some(user) => println!("Hello {user}! This is the {LANG_NAME} programming language ({VERSION})!"),
        None => println!("Hello! This is the {LANG_NAME} programming language ({VERSION})!"),
    }
    println!("Feel free to type in commands");

    let stdout = std::io::stdout();
    loop {
        let readline = rl.readline(&config.prompt);
        match readline {
            Ok(line) => {
                rl.add_history_entry(line.as_str());
                debug!(len = line.len(), "scanning line");
                write_tokens(&mut stdout.lock(), &line)?;
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => return Err(anyhow!("failed to read line: {err}")),
        }
    }

    if let Some(history) = &config.history_file {
        if let Err(err) = rl.save_history(history) {
            warn!(?err, path = %history.display(), "could not save REPL history");
        }
    }
    Ok(())
}
