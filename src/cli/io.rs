use std::io::{self, BufRead, Write};

use rustyline::{error::ReadlineError, history::DefaultHistory, Editor};

use crate::errors::CliError;

/// Source of user input lines for the shell. `Ok(None)` means input is exhausted.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError>;
}

/// Interactive reader backed by a `rustyline` editor with in-session history.
pub struct EditorReader {
    editor: Editor<(), DefaultHistory>,
}

impl EditorReader {
    pub fn new() -> Result<Self, CliError> {
        Ok(Self {
            editor: Editor::new()?,
        })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    self.editor.add_history_entry(trimmed).ok();
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Line-by-line reader used in script mode; echoes prompts so transcripts stay readable.
pub struct ScriptReader<R> {
    input: R,
}

impl<R: BufRead> ScriptReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> LineReader for ScriptReader<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            println!();
            return Ok(None);
        }
        let line = buffer.trim_end_matches(&['\r', '\n'][..]).to_string();
        println!("{}", line);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn script_reader_yields_lines_then_none() {
        let mut reader = ScriptReader::new(Cursor::new("1\r\n250.5\nfood"));
        assert_eq!(reader.read_line("> ").unwrap().as_deref(), Some("1"));
        assert_eq!(reader.read_line("> ").unwrap().as_deref(), Some("250.5"));
        assert_eq!(reader.read_line("> ").unwrap().as_deref(), Some("food"));
        assert_eq!(reader.read_line("> ").unwrap(), None);
    }
}
