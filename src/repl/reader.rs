use crate::error::{ProbeError, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{BufRead, Write};

/// Shows a prompt and blocks for one line of operator input.
///
/// End of input reads as an empty line. The returned line never carries its
/// terminator.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Line editing on an interactive terminal.
pub struct EditorReader {
    editor: DefaultEditor,
}

impl EditorReader {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| ProbeError::Input(e.to_string()))?;
        Ok(Self { editor })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Eof) => Ok(String::new()),
            Err(ReadlineError::Interrupted) => Err(ProbeError::Input("interrupted".to_string())),
            Err(e) => Err(ProbeError::Input(e.to_string())),
        }
    }
}

/// Reads lines from any buffered stream, echoing prompts to `prompts`.
pub struct StreamReader<R: BufRead, W: Write> {
    input: R,
    prompts: W,
}

impl<R: BufRead, W: Write> StreamReader<R, W> {
    pub fn new(input: R, prompts: W) -> Self {
        Self { input, prompts }
    }

    pub fn into_prompts(self) -> W {
        self.prompts
    }
}

impl<R: BufRead, W: Write> LineReader for StreamReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.prompts, "{}", prompt)?;
        self.prompts.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_stream_reader_strips_terminators() {
        let mut reader = StreamReader::new(Cursor::new("first\r\nsecond\n"), Vec::new());

        assert_eq!(reader.read_line("> ").unwrap(), "first");
        assert_eq!(reader.read_line("> ").unwrap(), "second");
    }

    #[test]
    fn test_stream_reader_keeps_inner_whitespace() {
        let mut reader = StreamReader::new(Cursor::new("  a b  \n"), Vec::new());

        assert_eq!(reader.read_line("").unwrap(), "  a b  ");
    }

    #[test]
    fn test_stream_reader_eof_is_empty_line() {
        let mut reader = StreamReader::new(Cursor::new("last"), Vec::new());

        assert_eq!(reader.read_line("").unwrap(), "last");
        assert_eq!(reader.read_line("").unwrap(), "");
    }

    #[test]
    fn test_stream_reader_writes_prompts() {
        let mut reader = StreamReader::new(Cursor::new("x\ny\n"), Vec::new());
        reader.read_line("one: ").unwrap();
        reader.read_line("two: ").unwrap();

        let prompts = String::from_utf8(reader.into_prompts()).unwrap();
        assert_eq!(prompts, "one: two: ");
    }
}
