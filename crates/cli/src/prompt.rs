//! Line-oriented prompting over any reader and writer
//!
//! Every prompt reads one line. A closed input stream surfaces as
//! [`PromptError::EndOfInput`] so the shell can stop instead of
//! re-prompting forever.

use bookshelf_core::{BookId, YearError, YearPublished, MAX_YEAR, MIN_YEAR};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Separator line framing menu sections and messages
pub const SEPARATOR: &str = "-------------------------------------------";

#[derive(Debug, Error)]
pub enum PromptError {
    /// Standard input was closed
    #[error("end of input")]
    EndOfInput,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type PromptResult<T> = Result<T, PromptError>;

/// Reads answers from `input` and writes prompts and output to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads one line without its line terminator
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
    pub fn read_line(&mut self) -> PromptResult<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(PromptError::EndOfInput);
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }

        match String::from_utf8(buf) {
            Ok(line) => Ok(line),
            Err(e) => {
                log::debug!("Replacing invalid UTF-8 in input line");
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }

    /// Shows `prompt` on the same line and returns the answer verbatim
    pub fn ask(&mut self, prompt: &str) -> PromptResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Asks for an id, mapping unparsable answers to id 0
    pub fn ask_id(&mut self, prompt: &str) -> PromptResult<BookId> {
        let answer = self.ask(prompt)?;
        Ok(BookId::parse_lenient(&answer))
    }

    /// Asks for a publication year until a valid one is entered
    pub fn ask_year(&mut self) -> PromptResult<YearPublished> {
        loop {
            let answer = self.ask("Enter year published: ")?;

            let message = match YearPublished::parse(&answer) {
                Ok(year) => return Ok(year),
                Err(YearError::NotANumber { .. }) => {
                    "Invalid input. Please enter a valid published year.".to_string()
                }
                Err(YearError::OutOfRange { .. }) => format!(
                    "Invalid year. Please enter a year between {} and {}.",
                    MIN_YEAR, MAX_YEAR
                ),
            };

            log::debug!("Rejected year input {:?}", answer);
            writeln!(self.output, "{}", SEPARATOR)?;
            writeln!(self.output, "{}", message)?;
            writeln!(self.output, "{}", SEPARATOR)?;
        }
    }

    /// Waits for the user to press enter; the answer is discarded
    pub fn wait_for_ack(&mut self, prompt: &str) -> PromptResult<()> {
        self.ask(prompt).map(|_| ())
    }

    /// Writes a separator line
    pub fn separator(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", SEPARATOR)
    }
}

impl<R, W: Write> Write for Prompter<R, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}
