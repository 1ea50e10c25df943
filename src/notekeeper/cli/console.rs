use std::io::{self, BufRead, Write};
use unicode_width::UnicodeWidthStr;

/// Value returned by [`Console::read_int`] when the input is not a number.
pub const INVALID_INT: i64 = -1;

/// Line-oriented terminal I/O over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
    closed: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            closed: false,
        }
    }

    /// True once the input has hit end-of-file.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Prints a numbered list (from 1) and reads the chosen number.
    pub fn show_menu(&mut self, title: &str, items: &[&str]) -> io::Result<i64> {
        self.heading(title)?;
        for (i, item) in items.iter().enumerate() {
            writeln!(self.output, "{}) {}", i + 1, item)?;
        }
        self.read_int("Enter the command number:")
    }

    pub fn heading(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.output, "{}", title)?;
        writeln!(self.output, "{}", "-".repeat(title.width()))
    }

    /// Reads one line without its line ending. End-of-file yields an empty string.
    pub fn read_string(&mut self, prompt: &str) -> io::Result<String> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.closed = true;
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Reads an integer, substituting [`INVALID_INT`] for anything unparsable.
    pub fn read_int(&mut self, prompt: &str) -> io::Result<i64> {
        let raw = self.read_string(prompt)?;
        Ok(raw.trim().parse().unwrap_or(INVALID_INT))
    }

    pub fn show(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
