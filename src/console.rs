//! Interactive terminal I/O — the only place the run waits on a human.

use crate::error::AppError;
use std::io::{self, BufRead, Write};

/// A line-oriented prompt over any reader and writer.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    /// Terminal bound to the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one line of user-facing text.
    pub fn say(&mut self, text: &str) -> Result<(), AppError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Shows `message` and blocks until a line is entered.
    ///
    /// End of input is an error rather than an empty answer.
    pub fn prompt(&mut self, message: &str) -> Result<String, AppError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "standard input closed while waiting for an answer",
            )));
        }
        Ok(line.trim().to_string())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_returns_trimmed_line() {
        let mut terminal = Terminal::new(Cursor::new("  42 \nnext\n"), Vec::new());
        assert_eq!(terminal.prompt("Number: ").unwrap(), "42");
        assert_eq!(terminal.prompt("Again: ").unwrap(), "next");
        let shown = String::from_utf8(terminal.into_output()).unwrap();
        assert_eq!(shown, "Number: Again: ");
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut terminal = Terminal::new(Cursor::new(""), Vec::new());
        assert!(matches!(terminal.prompt("> "), Err(AppError::Io(_))));
    }
}
