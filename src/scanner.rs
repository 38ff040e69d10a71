mod stdio;

pub use stdio::*;

use std::io::{stdin, stdout, BufRead, Error, ErrorKind, StdinLock, Stdout, Write};

use tracing::trace;

use crate::{parse_bool, parse_float, parse_int, InputError};

/// Prompted line reader over an arbitrary input and output pair.
///
/// Each `read_*` call writes the prompt (if any), consumes exactly one line from the
/// reader and returns it trimmed or parsed. Nothing is buffered between calls beyond
/// what the reader itself buffers.
#[derive(Debug)]
pub struct Scanner<R, W> {
    reader: R,
    writer: W,
}

impl Scanner<StdinLock<'static>, Stdout> {
    /// Scanner over the process's standard input and output.
    ///
    /// Holds the stdin lock until dropped.
    pub fn stdio() -> Self {
        Scanner::new(stdin().lock(), stdout())
    }
}

impl<R: BufRead, W: Write> Scanner<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Scanner { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn write_prompt(&mut self, prompt: &str) -> std::io::Result<()> {
        if prompt.is_empty() {
            return Ok(());
        }
        self.writer
            .write_all(prompt.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|err| Error::new(err.kind(), format!("could not write prompt: {}", err)))?;
        trace!(bytes = prompt.len(), "wrote prompt");
        Ok(())
    }

    pub fn read_string(&mut self, prompt: &str) -> Result<String, InputError> {
        self.write_prompt(prompt)?;

        let mut line = String::new();
        let n = self.reader.read_line(&mut line)?;
        if n == 0 {
            return Err(InputError::Read(Error::new(
                ErrorKind::UnexpectedEof,
                "could not read line from input",
            )));
        }
        trace!(bytes = n, "read line");

        Ok(line.trim().to_owned())
    }

    pub fn read_int(&mut self, prompt: &str) -> Result<i64, InputError> {
        let line = self.read_string(prompt)?;
        Ok(parse_int(&line)?)
    }

    pub fn read_float(&mut self, prompt: &str) -> Result<f64, InputError> {
        let line = self.read_string(prompt)?;
        Ok(parse_float(&line)?)
    }

    /// Reads a boolean. With `allow_yes_no`, the answers `y`/`yes`/`n`/`no` (in the
    /// casings listed by [`parse_yes_no_token`](crate::parse_yes_no_token)) are accepted
    /// as well.
    pub fn read_bool(&mut self, prompt: &str, allow_yes_no: bool) -> Result<bool, InputError> {
        let line = self.read_string(prompt)?;
        Ok(parse_bool(&line, allow_yes_no)?)
    }
}
