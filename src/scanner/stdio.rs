//! Prompted reads from the process's standard input.
//!
//! Every call locks stdin for the duration of one line, so concurrent callers never
//! interleave within a line. Prompts go to standard output.

use crate::{InputError, Scanner};

pub fn read_string(prompt: &str) -> Result<String, InputError> {
    Scanner::stdio().read_string(prompt)
}

pub fn read_int(prompt: &str) -> Result<i64, InputError> {
    Scanner::stdio().read_int(prompt)
}

pub fn read_float(prompt: &str) -> Result<f64, InputError> {
    Scanner::stdio().read_float(prompt)
}

pub fn read_bool(prompt: &str, allow_yes_no: bool) -> Result<bool, InputError> {
    Scanner::stdio().read_bool(prompt, allow_yes_no)
}
