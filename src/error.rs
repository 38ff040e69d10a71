use std::num::{IntErrorKind, ParseFloatError, ParseIntError};

/// Failure of a single read operation.
///
/// `Read` means the input stream could not produce a line at all; `Parse` means a line
/// was read but does not fit the requested type. Callers typically give up on the former
/// and ask again on the latter.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input stream failed")]
    Read(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid integer (input = {input:?})")]
    InvalidInt {
        input: String,
        #[source]
        source: ParseIntError,
    },
    #[error("integer out of range (input = {input:?})")]
    IntOutOfRange {
        input: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid float (input = {input:?})")]
    InvalidFloat {
        input: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("float out of range (input = {input:?})")]
    FloatOutOfRange { input: String },
    #[error("invalid boolean (input = {input:?})")]
    InvalidBool { input: String },
}

impl InputError {
    pub fn is_read(&self) -> bool {
        match self {
            InputError::Read(_) => true,
            InputError::Parse(_) => false,
        }
    }
    pub fn is_parse(&self) -> bool {
        match self {
            InputError::Read(_) => false,
            InputError::Parse(_) => true,
        }
    }
}

impl ParseError {
    pub(crate) fn from_int_error(input: &str, source: ParseIntError) -> Self {
        match source.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                ParseError::IntOutOfRange { input: input.to_owned(), source }
            }
            _ => ParseError::InvalidInt { input: input.to_owned(), source },
        }
    }

    /// The line that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            ParseError::InvalidInt { input, .. }
            | ParseError::IntOutOfRange { input, .. }
            | ParseError::InvalidFloat { input, .. }
            | ParseError::FloatOutOfRange { input }
            | ParseError::InvalidBool { input } => input,
        }
    }
}
