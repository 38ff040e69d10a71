use tracing::debug;

use crate::{parse_bool_token, parse_yes_no_token, ParseError};

pub fn parse_int(s: &str) -> Result<i64, ParseError> {
    s.parse().map_err(|err| ParseError::from_int_error(s, err))
}

fn is_infinity_literal(s: &str) -> bool {
    let s = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    s.eq_ignore_ascii_case("inf") || s.eq_ignore_ascii_case("infinity")
}

/// Parses `s` as an `f64`.
///
/// A finite literal too large for `f64` is rejected instead of being rounded to infinity.
pub fn parse_float(s: &str) -> Result<f64, ParseError> {
    let value: f64 = s
        .parse()
        .map_err(|err| ParseError::InvalidFloat { input: s.to_owned(), source: err })?;
    if value.is_infinite() && !is_infinity_literal(s) {
        return Err(ParseError::FloatOutOfRange { input: s.to_owned() });
    }
    Ok(value)
}

/// Parses `s` against the boolean lexicon, falling back to the yes/no dialect when
/// `allow_yes_no` is set.
pub fn parse_bool(s: &str, allow_yes_no: bool) -> Result<bool, ParseError> {
    if let Some(value) = parse_bool_token(s) {
        return Ok(value);
    }
    if allow_yes_no {
        if let Some(value) = parse_yes_no_token(s) {
            debug!(input = s, value, "accepted yes/no answer");
            return Ok(value);
        }
    }
    Err(ParseError::InvalidBool { input: s.to_owned() })
}
