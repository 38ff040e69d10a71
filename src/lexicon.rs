const TRUE_TOKENS: [&str; 3] = ["1", "t", "true"];
const FALSE_TOKENS: [&str; 3] = ["0", "f", "false"];

// Matched verbatim; mixed casings such as "yEs" are not part of the dialect.
const YES_TOKENS: [&str; 5] = ["Y", "y", "yes", "YES", "Yes"];
const NO_TOKENS: [&str; 5] = ["N", "n", "no", "NO", "No"];

/// Looks `s` up in the canonical boolean lexicon, ignoring ASCII case.
pub fn parse_bool_token(s: &str) -> Option<bool> {
    if TRUE_TOKENS.iter().any(|t| t.eq_ignore_ascii_case(s)) {
        Some(true)
    } else if FALSE_TOKENS.iter().any(|t| t.eq_ignore_ascii_case(s)) {
        Some(false)
    } else {
        None
    }
}

/// Looks `s` up in the yes/no dialect. Case sensitive.
pub fn parse_yes_no_token(s: &str) -> Option<bool> {
    if YES_TOKENS.contains(&s) {
        Some(true)
    } else if NO_TOKENS.contains(&s) {
        Some(false)
    } else {
        None
    }
}
