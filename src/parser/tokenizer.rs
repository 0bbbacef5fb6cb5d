//! Delimited numeric list tokenization
//!
//! Values such as `1.0, 1.5,2.0` are split on the list delimiter and every
//! token is parsed as an `f64`. A token is accepted only when the whole token
//! is a number; leading whitespace is tolerated because parameter writers
//! commonly join values with `", "`.

use crate::sequence::NumericSequence;
use crate::{Error, Result};
use tracing::debug;

/// Split a value into tokens without modifying it
///
/// An empty value yields no tokens. Empty tokens between delimiters are
/// yielded as empty strings so the caller can reject them.
pub fn tokenize(value: &str, delimiter: char) -> impl Iterator<Item = &str> {
    let mut tokens = value.split(delimiter);
    if value.is_empty() {
        tokens.next();
    }
    tokens
}

/// Parse every token of `value`, failing on the first token that is not a number
pub fn parse_tokens(value: &str, delimiter: char) -> Result<Vec<f64>> {
    tokenize(value, delimiter)
        .enumerate()
        .map(|(index, token)| parse_token(token, index))
        .collect()
}

/// Parse `value` and append all of its numbers to `target`
///
/// Validation happens before any append, so on [`Error::InvalidNumericToken`]
/// the target is left exactly as it was.
pub fn tokenize_and_fill(target: &mut NumericSequence, value: &str, delimiter: char) -> Result<()> {
    let numbers = parse_tokens(value, delimiter)?;

    for number in &numbers {
        target.append(*number)?;
    }

    debug!(
        "Appended {} values, sequence now holds {}",
        numbers.len(),
        target.len()
    );
    Ok(())
}

fn parse_token(token: &str, index: usize) -> Result<f64> {
    let candidate = token.trim_start_matches(|c: char| c.is_ascii_whitespace());

    if candidate.is_empty() {
        return Err(Error::invalid_numeric_token(token, index));
    }

    candidate
        .parse::<f64>()
        .map_err(|_| Error::invalid_numeric_token(token, index))
}
