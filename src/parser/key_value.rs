//! Key/value splitting of single parameter lines

use super::trim::trim;
use crate::{Error, Result};
use serde::Serialize;

/// Key and value of one parameter line, borrowed from the line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyValuePair<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

/// Split a line at the first occurrence of `delimiter`
///
/// Both sides are trimmed. Later occurrences of the delimiter belong to the
/// value. Lines without the delimiter fail with [`Error::MalformedLine`].
pub fn split_key_value(line: &str, delimiter: char) -> Result<KeyValuePair<'_>> {
    let (key, value) = line
        .split_once(delimiter)
        .ok_or_else(|| Error::malformed_line(line, delimiter))?;

    Ok(KeyValuePair {
        key: trim(key),
        value: trim(value),
    })
}
