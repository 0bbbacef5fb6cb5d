//! Line parsing for experiment parameter files
//!
//! Turns raw text lines into key/value pairs and numeric lists. Every
//! function here borrows from its input; nothing is split in place.
//!
//! ## Architecture
//!
//! - [`trim`] - line terminator and whitespace removal
//! - [`key_value`] - splitting a line at its first delimiter
//! - [`tokenizer`] - delimited numeric lists into a [`NumericSequence`](crate::NumericSequence)

pub mod key_value;
pub mod tokenizer;
pub mod trim;

#[cfg(test)]
pub mod tests;

pub use key_value::{KeyValuePair, split_key_value};
pub use tokenizer::{parse_tokens, tokenize, tokenize_and_fill};
pub use trim::trim;
