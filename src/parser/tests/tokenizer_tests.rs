//! Tests for numeric list tokenization

use super::super::tokenizer::{parse_tokens, tokenize, tokenize_and_fill};
use crate::Error;
use crate::sequence::NumericSequence;

#[test]
fn test_tokenize_borrows_input() {
    let value = String::from("1.0,2.5,-3");
    let tokens: Vec<&str> = tokenize(&value, ',').collect();

    assert_eq!(tokens, vec!["1.0", "2.5", "-3"]);
    // The value is still intact after tokenization
    assert_eq!(value, "1.0,2.5,-3");
}

#[test]
fn test_tokenize_empty_value_yields_nothing() {
    assert_eq!(tokenize("", ',').count(), 0);
}

#[test]
fn test_tokenize_keeps_empty_tokens() {
    let tokens: Vec<&str> = tokenize("1,,2,", ',').collect();
    assert_eq!(tokens, vec!["1", "", "2", ""]);
}

#[test]
fn test_fill_in_order() {
    let mut sequence = NumericSequence::create(20).unwrap();
    tokenize_and_fill(&mut sequence, "1.0,2.5,-3", ',').unwrap();

    assert_eq!(sequence.as_slice(), &[1.0, 2.5, -3.0]);
}

#[test]
fn test_fill_accepts_space_after_delimiter() {
    let mut sequence = NumericSequence::create(20).unwrap();
    tokenize_and_fill(&mut sequence, "0.5, 1.25, 2e1", ',').unwrap();

    assert_eq!(sequence.as_slice(), &[0.5, 1.25, 20.0]);
}

#[test]
fn test_fill_rejects_non_numeric_token() {
    let mut sequence = NumericSequence::create(20).unwrap();
    let result = tokenize_and_fill(&mut sequence, "1.0,abc,3", ',');

    match result {
        Err(Error::InvalidNumericToken { token, index }) => {
            assert_eq!(token, "abc");
            assert_eq!(index, 1);
        }
        other => panic!("Expected InvalidNumericToken, got {:?}", other),
    }
}

#[test]
fn test_fill_is_all_or_nothing() {
    let mut sequence = NumericSequence::create(20).unwrap();
    sequence.append(9.0).unwrap();

    assert!(tokenize_and_fill(&mut sequence, "1.0,2.0,oops", ',').is_err());
    assert_eq!(sequence.as_slice(), &[9.0]);
}

#[test]
fn test_fill_rejects_trailing_characters() {
    assert!(parse_tokens("1.0x", ',').is_err());
    assert!(parse_tokens("1.0 ", ',').is_err());
    assert!(parse_tokens("1.0,2.0 K", ',').is_err());
}

#[test]
fn test_fill_rejects_empty_tokens() {
    assert!(parse_tokens("1.0,,2.0", ',').is_err());
    assert!(parse_tokens("1.0,2.0,", ',').is_err());
    assert!(parse_tokens(" ", ',').is_err());
}

#[test]
fn test_fill_grows_sequence() {
    let mut sequence = NumericSequence::create(2).unwrap();
    tokenize_and_fill(&mut sequence, "1;2;3;4;5", ';').unwrap();

    assert_eq!(sequence.len(), 5);
    assert_eq!(sequence.capacity(), 8);
    assert_eq!(sequence.last().unwrap(), 5.0);
}

#[test]
fn test_fill_appends_to_existing_values() {
    let mut sequence = NumericSequence::create(20).unwrap();
    tokenize_and_fill(&mut sequence, "1.0,1.5", ',').unwrap();
    tokenize_and_fill(&mut sequence, "2.0", ',').unwrap();

    assert_eq!(sequence.as_slice(), &[1.0, 1.5, 2.0]);
}
