//! Configuration management and validation.
//!
//! Holds the delimiters and sizing used when reading parameter files, with
//! builder-style overrides and validation of the combination.

use crate::constants::{
    DEFAULT_KEY_VALUE_DELIMITER, DEFAULT_LIST_DELIMITER, DEFAULT_OUTPUT_HEADER,
    DEFAULT_SEQUENCE_CAPACITY,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Settings for parsing parameter files and writing summaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Character separating key from value on each line
    pub key_value_delimiter: char,

    /// Character separating entries of the temperature list
    pub list_delimiter: char,

    /// Initial capacity of the temperature sequence
    pub initial_capacity: usize,

    /// First line of every summary file
    pub output_header: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            key_value_delimiter: DEFAULT_KEY_VALUE_DELIMITER,
            list_delimiter: DEFAULT_LIST_DELIMITER,
            initial_capacity: DEFAULT_SEQUENCE_CAPACITY,
            output_header: DEFAULT_OUTPUT_HEADER.to_string(),
        }
    }
}

impl ParserConfig {
    pub fn with_key_value_delimiter(mut self, delimiter: char) -> Self {
        self.key_value_delimiter = delimiter;
        self
    }

    pub fn with_list_delimiter(mut self, delimiter: char) -> Self {
        self.list_delimiter = delimiter;
        self
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn with_output_header(mut self, header: impl Into<String>) -> Self {
        self.output_header = header.into();
        self
    }

    /// Check that the delimiters and capacity can parse a parameter file
    pub fn validate(&self) -> Result<()> {
        if self.key_value_delimiter.is_whitespace() || self.list_delimiter.is_whitespace() {
            return Err(Error::configuration(
                "Delimiters cannot be whitespace, lines are trimmed before splitting",
            ));
        }

        if self.key_value_delimiter == self.list_delimiter {
            return Err(Error::configuration(format!(
                "Key/value delimiter and list delimiter are both '{}'",
                self.key_value_delimiter
            )));
        }

        if self.initial_capacity == 0 {
            return Err(Error::configuration(
                "Initial sequence capacity must be greater than zero",
            ));
        }

        if self.output_header.contains('\n') {
            return Err(Error::configuration(
                "Output header must be a single line",
            ));
        }

        debug!(
            "Configuration valid: key/value '{}', list '{}', capacity {}",
            self.key_value_delimiter, self.list_delimiter, self.initial_capacity
        );
        Ok(())
    }
}
