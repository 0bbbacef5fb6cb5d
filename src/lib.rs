//! Experiment Parameter Library
//!
//! A Rust library for reading line-oriented `key: value` experiment parameter
//! files and turning them into derived summary files.
//!
//! This library provides tools for:
//! - Trimming raw lines and splitting them into key/value pairs
//! - Tokenizing delimited numeric lists into a growable [`NumericSequence`]
//! - Dispatching recognised keys into a complete parameter set
//! - Writing the summary file for a parameter set
//!
//! ```rust
//! use experiment_params::{NumericSequence, parser};
//!
//! # fn example() -> experiment_params::Result<()> {
//! let line = parser::trim("temperature: 1.0,1.5,2.0\n");
//! let pair = parser::split_key_value(line, ':')?;
//!
//! let mut temperatures = NumericSequence::create(20)?;
//! parser::tokenize_and_fill(&mut temperatures, pair.value, ',')?;
//! assert_eq!(temperatures.last()?, 2.0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod config;
pub mod constants;
pub mod models;
pub mod params;
pub mod parser;
pub mod sequence;
pub mod summary;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::ParserConfig;
pub use models::{ExperimentParameters, ParseReport, SkippedLine};
pub use parser::KeyValuePair;
pub use sequence::NumericSequence;
pub use summary::ExperimentSummary;

/// Result type alias for parameter processing
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for parameter parsing and summary generation
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Parameter file not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Line has no key/value delimiter
    #[error("Malformed line (no '{delimiter}' delimiter): '{line}'")]
    MalformedLine { line: String, delimiter: char },

    /// Numeric list contains a token that is not a clean number
    #[error("Invalid numeric token '{token}' at position {index}")]
    InvalidNumericToken { token: String, index: usize },

    /// Sequence storage could not be reserved
    #[error("Allocation failure: could not reserve capacity for {requested} values")]
    AllocationFailure {
        requested: usize,
        #[source]
        source: Option<std::collections::TryReserveError>,
    },

    /// First or last element requested from an empty sequence
    #[error("Empty sequence: cannot read {operation} element")]
    EmptySequence { operation: &'static str },

    /// Required parameter absent from the file
    #[error("Missing parameter: {key}")]
    MissingField { key: String },

    /// Parameter value could not be interpreted
    #[error("Invalid value for {key}: '{value}' ({message})")]
    InvalidField {
        key: String,
        value: String,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Failure attributed to a specific line of a parameter file
    #[error("{path}, line {line_number}")]
    AtLine {
        path: String,
        line_number: usize,
        #[source]
        source: Box<Error>,
    },

    /// Invalid glob pattern on the command line
    #[error("Invalid file pattern '{pattern}'")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Glob pattern matched no files
    #[error("No files match '{pattern}'")]
    NoFilesMatched { pattern: String },

    /// Report serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a malformed line error
    pub fn malformed_line(line: impl Into<String>, delimiter: char) -> Self {
        Self::MalformedLine {
            line: line.into(),
            delimiter,
        }
    }

    /// Create an invalid numeric token error
    pub fn invalid_numeric_token(token: impl Into<String>, index: usize) -> Self {
        Self::InvalidNumericToken {
            token: token.into(),
            index,
        }
    }

    /// Create an allocation failure error
    pub fn allocation_failure(
        requested: usize,
        source: Option<std::collections::TryReserveError>,
    ) -> Self {
        Self::AllocationFailure { requested, source }
    }

    /// Create an empty sequence error
    pub fn empty_sequence(operation: &'static str) -> Self {
        Self::EmptySequence { operation }
    }

    /// Create a missing field error
    pub fn missing_field(key: impl Into<String>) -> Self {
        Self::MissingField { key: key.into() }
    }

    /// Create an invalid field error
    pub fn invalid_field(
        key: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            key: key.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Attach a file and line number to an error
    pub fn at_line(path: impl Into<String>, line_number: usize, source: Error) -> Self {
        Self::AtLine {
            path: path.into(),
            line_number,
            source: Box::new(source),
        }
    }

    /// Whether the caller may skip the offending line and continue
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::MalformedLine { .. } => true,
            Self::AtLine { source, .. } => source.is_recoverable(),
            _ => false,
        }
    }
}
