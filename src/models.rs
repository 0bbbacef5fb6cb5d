//! Core data structures for parameter processing.
//!
//! Defines the complete parameter set extracted from a file and the report
//! describing how the file was read.

use crate::sequence::NumericSequence;
use serde::Serialize;
use std::path::PathBuf;

/// Complete parameter set for one experiment run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentParameters {
    pub outputfile: PathBuf,
    pub length: usize,
    pub monte_carlo_trials: usize,
    pub temperature: NumericSequence,
}

/// Line that was skipped while reading a parameter file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number
    pub line_number: usize,
    pub line: String,
    pub reason: String,
}

/// Result of reading one parameter file
#[derive(Debug, Clone, Serialize)]
pub struct ParseReport {
    pub source: PathBuf,
    pub parameters: ExperimentParameters,
    pub lines_read: usize,
    pub skipped_lines: Vec<SkippedLine>,
    pub unknown_keys: Vec<String>,
}

impl ParseReport {
    /// Whether every non-blank line was understood
    pub fn is_clean(&self) -> bool {
        self.skipped_lines.is_empty() && self.unknown_keys.is_empty()
    }
}
