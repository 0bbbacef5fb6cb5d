//! Application constants for the experiment parameter reader
//!
//! Default delimiters, recognised key names and summary file layout used
//! throughout the crate.

// =============================================================================
// Parameter File Format
// =============================================================================

/// Delimiter separating a key from its value on one line
pub const DEFAULT_KEY_VALUE_DELIMITER: char = ':';

/// Delimiter separating entries of a numeric list value
pub const DEFAULT_LIST_DELIMITER: char = ',';

/// Initial capacity of a freshly created numeric sequence
pub const DEFAULT_SEQUENCE_CAPACITY: usize = 20;

/// Lines starting with this character are ignored
pub const COMMENT_PREFIX: char = '#';

/// Recognised parameter keys
pub mod keys {
    pub const OUTPUT_FILE: &str = "outputfile";
    pub const LENGTH: &str = "length";
    pub const MONTE_CARLO_TRIALS: &str = "monte_carlo_trials";
    pub const TEMPERATURE: &str = "temperature";

    /// Plural spelling written by the experiment manager's parameter writer
    pub const TEMPERATURE_ALIAS: &str = "temperatures";
}

// =============================================================================
// Summary File
// =============================================================================

/// First line written to every summary file
pub const DEFAULT_OUTPUT_HEADER: &str = "Hello from Rust!";

/// Offset added to the scalar parameters to form the mock results
pub const RESULT_OFFSET: f64 = 0.42;

/// Decimal places used for results in the summary file
pub const RESULT_PRECISION: usize = 2;

/// Check if a key names the temperature list
pub fn is_temperature_key(key: &str) -> bool {
    key == keys::TEMPERATURE || key == keys::TEMPERATURE_ALIAS
}
