//! Parameter file reading and key dispatch
//!
//! - [`builder`] - routes key/value pairs into the four experiment fields
//! - [`reader`] - drives the line parser over a whole file and reports skipped lines

pub mod builder;
pub mod reader;

#[cfg(test)]
pub mod tests;

pub use builder::ParametersBuilder;
pub use reader::{read_parameter_file, read_parameters};
