//! Test utilities for parameter dispatch and file reading

use std::io::Write;
use tempfile::NamedTempFile;


/// Parameter file with every required key
pub fn create_complete_params() -> String {
    r#"outputfile:out.txt
length:100
monte_carlo_trials:50
temperature:1.0,1.5,2.0"#
        .to_string()
}

/// Parameter file in the layout written by the experiment manager
pub fn create_manager_style_params() -> String {
    r#"# generated parameters
length: 16
monte_carlo_trials: 1000
temperatures: 1.5, 2.269, 3.0

outputfile: results/L16.txt"#
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
