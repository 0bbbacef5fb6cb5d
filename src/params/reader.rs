//! Reads parameter files line by line
//!
//! Blank lines and `#` comments are skipped silently. Lines without a
//! key/value delimiter are skipped with a warning and recorded in the report.
//! Any other failure stops reading and is attributed to its line.

use super::builder::ParametersBuilder;
use crate::config::ParserConfig;
use crate::constants::COMMENT_PREFIX;
use crate::models::{ParseReport, SkippedLine};
use crate::parser::{split_key_value, trim};
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// Read and parse a parameter file from disk
pub fn read_parameter_file(path: &Path, config: &ParserConfig) -> Result<ParseReport> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let file = File::open(path)
        .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;

    info!("Reading parameter file: {}", path.display());
    read_parameters(BufReader::new(file), path, config)
}

/// Parse parameters from any line source
///
/// `source` is only used for diagnostics and the report.
pub fn read_parameters<R: BufRead>(
    reader: R,
    source: &Path,
    config: &ParserConfig,
) -> Result<ParseReport> {
    let source_name = source.display().to_string();
    let mut builder = ParametersBuilder::new(config)?;
    let mut skipped_lines = Vec::new();
    let mut lines_read = 0;

    for (index, raw) in reader.lines().enumerate() {
        let line_number = index + 1;
        let raw = raw.map_err(|e| {
            Error::io(format!("Failed to read line {} of {}", line_number, source_name), e)
        })?;
        lines_read = line_number;

        let line = trim(&raw);
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }
        debug!("{}:{}: {}", source_name, line_number, line);

        let pair = match split_key_value(line, config.key_value_delimiter) {
            Ok(pair) => pair,
            Err(e) if e.is_recoverable() => {
                warn!("Could not parse line {} of {}: {}", line_number, source_name, e);
                skipped_lines.push(SkippedLine {
                    line_number,
                    line: line.to_string(),
                    reason: e.to_string(),
                });
                continue;
            }
            Err(e) => return Err(Error::at_line(&source_name, line_number, e)),
        };

        builder
            .apply(pair)
            .map_err(|e| Error::at_line(&source_name, line_number, e))?;
    }

    let (parameters, unknown_keys) = builder.build()?;

    debug!(
        "Parsed {} lines from {}: {} skipped, {} unknown keys",
        lines_read,
        source_name,
        skipped_lines.len(),
        unknown_keys.len()
    );

    Ok(ParseReport {
        source: source.to_path_buf(),
        parameters,
        lines_read,
        skipped_lines,
        unknown_keys,
    })
}
