//! Shared components for CLI commands
//!
//! Logging setup, file pattern expansion and run statistics used by every
//! command.

use crate::cli::args::LoggingOptions;
use crate::{Error, Result};
use std::error::Error as _;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Processing statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of parameter files read successfully
    pub files_processed: usize,
    /// Number of parameter files that failed
    pub files_failed: usize,
    /// Number of malformed lines skipped across all files
    pub lines_skipped: usize,
    /// Number of summary files written
    pub summaries_written: usize,
    /// Total bytes written to summary files
    pub bytes_written: u64,
    /// Total processing time
    pub processing_time: Duration,
}

impl ProcessingStats {
    /// Whether any file failed
    pub fn has_failures(&self) -> bool {
        self.files_failed > 0
    }
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn setup_logging(options: &LoggingOptions) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = options.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("experiment_params={}", log_level)));

    let result = if options.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Expand command-line file arguments into parameter file paths
///
/// Arguments naming an existing file are taken as-is, anything else is
/// treated as a glob pattern that must match at least one file. Duplicates
/// are dropped, keeping first-seen order.
pub fn expand_file_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        let literal = PathBuf::from(pattern);
        let matches = if literal.is_file() {
            vec![literal]
        } else {
            let paths = glob::glob(pattern).map_err(|e| Error::Pattern {
                pattern: pattern.clone(),
                source: e,
            })?;

            let mut matched: Vec<PathBuf> = paths
                .filter_map(|entry| entry.ok())
                .filter(|path| path.is_file())
                .collect();
            matched.sort();
            matched
        };

        if matches.is_empty() {
            return Err(Error::NoFilesMatched {
                pattern: pattern.clone(),
            });
        }

        for path in matches {
            if !files.contains(&path) {
                files.push(path);
            }
        }
    }

    debug!("Expanded {} arguments to {} files", patterns.len(), files.len());
    Ok(files)
}

/// Render an error with all of its causes on one line
pub fn format_error_chain(error: &Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}
