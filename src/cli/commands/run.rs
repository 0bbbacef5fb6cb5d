//! Run command implementation
//!
//! Reads each parameter file, derives its summary and writes the summary
//! file. Files are independent: a failing file is reported and counted, and
//! the remaining files are still processed.

use super::shared::{ProcessingStats, expand_file_patterns, format_error_chain, setup_logging};
use crate::Result;
use crate::cli::args::{OutputFormat, RunArgs};
use crate::config::ParserConfig;
use crate::params::read_parameter_file;
use crate::summary::ExperimentSummary;
use colored::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info};

/// Outcome of processing one parameter file
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub summary: ExperimentSummary,
    pub skipped_lines: usize,
    pub unknown_keys: Vec<String>,
    /// Bytes written, `None` on a dry run
    pub bytes_written: Option<u64>,
}

/// Failure of one parameter file
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub source: PathBuf,
    pub message: String,
}

/// Run command entry point
pub fn run_files(args: &RunArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(&args.logging)?;
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = args.parser.to_config()?;
    let files = expand_file_patterns(&args.param_files)?;
    info!("Processing {} parameter files", files.len());

    let mut stats = ProcessingStats::default();
    let mut outcomes = Vec::new();
    let mut failures = Vec::new();

    for file in &files {
        match process_file(file, &config, args.output_dir.as_deref(), args.dry_run) {
            Ok(outcome) => {
                stats.files_processed += 1;
                stats.lines_skipped += outcome.skipped_lines;
                if let Some(bytes) = outcome.bytes_written {
                    stats.summaries_written += 1;
                    stats.bytes_written += bytes;
                }
                outcomes.push(outcome);
            }
            Err(e) => {
                let message = format_error_chain(&e);
                error!("Failed to process {}: {}", file.display(), message);
                stats.files_failed += 1;
                failures.push(FileFailure {
                    source: file.clone(),
                    message,
                });
            }
        }
    }

    stats.processing_time = start_time.elapsed();

    match args.output_format {
        OutputFormat::Human => print_human_report(&outcomes, &failures, &stats, args.dry_run),
        OutputFormat::Json => print_json_report(&outcomes, &failures, &stats)?,
    }

    Ok(stats)
}

/// Read one parameter file and write its summary unless `dry_run` is set
pub fn process_file(
    path: &Path,
    config: &ParserConfig,
    output_dir: Option<&Path>,
    dry_run: bool,
) -> Result<FileOutcome> {
    let report = read_parameter_file(path, config)?;
    let summary = ExperimentSummary::from_parameters(path, &report.parameters, output_dir)?;
    info!("{}", summary.describe());

    let bytes_written = if dry_run {
        info!("Dry run: would write {}", summary.output_path.display());
        None
    } else {
        Some(summary.write(&config.output_header)?)
    };

    Ok(FileOutcome {
        summary,
        skipped_lines: report.skipped_lines.len(),
        unknown_keys: report.unknown_keys,
        bytes_written,
    })
}

fn print_human_report(
    outcomes: &[FileOutcome],
    failures: &[FileFailure],
    stats: &ProcessingStats,
    dry_run: bool,
) {
    for outcome in outcomes {
        let summary = &outcome.summary;
        let action = if dry_run { "would write" } else { "wrote" };

        println!(
            "{} {} {} {}",
            "✓".bright_green().bold(),
            summary.source.display().to_string().bright_cyan(),
            action,
            summary.output_path.display().to_string().bright_white()
        );
        println!("    {}", summary.describe());
        println!(
            "    result1 => {:.2}, result2 => {:.2}",
            summary.result1, summary.result2
        );

        if outcome.skipped_lines > 0 {
            println!(
                "    {} {} malformed lines skipped",
                "!".bright_yellow(),
                outcome.skipped_lines
            );
        }
        if !outcome.unknown_keys.is_empty() {
            println!(
                "    {} unknown keys ignored: {}",
                "!".bright_yellow(),
                outcome.unknown_keys.join(", ")
            );
        }
    }

    for failure in failures {
        println!(
            "{} {} {}",
            "✗".bright_red().bold(),
            failure.source.display().to_string().bright_cyan(),
            failure.message.red()
        );
    }

    println!();
    println!(
        "{} {} processed, {} failed, {} summaries written in {:.2?}",
        "Files:".bright_white().bold(),
        stats.files_processed,
        stats.files_failed,
        stats.summaries_written,
        stats.processing_time
    );
}

fn print_json_report(
    outcomes: &[FileOutcome],
    failures: &[FileFailure],
    stats: &ProcessingStats,
) -> Result<()> {
    let report = serde_json::json!({
        "files_processed": stats.files_processed,
        "files_failed": stats.files_failed,
        "lines_skipped": stats.lines_skipped,
        "summaries_written": stats.summaries_written,
        "bytes_written": stats.bytes_written,
        "processing_time_seconds": stats.processing_time.as_secs_f64(),
        "outcomes": outcomes,
        "failures": failures,
    });

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::fs;
    use tempfile::TempDir;

    fn write_params(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_process_file_writes_summary() {
        let temp_dir = TempDir::new().unwrap();
        let params = write_params(
            temp_dir.path(),
            "params.txt",
            "outputfile:out.txt\nlength:100\nmonte_carlo_trials:50\ntemperature:1.0,1.5,2.0\n",
        );

        let outcome =
            process_file(&params, &ParserConfig::default(), Some(temp_dir.path()), false).unwrap();

        let written = fs::read_to_string(temp_dir.path().join("out.txt")).unwrap();
        assert_eq!(written, "Hello from Rust!\nresult1 => 100.42\nresult2 => 50.42\n");
        assert_eq!(outcome.bytes_written, Some(written.len() as u64));
        assert_eq!(outcome.summary.temperature_count, 3);
        assert_eq!(outcome.skipped_lines, 0);
    }

    #[test]
    fn test_process_file_dry_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let params = write_params(
            temp_dir.path(),
            "params.txt",
            "outputfile:out.txt\nlength:1\nmonte_carlo_trials:2\ntemperature:3\n",
        );

        let outcome =
            process_file(&params, &ParserConfig::default(), Some(temp_dir.path()), true).unwrap();

        assert_eq!(outcome.bytes_written, None);
        assert!(!temp_dir.path().join("out.txt").exists());
    }

    #[test]
    fn test_process_file_empty_temperatures() {
        let temp_dir = TempDir::new().unwrap();
        let params = write_params(
            temp_dir.path(),
            "params.txt",
            "outputfile:out.txt\nlength:1\nmonte_carlo_trials:2\ntemperature:\n",
        );

        let result = process_file(&params, &ParserConfig::default(), Some(temp_dir.path()), false);
        assert!(matches!(result, Err(Error::EmptySequence { .. })));
        assert!(!temp_dir.path().join("out.txt").exists());
    }

    #[test]
    fn test_process_file_custom_header() {
        let temp_dir = TempDir::new().unwrap();
        let params = write_params(
            temp_dir.path(),
            "params.txt",
            "outputfile:out.txt\nlength:1\nmonte_carlo_trials:2\ntemperature:3\n",
        );
        let config = ParserConfig::default().with_output_header("Mock run");

        process_file(&params, &config, Some(temp_dir.path()), false).unwrap();

        let written = fs::read_to_string(temp_dir.path().join("out.txt")).unwrap();
        assert!(written.starts_with("Mock run\n"));
    }
}
