//! Inspect command implementation
//!
//! Shows what each parameter file parses to: the four experiment fields,
//! the temperature sequence, skipped lines and unknown keys. Nothing is
//! written to disk.

use super::shared::{ProcessingStats, expand_file_patterns, format_error_chain, setup_logging};
use crate::Result;
use crate::cli::args::{InspectArgs, OutputFormat};
use crate::models::ParseReport;
use crate::params::read_parameter_file;
use colored::*;
use std::time::Instant;
use tracing::{debug, error};

/// Inspect command entry point
pub fn run_inspect(args: &InspectArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(&args.logging)?;
    debug!("Command line arguments: {:?}", args);

    let config = args.parser.to_config()?;
    let files = expand_file_patterns(&args.param_files)?;

    let mut stats = ProcessingStats::default();
    let mut reports = Vec::new();

    for file in &files {
        match read_parameter_file(file, &config) {
            Ok(report) => {
                stats.files_processed += 1;
                stats.lines_skipped += report.skipped_lines.len();
                match args.output_format {
                    OutputFormat::Human => print_human_report(&report),
                    OutputFormat::Json => reports.push(report),
                }
            }
            Err(e) => {
                let message = format_error_chain(&e);
                error!("Failed to read {}: {}", file.display(), message);
                stats.files_failed += 1;
                if args.output_format == OutputFormat::Human {
                    println!(
                        "{} {}\n    {}\n",
                        "✗".bright_red().bold(),
                        file.display().to_string().bright_cyan(),
                        message.red()
                    );
                }
            }
        }
    }

    if args.output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    stats.processing_time = start_time.elapsed();
    Ok(stats)
}

fn print_human_report(report: &ParseReport) {
    let parameters = &report.parameters;

    println!(
        "{} ({} lines)",
        report.source.display().to_string().bright_cyan().bold(),
        report.lines_read
    );
    println!("    outputfile         = {}", parameters.outputfile.display());
    println!("    length             = {}", parameters.length);
    println!("    monte_carlo_trials = {}", parameters.monte_carlo_trials);

    let temperatures: Vec<String> = parameters
        .temperature
        .iter()
        .map(|t| t.to_string())
        .collect();
    println!(
        "    temperature        = [{}] ({} values, capacity {})",
        temperatures.join(", "),
        parameters.temperature.len(),
        parameters.temperature.capacity()
    );

    match (parameters.temperature.first(), parameters.temperature.last()) {
        (Ok(first), Ok(last)) => println!("    range              = {:.2} to {:.2}", first, last),
        _ => println!(
            "    {} temperature list is empty, run would fail",
            "!".bright_red()
        ),
    }

    for skipped in &report.skipped_lines {
        println!(
            "    {} line {} skipped: {}",
            "!".bright_yellow(),
            skipped.line_number,
            skipped.reason
        );
    }
    for key in &report.unknown_keys {
        println!("    {} unknown key ignored: {}", "!".bright_yellow(), key);
    }
    println!();
}
