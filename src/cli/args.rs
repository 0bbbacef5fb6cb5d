//! Command-line argument definitions for the experiment parameter reader
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::ParserConfig;
use crate::constants::{
    DEFAULT_KEY_VALUE_DELIMITER, DEFAULT_LIST_DELIMITER, DEFAULT_OUTPUT_HEADER,
    DEFAULT_SEQUENCE_CAPACITY,
};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the experiment parameter reader
///
/// Reads `key: value` parameter files for simulation runs and writes the
/// derived summary file named by each file's `outputfile` key.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "experiment-params",
    version,
    about = "Read experiment parameter files and write derived summary files",
    long_about = "Reads line-oriented `key: value` experiment parameter files, collects the \
                  temperature list into a numeric sequence and writes a summary file for each \
                  run. Malformed lines are skipped with a warning; invalid temperature lists and \
                  missing parameters fail the file."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse parameter files and write their summary files
    Run(RunArgs),
    /// Show how parameter files are parsed without writing anything
    Inspect(InspectArgs),
}

/// Arguments for the run command
#[derive(Debug, Clone, Parser)]
pub struct RunArgs {
    /// Parameter files or glob patterns
    #[arg(value_name = "PARAM_FILES", required = true, num_args = 1..)]
    pub param_files: Vec<String>,

    /// Directory that relative `outputfile` paths are resolved against
    ///
    /// Defaults to the current working directory.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Directory for relative output file paths"
    )]
    pub output_dir: Option<PathBuf>,

    /// Parse and summarise without writing output files
    #[arg(
        long = "dry-run",
        help = "Show what would be written without creating output files"
    )]
    pub dry_run: bool,

    #[command(flatten)]
    pub parser: ParserOptions,

    #[command(flatten)]
    pub logging: LoggingOptions,

    /// Output format for the run report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Parameter files or glob patterns
    #[arg(value_name = "PARAM_FILES", required = true, num_args = 1..)]
    pub param_files: Vec<String>,

    #[command(flatten)]
    pub parser: ParserOptions,

    #[command(flatten)]
    pub logging: LoggingOptions,

    /// Output format for the inspection report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Parameter file format options shared by all commands
#[derive(Debug, Clone, clap::Args)]
pub struct ParserOptions {
    /// Character separating keys from values
    #[arg(
        long = "delimiter",
        value_name = "CHAR",
        default_value_t = DEFAULT_KEY_VALUE_DELIMITER,
        help = "Key/value delimiter"
    )]
    pub delimiter: char,

    /// Character separating temperature list entries
    #[arg(
        long = "list-delimiter",
        value_name = "CHAR",
        default_value_t = DEFAULT_LIST_DELIMITER,
        help = "Numeric list delimiter"
    )]
    pub list_delimiter: char,

    /// Initial capacity of the temperature sequence
    #[arg(
        long = "initial-capacity",
        value_name = "COUNT",
        default_value_t = DEFAULT_SEQUENCE_CAPACITY,
        help = "Initial temperature sequence capacity"
    )]
    pub initial_capacity: usize,

    /// First line written to each summary file
    #[arg(
        long = "header",
        value_name = "TEXT",
        default_value = DEFAULT_OUTPUT_HEADER,
        help = "Header line of summary files"
    )]
    pub header: String,
}

/// Logging verbosity options shared by all commands
#[derive(Debug, Clone, clap::Args)]
pub struct LoggingOptions {
    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command, if one was given
    pub fn get_command(&self) -> Option<&Commands> {
        self.command.as_ref()
    }
}

impl ParserOptions {
    /// Build and validate the parser configuration from these options
    pub fn to_config(&self) -> Result<ParserConfig> {
        let config = ParserConfig::default()
            .with_key_value_delimiter(self.delimiter)
            .with_list_delimiter(self.list_delimiter)
            .with_initial_capacity(self.initial_capacity)
            .with_output_header(self.header.clone());

        config.validate()?;
        Ok(config)
    }
}

impl LoggingOptions {
    /// Get the log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl RunArgs {
    /// Validate the run command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(output_dir) = &self.output_dir {
            if output_dir.exists() && !output_dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Output path is not a directory: {}",
                    output_dir.display()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_run_defaults() {
        let args = Args::try_parse_from(["experiment-params", "run", "params.txt"]).unwrap();

        match args.get_command() {
            Some(Commands::Run(run)) => {
                assert_eq!(run.param_files, vec!["params.txt".to_string()]);
                assert!(!run.dry_run);
                assert_eq!(run.output_format, OutputFormat::Human);
                assert_eq!(run.parser.delimiter, ':');
                assert_eq!(run.parser.list_delimiter, ',');
                assert_eq!(run.parser.initial_capacity, 20);
                assert_eq!(run.parser.header, "Hello from Rust!");
                assert_eq!(run.logging.get_log_level(), "warn");
            }
            other => panic!("Expected run command, got {:?}", other),
        }
    }

    #[test]
    fn test_no_command() {
        let args = Args::try_parse_from(["experiment-params"]).unwrap();
        assert!(args.get_command().is_none());
    }

    #[test]
    fn test_run_requires_files() {
        assert!(Args::try_parse_from(["experiment-params", "run"]).is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        let args =
            Args::try_parse_from(["experiment-params", "inspect", "-vv", "p.txt"]).unwrap();
        match args.get_command() {
            Some(Commands::Inspect(inspect)) => {
                assert_eq!(inspect.logging.get_log_level(), "debug")
            }
            other => panic!("Expected inspect command, got {:?}", other),
        }

        let args = Args::try_parse_from(["experiment-params", "run", "-q", "p.txt"]).unwrap();
        match args.get_command() {
            Some(Commands::Run(run)) => assert_eq!(run.logging.get_log_level(), "error"),
            other => panic!("Expected run command, got {:?}", other),
        }

        assert!(Args::try_parse_from(["experiment-params", "run", "-q", "-v", "p.txt"]).is_err());
    }

    #[test]
    fn test_parser_options_to_config() {
        let args = Args::try_parse_from([
            "experiment-params",
            "run",
            "--delimiter",
            "=",
            "--list-delimiter",
            ";",
            "--initial-capacity",
            "8",
            "p.txt",
        ])
        .unwrap();

        let Some(Commands::Run(run)) = args.get_command() else {
            panic!("Expected run command");
        };
        let config = run.parser.to_config().unwrap();
        assert_eq!(config.key_value_delimiter, '=');
        assert_eq!(config.list_delimiter, ';');
        assert_eq!(config.initial_capacity, 8);
    }

    #[test]
    fn test_conflicting_delimiters_rejected() {
        let args = Args::try_parse_from([
            "experiment-params",
            "run",
            "--list-delimiter",
            ":",
            "p.txt",
        ])
        .unwrap();

        let Some(Commands::Run(run)) = args.get_command() else {
            panic!("Expected run command");
        };
        assert!(run.parser.to_config().is_err());
    }

    #[test]
    fn test_output_dir_must_be_directory() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_string_lossy().to_string();
        let args =
            Args::try_parse_from(["experiment-params", "run", "-o", &path, "p.txt"]).unwrap();

        let Some(Commands::Run(run)) = args.get_command() else {
            panic!("Expected run command");
        };
        assert!(run.validate().is_err());
    }
}
