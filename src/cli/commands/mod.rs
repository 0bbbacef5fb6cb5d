//! Command implementations for the experiment parameter CLI
//!
//! Each command lives in its own module:
//! - `run`: parse parameter files and write summary files
//! - `inspect`: show parsing results without writing anything

pub mod inspect;
pub mod run;
pub mod shared;

pub use shared::ProcessingStats;

use crate::Result;
use crate::cli::args::Commands;

/// Dispatch to the handler for `command`
pub fn run(command: &Commands) -> Result<ProcessingStats> {
    match command {
        Commands::Run(run_args) => run::run_files(run_args),
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args),
    }
}
