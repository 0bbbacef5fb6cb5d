use anyhow::Context;
use clap::Parser;
use experiment_params::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    let Some(command) = args.get_command() else {
        show_help_and_commands();
        process::exit(0);
    };

    let result = commands::run(command).context("Parameter processing failed");

    match result {
        Ok(stats) if stats.has_failures() => {
            // Per-file failures have already been reported by the command
            process::exit(1);
        }
        Ok(_stats) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Experiment Params - parameter file reader");
    println!("==========================================");
    println!();
    println!("Reads `key: value` experiment parameter files and writes a summary");
    println!("file for each run.");
    println!();
    println!("USAGE:");
    println!("    experiment-params <COMMAND> [OPTIONS] <PARAM_FILES>...");
    println!();
    println!("COMMANDS:");
    println!("    run         Parse parameter files and write their summary files");
    println!("    inspect     Show how parameter files are parsed without writing anything");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("PARAMETER FILE:");
    println!("    outputfile: out.txt");
    println!("    length: 100");
    println!("    monte_carlo_trials: 50");
    println!("    temperature: 1.0, 1.5, 2.0");
    println!();
    println!("EXAMPLES:");
    println!("    experiment-params run parameters.txt");
    println!("    experiment-params run --output-dir results 'params/*.txt'");
    println!("    experiment-params inspect --output-format json parameters.txt");
}
