//! Summary derivation and summary file output.
//!
//! The summary file has three lines: the configured header followed by
//! `result1 => ...` and `result2 => ...`, each result printed with two
//! decimal places.

use crate::constants::{RESULT_OFFSET, RESULT_PRECISION};
use crate::models::ExperimentParameters;
use crate::{Error, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Values derived from one complete parameter set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentSummary {
    pub source: PathBuf,
    pub output_path: PathBuf,
    pub length: usize,
    pub monte_carlo_trials: usize,
    pub temperature_count: usize,
    pub first_temperature: f64,
    pub last_temperature: f64,
    pub result1: f64,
    pub result2: f64,
}

impl ExperimentSummary {
    /// Derive the summary, requiring at least one temperature
    ///
    /// A relative output file is resolved against `output_dir` when given.
    pub fn from_parameters(
        source: &Path,
        parameters: &ExperimentParameters,
        output_dir: Option<&Path>,
    ) -> Result<Self> {
        let first_temperature = parameters.temperature.first()?;
        let last_temperature = parameters.temperature.last()?;

        let output_path = match output_dir {
            Some(dir) if parameters.outputfile.is_relative() => dir.join(&parameters.outputfile),
            _ => parameters.outputfile.clone(),
        };

        Ok(Self {
            source: source.to_path_buf(),
            output_path,
            length: parameters.length,
            monte_carlo_trials: parameters.monte_carlo_trials,
            temperature_count: parameters.temperature.len(),
            first_temperature,
            last_temperature,
            result1: parameters.length as f64 + RESULT_OFFSET,
            result2: parameters.monte_carlo_trials as f64 + RESULT_OFFSET,
        })
    }

    /// One-line description of the run
    pub fn describe(&self) -> String {
        format!(
            "Performing mock experiment using length={} with trials={} with {} temps from {:.2} to {:.2}",
            self.length,
            self.monte_carlo_trials,
            self.temperature_count,
            self.first_temperature,
            self.last_temperature
        )
    }

    /// Text of the summary file
    pub fn render(&self, header: &str) -> String {
        format!(
            "{}\nresult1 => {:.prec$}\nresult2 => {:.prec$}\n",
            header,
            self.result1,
            self.result2,
            prec = RESULT_PRECISION
        )
    }

    /// Write the summary file, creating missing parent directories
    pub fn write(&self, header: &str) -> Result<u64> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::io(
                        format!("Failed to create output directory {}", parent.display()),
                        e,
                    )
                })?;
                debug!("Created output directory {}", parent.display());
            }
        }

        let contents = self.render(header);
        fs::write(&self.output_path, &contents).map_err(|e| {
            Error::io(
                format!("Failed to write summary to {}", self.output_path.display()),
                e,
            )
        })?;

        info!("Saved results in {}", self.output_path.display());
        Ok(contents.len() as u64)
    }
}
