//! Accumulates parsed key/value pairs into an [`ExperimentParameters`]

use crate::config::ParserConfig;
use crate::constants::{is_temperature_key, keys};
use crate::models::ExperimentParameters;
use crate::parser::{KeyValuePair, tokenize_and_fill};
use crate::sequence::NumericSequence;
use crate::{Error, Result};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Builder for the experiment parameter set
#[derive(Debug)]
pub struct ParametersBuilder {
    outputfile: Option<PathBuf>,
    length: Option<usize>,
    monte_carlo_trials: Option<usize>,
    temperature: NumericSequence,
    temperature_seen: bool,
    list_delimiter: char,
    unknown_keys: Vec<String>,
}

impl ParametersBuilder {
    pub fn new(config: &ParserConfig) -> Result<Self> {
        Ok(Self {
            outputfile: None,
            length: None,
            monte_carlo_trials: None,
            temperature: NumericSequence::create(config.initial_capacity)?,
            temperature_seen: false,
            list_delimiter: config.list_delimiter,
            unknown_keys: Vec::new(),
        })
    }

    /// Route one pair to its field
    ///
    /// Returns `false` for keys that are not experiment parameters; those are
    /// recorded and otherwise ignored.
    pub fn apply(&mut self, pair: KeyValuePair<'_>) -> Result<bool> {
        match pair.key {
            keys::OUTPUT_FILE => {
                if pair.value.is_empty() {
                    return Err(Error::invalid_field(
                        pair.key,
                        pair.value,
                        "output file name is empty",
                    ));
                }
                if self.outputfile.is_some() {
                    debug!("Overriding earlier {}", pair.key);
                }
                self.outputfile = Some(PathBuf::from(pair.value));
            }
            keys::LENGTH => {
                let length = parse_count(pair)?;
                if self.length.replace(length).is_some() {
                    debug!("Overriding earlier {}", pair.key);
                }
            }
            keys::MONTE_CARLO_TRIALS => {
                let trials = parse_count(pair)?;
                if self.monte_carlo_trials.replace(trials).is_some() {
                    debug!("Overriding earlier {}", pair.key);
                }
            }
            key if is_temperature_key(key) => {
                if self.temperature_seen {
                    debug!(
                        "Additional {} line, appending to {} existing values",
                        key,
                        self.temperature.len()
                    );
                }
                tokenize_and_fill(&mut self.temperature, pair.value, self.list_delimiter)?;
                self.temperature_seen = true;
            }
            key => {
                warn!("Unknown key encountered: '{}'", key);
                self.unknown_keys.push(key.to_string());
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Finish the parameter set, failing on the first missing field
    pub fn build(self) -> Result<(ExperimentParameters, Vec<String>)> {
        let outputfile = self
            .outputfile
            .ok_or_else(|| Error::missing_field(keys::OUTPUT_FILE))?;
        let length = self.length.ok_or_else(|| Error::missing_field(keys::LENGTH))?;
        let monte_carlo_trials = self
            .monte_carlo_trials
            .ok_or_else(|| Error::missing_field(keys::MONTE_CARLO_TRIALS))?;

        if !self.temperature_seen {
            return Err(Error::missing_field(keys::TEMPERATURE));
        }

        let parameters = ExperimentParameters {
            outputfile,
            length,
            monte_carlo_trials,
            temperature: self.temperature,
        };

        Ok((parameters, self.unknown_keys))
    }
}

fn parse_count(pair: KeyValuePair<'_>) -> Result<usize> {
    pair.value
        .parse::<usize>()
        .map_err(|e| Error::invalid_field(pair.key, pair.value, e.to_string()))
}
