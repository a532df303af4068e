//! Execution context for the PagerTree CLI.
//!
//! Gathers what every API-backed command needs: the resolved configuration,
//! one API client shared by all requests of the command, and the output
//! format.

use crate::{
    commands::params::{PARAMETER_CONFIG, PARAMETER_FORMAT},
    configuration::Configuration,
    error::CliError,
    format::OutputFormat,
    pagertree::PagerTreeClient,
};
use clap::ArgMatches;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// Execution context containing common resources needed by CLI commands.
pub struct ExecutionContext {
    pub configuration: Configuration,
    pub client: PagerTreeClient,
    pub format: OutputFormat,
}

impl ExecutionContext {
    /// Create a new execution context from command-line arguments.
    ///
    /// Configuration is resolved here rather than at startup, so commands
    /// that need no API key never fail for lack of one.
    pub fn from_args(matches: &ArgMatches) -> Result<Self, CliError> {
        let configuration = Configuration::resolve(config_file(matches).as_deref())?;
        let client = PagerTreeClient::new(&configuration)?;
        debug!("Using PagerTree API at {}", client.base_url());
        let format = output_format(matches)?;

        Ok(ExecutionContext {
            configuration,
            client,
            format,
        })
    }
}

/// Explicit configuration file given with `--config`, if any
pub fn config_file(matches: &ArgMatches) -> Option<PathBuf> {
    matches.get_one::<PathBuf>(PARAMETER_CONFIG).cloned()
}

pub fn output_format(matches: &ArgMatches) -> Result<OutputFormat, CliError> {
    match matches.get_one::<String>(PARAMETER_FORMAT) {
        Some(format) => Ok(OutputFormat::from_str(format)?),
        None => Ok(OutputFormat::default()),
    }
}
