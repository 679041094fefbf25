//! Parks command: print the Queue-Times park directory.

use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use thrillcompass_data::{DEFAULT_BASE_URL, HttpWaitTimeProvider, ParkDirectory};

use crate::{ARG_QUEUE_TIMES_URL, CliError, write_json};

/// CLI arguments for the `parks` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "parks", about = "List parks and their identifiers")]
#[ortho_config(prefix = "THRILLCOMPASS")]
pub(crate) struct ParksArgs {
    /// Base URL of the Queue-Times feed.
    #[arg(long = ARG_QUEUE_TIMES_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) queue_times_url: Option<String>,
}

/// Resolved `parks` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParksConfig {
    pub(crate) base_url: String,
}

impl From<ParksArgs> for ParksConfig {
    fn from(args: ParksArgs) -> Self {
        Self {
            base_url: args
                .queue_times_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        }
    }
}

/// Builds the park directory for the current invocation.
pub(crate) trait ParkDirectoryBuilder {
    fn build(&self, config: &ParksConfig) -> Result<Box<dyn ParkDirectory>, CliError>;
}

pub(crate) struct DefaultParkDirectoryBuilder;

impl ParkDirectoryBuilder for DefaultParkDirectoryBuilder {
    fn build(&self, config: &ParksConfig) -> Result<Box<dyn ParkDirectory>, CliError> {
        let provider = HttpWaitTimeProvider::new(config.base_url.clone()).map_err(|source| {
            CliError::BuildWaitTimeProvider {
                base_url: config.base_url.clone(),
                source,
            }
        })?;
        Ok(Box::new(provider))
    }
}

pub(crate) fn run_parks_with(
    args: ParksArgs,
    builder: &dyn ParkDirectoryBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = ParksConfig::from(merged);
    let directory = builder.build(&config)?;
    let groups = directory.list_parks().map_err(CliError::ListParks)?;
    log::debug!("listed {} park groups", groups.len());
    write_json(writer, &groups)
}
