//! Command-line interface for the ThrillCompass ride recommender.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use tracing_subscriber::EnvFilter;

mod error;
mod fs;
mod parks;
mod recommend;
#[cfg(test)]
mod tests;

pub use error::CliError;

use parks::{DefaultParkDirectoryBuilder, ParksArgs, run_parks_with};
use recommend::{DefaultWaitTimeProviderBuilder, RecommendArgs, run_recommend_with};

const ARG_REQUEST: &str = "request";
const ARG_SNAPSHOT: &str = "snapshot";
const ARG_PARK_ID: &str = "park-id";
const ARG_QUEUE_TIMES_URL: &str = "queue-times-url";
const ARG_RATING_WEIGHT: &str = "rating-weight";
const ARG_WAIT_WEIGHT: &str = "wait-weight";
const ARG_WAIT_CAP_MINUTES: &str = "wait-cap-minutes";
const ENV_REQUEST: &str = "THRILLCOMPASS_CMDS_RECOMMEND_REQUEST_PATH";

/// Park recommended for when no `--park-id` is supplied.
const DEFAULT_PARK_ID: u64 = 64;

/// Default log filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Run the ThrillCompass CLI with the current process arguments and
/// environment, writing results to stdout.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, inputs or the
/// wait-time feed are unusable.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Recommend(args) => {
            run_recommend_with(args, &DefaultWaitTimeProviderBuilder, &mut stdout)
        }
        Command::Parks(args) => run_parks_with(args, &DefaultParkDirectoryBuilder, &mut stdout),
    }
}

/// Install a stderr log subscriber filtered by `RUST_LOG`.
///
/// Records emitted through the `log` facade by the library crates are
/// forwarded to the subscriber.
///
/// # Errors
/// Returns [`CliError::InitLogging`] when a global subscriber is already
/// installed.
pub fn init_logging() -> Result<(), CliError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(CliError::InitLogging)
}

#[derive(Debug, Parser)]
#[command(
    name = "thrillcompass",
    about = "Recommend the next theme-park ride from live wait times",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend the best and runner-up rides for a visitor.
    Recommend(RecommendArgs),
    /// List the parks covered by the wait-time feed.
    Parks(ParksArgs),
}

/// Write `value` as pretty JSON followed by a newline.
fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
