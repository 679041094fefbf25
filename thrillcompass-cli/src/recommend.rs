//! Recommend command implementation for the ThrillCompass CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};
use thrillcompass_core::{
    BlendedScorer, DEFAULT_WAIT_CAP_MINUTES, Recommendation, RecommendRequest, ScoreWeights,
    WaitTimeProvider, WaitTimeSnapshot,
};
use thrillcompass_data::{DEFAULT_BASE_URL, HttpWaitTimeProvider, parse_queue_times};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_PARK_ID, ARG_QUEUE_TIMES_URL, ARG_RATING_WEIGHT, ARG_REQUEST, ARG_SNAPSHOT,
    ARG_WAIT_CAP_MINUTES, ARG_WAIT_WEIGHT, CliError, DEFAULT_PARK_ID, ENV_REQUEST, write_json,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Recommend the best and runner-up rides for a visitor. The \
                 request is a JSON file holding the visitor's ride ratings, \
                 height and the rides' height requirements. Wait times come \
                 from a saved Queue-Times document when --snapshot is given, \
                 otherwise from the live feed.",
    about = "Recommend the next ride"
)]
#[ortho_config(prefix = "THRILLCOMPASS")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing a recommendation request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Read wait times from a saved `queue_times.json` document.
    #[arg(long = ARG_SNAPSHOT, value_name = "path")]
    #[serde(default)]
    pub(crate) snapshot: Option<Utf8PathBuf>,
    /// Queue-Times park identifier for live wait times.
    #[arg(long = ARG_PARK_ID, value_name = "id")]
    #[serde(default)]
    pub(crate) park_id: Option<u64>,
    /// Base URL of the Queue-Times feed.
    #[arg(long = ARG_QUEUE_TIMES_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) queue_times_url: Option<String>,
    /// Weight given to the visitor's rating.
    #[arg(long = ARG_RATING_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) rating_weight: Option<f32>,
    /// Weight given to a short queue.
    #[arg(long = ARG_WAIT_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) wait_weight: Option<f32>,
    /// Queue length beyond which waits stop lowering the score.
    #[arg(long = ARG_WAIT_CAP_MINUTES, value_name = "minutes")]
    #[serde(default)]
    pub(crate) wait_cap_minutes: Option<u16>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Where wait times are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SnapshotSource {
    /// A saved Queue-Times document.
    File(Utf8PathBuf),
    /// The live feed.
    Live {
        /// Park to fetch.
        park_id: u64,
        /// Feed base URL.
        base_url: String,
    },
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Wait-time source.
    pub(crate) source: SnapshotSource,
    /// Validated scorer.
    pub(crate) scorer: BlendedScorer,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_REQUEST)?;
        if let SnapshotSource::File(path) = &self.source {
            require_existing(path, ARG_SNAPSHOT)?;
        }
        Ok(())
    }
}

pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_REQUEST,
        })?;

        let defaults = ScoreWeights::default();
        let weights = ScoreWeights {
            rating: args.rating_weight.unwrap_or(defaults.rating),
            wait: args.wait_weight.unwrap_or(defaults.wait),
        };
        let cap = args.wait_cap_minutes.unwrap_or(DEFAULT_WAIT_CAP_MINUTES);
        let scorer = BlendedScorer::new(weights, cap)?;

        let source = match args.snapshot {
            Some(path) => SnapshotSource::File(path),
            None => SnapshotSource::Live {
                park_id: args.park_id.unwrap_or(DEFAULT_PARK_ID),
                base_url: args
                    .queue_times_url
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            },
        };

        Ok(Self {
            request_path,
            source,
            scorer,
        })
    }
}

/// Builds the live wait-time provider for the current invocation.
pub(crate) trait WaitTimeProviderBuilder {
    fn build(&self, base_url: &str) -> Result<Box<dyn WaitTimeProvider>, CliError>;
}

pub(crate) struct DefaultWaitTimeProviderBuilder;

impl WaitTimeProviderBuilder for DefaultWaitTimeProviderBuilder {
    fn build(&self, base_url: &str) -> Result<Box<dyn WaitTimeProvider>, CliError> {
        let provider = HttpWaitTimeProvider::new(base_url).map_err(|source| {
            CliError::BuildWaitTimeProvider {
                base_url: base_url.to_owned(),
                source,
            }
        })?;
        Ok(Box::new(provider))
    }
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    builder: &dyn WaitTimeProviderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let recommendation = execute_recommend(args, builder)?;
    write_json(writer, &recommendation)
}

fn execute_recommend(
    args: RecommendArgs,
    builder: &dyn WaitTimeProviderBuilder,
) -> Result<Recommendation, CliError> {
    let config = resolve_recommend_config(args)?;
    let request = load_recommend_request(&config.request_path)?;
    let snapshot = acquire_snapshot(&config.source, builder)?;
    Ok(request.recommend(&snapshot, &config.scorer))
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn acquire_snapshot(
    source: &SnapshotSource,
    builder: &dyn WaitTimeProviderBuilder,
) -> Result<WaitTimeSnapshot, CliError> {
    match source {
        SnapshotSource::File(path) => {
            log::info!("reading wait times from {path}");
            load_snapshot_file(path)
        }
        SnapshotSource::Live { park_id, base_url } => {
            log::info!("fetching wait times for park {park_id} from {base_url}");
            let provider = builder.build(base_url)?;
            provider
                .fetch_snapshot(*park_id)
                .map_err(|source| CliError::FetchWaitTimes {
                    park_id: *park_id,
                    source,
                })
        }
    }
}

/// Loads a JSON-encoded [`RecommendRequest`] from disk.
pub(crate) fn load_recommend_request(path: &Utf8Path) -> Result<RecommendRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a saved Queue-Times document from disk.
pub(crate) fn load_snapshot_file(path: &Utf8Path) -> Result<WaitTimeSnapshot, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenSnapshot {
        path: path.to_path_buf(),
        source,
    })?;
    parse_queue_times(BufReader::new(file)).map_err(|source| CliError::ParseSnapshot {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
