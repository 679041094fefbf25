//! Error type for the ThrillCompass CLI.

use camino::Utf8PathBuf;
use std::sync::Arc;
use thiserror::Error;
use thrillcompass_core::{ScorerConfigError, WaitTimeError};
use thrillcompass_data::{ProviderBuildError, QueueTimesError};

/// Errors emitted by the ThrillCompass CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Option name.
        field: &'static str,
        /// Environment variable that also supplies it.
        env: &'static str,
    },
    /// A referenced input path does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The scoring options were rejected.
    #[error("invalid scoring options: {0}")]
    InvalidScorer(#[from] ScorerConfigError),
    /// Opening the recommendation request failed.
    #[error("failed to open recommendation request at {path:?}: {source}")]
    OpenRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The recommendation request could not be decoded.
    #[error("failed to parse recommendation request at {path:?}: {source}")]
    ParseRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// Opening a saved wait-time snapshot failed.
    #[error("failed to open wait-time snapshot at {path:?}: {source}")]
    OpenSnapshot {
        /// Snapshot path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// A saved wait-time snapshot could not be decoded.
    #[error("failed to parse wait-time snapshot at {path:?}: {source}")]
    ParseSnapshot {
        /// Snapshot path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: QueueTimesError,
    },
    /// Constructing the HTTP feed client failed.
    #[error("failed to build wait-time provider for {base_url:?}: {source}")]
    BuildWaitTimeProvider {
        /// Feed base URL.
        base_url: String,
        /// Build failure.
        #[source]
        source: ProviderBuildError,
    },
    /// Fetching live wait times failed.
    #[error("failed to fetch wait times for park {park_id}: {source}")]
    FetchWaitTimes {
        /// Requested park.
        park_id: u64,
        /// Feed failure.
        #[source]
        source: WaitTimeError,
    },
    /// Listing parks failed.
    #[error("failed to list parks: {0}")]
    ListParks(#[source] WaitTimeError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// Installing the log subscriber failed.
    #[error("failed to initialise logging: {0}")]
    InitLogging(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl CliError {
    /// Process exit status for this error.
    ///
    /// Clap's own outcomes keep clap's status: `0` for `--help` and
    /// `--version`, `2` for usage errors. Everything else exits with `1`.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ArgumentParsing(err) => err.exit_code(),
            _ => 1,
        }
    }
}
