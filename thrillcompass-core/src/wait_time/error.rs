use thiserror::Error;

use crate::SnapshotError;

/// Errors from [`crate::wait_time::WaitTimeProvider::fetch_snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaitTimeError {
    /// The request could not reach the feed.
    #[error("failed to reach wait-time feed at {url}: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The feed did not answer in time.
    #[error("wait-time feed at {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The feed answered with a non-success status.
    #[error("wait-time feed at {url} returned status {status}: {message}")]
    Http {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Response reason or body excerpt.
        message: String,
    },
    /// The response body was not a valid feed document.
    #[error("failed to parse wait-time feed: {message}")]
    Parse {
        /// Decoder error description.
        message: String,
    },
    /// The feed document described an invalid snapshot.
    #[error("wait-time feed produced an invalid snapshot")]
    InvalidSnapshot(#[from] SnapshotError),
}

