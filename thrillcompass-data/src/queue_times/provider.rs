//! HTTP client for the Queue-Times feed.
//!
//! [`WaitTimeProvider`] and [`ParkDirectory`] are synchronous so the core
//! stays embeddable in synchronous callers. This provider bridges async
//! HTTP calls to them by blocking on a Tokio runtime internally.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use thrillcompass_core::{WaitTimeError, WaitTimeProvider, WaitTimeSnapshot};
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use super::directory::{ParkDirectory, ParkGroup};
use super::response::QueueTimesResponse;

/// Errors raised while constructing an [`HttpWaitTimeProvider`].
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// The reqwest client rejected the configuration.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// The private Tokio runtime could not start.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Public Queue-Times endpoint.
pub const DEFAULT_BASE_URL: &str = "https://queue-times.com";

/// Default user agent for feed requests.
pub const DEFAULT_USER_AGENT: &str = "thrillcompass/0.1";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`HttpWaitTimeProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpWaitTimeProviderConfig {
    /// Base URL of the feed (e.g., `"https://queue-times.com"`).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpWaitTimeProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpWaitTimeProviderConfig {
    /// Create a configuration for the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Queue-Times client implementing [`WaitTimeProvider`] and
/// [`ParkDirectory`].
///
/// # Runtime behaviour
///
/// Outside any Tokio runtime the provider blocks on its own
/// `current_thread` runtime. Inside a multi-threaded runtime (detected via
/// [`Handle::try_current()`] and [`RuntimeFlavor::MultiThread`]) it uses
/// that runtime's handle with [`tokio::task::block_in_place`]. Inside a
/// `current_thread` runtime it falls back to its own runtime, which can
/// deadlock if the caller's runtime drives IO this request depends on.
pub struct HttpWaitTimeProvider {
    client: Client,
    config: HttpWaitTimeProviderConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpWaitTimeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpWaitTimeProvider")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpWaitTimeProvider {
    /// Create a provider for `base_url` with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpWaitTimeProviderConfig::new(base_url))
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpWaitTimeProviderConfig) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// Return the active configuration.
    #[must_use]
    pub const fn config(&self) -> &HttpWaitTimeProviderConfig {
        &self.config
    }

    fn base(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    fn queue_times_url(&self, park_id: u64) -> String {
        format!("{}/parks/{park_id}/queue_times.json", self.base())
    }

    fn parks_url(&self) -> String {
        format!("{}/parks.json", self.base())
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, WaitTimeError> {
        log::debug!("fetching {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, url))?;

        response.json().await.map_err(|err| WaitTimeError::Parse {
            message: err.to_string(),
        })
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> WaitTimeError {
        if error.is_timeout() {
            return WaitTimeError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return WaitTimeError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        WaitTimeError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }
}

impl WaitTimeProvider for HttpWaitTimeProvider {
    fn fetch_snapshot(&self, park_id: u64) -> Result<WaitTimeSnapshot, WaitTimeError> {
        let url = self.queue_times_url(park_id);
        let response: QueueTimesResponse = self.block_on(self.fetch_json(&url))?;
        let snapshot = response.into_snapshot()?;
        log::info!(
            "park {park_id}: {} rides, {} open",
            snapshot.len(),
            snapshot.open_count()
        );
        Ok(snapshot)
    }
}

impl ParkDirectory for HttpWaitTimeProvider {
    fn list_parks(&self) -> Result<Vec<ParkGroup>, WaitTimeError> {
        let url = self.parks_url();
        self.block_on(self.fetch_json(&url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://queue-times.com")]
    #[case("https://queue-times.com/")]
    fn builds_feed_urls(#[case] base: &str) {
        let provider = HttpWaitTimeProvider::new(base).expect("provider should build");
        assert_eq!(
            provider.queue_times_url(64),
            "https://queue-times.com/parks/64/queue_times.json"
        );
        assert_eq!(provider.parks_url(), "https://queue-times.com/parks.json");
    }

    #[rstest]
    fn config_defaults() {
        let config = HttpWaitTimeProviderConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[rstest]
    fn config_builder_pattern() {
        let config = HttpWaitTimeProviderConfig::new("http://localhost:8080")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("test-agent/1.0");

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent/1.0");
    }

    #[rstest]
    fn unreachable_host_is_network_error() {
        // Port 9 (discard) on localhost is closed in test environments.
        let config = HttpWaitTimeProviderConfig::new("http://127.0.0.1:9")
            .with_timeout(Duration::from_secs(2));
        let provider = HttpWaitTimeProvider::with_config(config).expect("provider should build");
        let err = provider.fetch_snapshot(64).expect_err("nothing listening");
        assert!(matches!(
            err,
            WaitTimeError::Network { .. } | WaitTimeError::Timeout { .. }
        ));
    }
}
