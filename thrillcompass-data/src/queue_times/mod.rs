//! Queue-Times live wait-time feed.
//!
//! [queue-times.com](https://queue-times.com) publishes per-park wait times
//! and a directory of parks grouped by operator. This module decodes both
//! documents and fetches them over HTTP.
//!
//! # Architecture
//!
//! [`HttpWaitTimeProvider`] implements the synchronous
//! [`WaitTimeProvider`](thrillcompass_core::WaitTimeProvider) trait by
//! blocking on async HTTP calls internally. Wrap it in
//! [`ThrottledWaitTimeProvider`] to reuse a recent snapshot instead of
//! hitting the feed on every request.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use thrillcompass_core::WaitTimeProvider;
//! use thrillcompass_data::queue_times::{
//!     HttpWaitTimeProvider, HttpWaitTimeProviderConfig, ThrottledWaitTimeProvider,
//! };
//!
//! let config = HttpWaitTimeProviderConfig::default().with_timeout(Duration::from_secs(10));
//! let provider = ThrottledWaitTimeProvider::new(HttpWaitTimeProvider::with_config(config)?);
//!
//! let snapshot = provider.fetch_snapshot(64)?;
//! println!("{} rides open", snapshot.open_count());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod directory;
mod provider;
mod response;
mod throttle;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use directory::{Park, ParkDirectory, ParkGroup};
pub use provider::{
    DEFAULT_BASE_URL, DEFAULT_USER_AGENT, HttpWaitTimeProvider, HttpWaitTimeProviderConfig,
    ProviderBuildError,
};
pub use response::{
    QueueTimesError, QueueTimesLand, QueueTimesResponse, QueueTimesRide, parse_queue_times,
};
pub use throttle::{DEFAULT_MIN_INTERVAL, ThrottledWaitTimeProvider};
