//! Test doubles for the Queue-Times seams.
//!
//! [`StubWaitTimeProvider`] and [`StubParkDirectory`] return canned
//! responses without making HTTP requests and count how often they are
//! called.

use std::sync::atomic::{AtomicUsize, Ordering};

use thrillcompass_core::{WaitTimeError, WaitTimeProvider, WaitTimeSnapshot};

use super::directory::{ParkDirectory, ParkGroup};

/// Stub `WaitTimeProvider` for testing.
///
/// # Example
///
/// ```
/// use thrillcompass_core::{WaitTimeProvider, WaitTimeSnapshot};
/// use thrillcompass_data::queue_times::test_support::StubWaitTimeProvider;
///
/// let provider = StubWaitTimeProvider::with_snapshot(WaitTimeSnapshot::default());
/// assert!(provider.fetch_snapshot(64).is_ok());
/// assert_eq!(provider.calls(), 1);
/// ```
#[derive(Debug)]
pub struct StubWaitTimeProvider {
    response: Result<WaitTimeSnapshot, WaitTimeError>,
    calls: AtomicUsize,
}

impl StubWaitTimeProvider {
    /// Return `snapshot` for every park.
    #[must_use]
    pub const fn with_snapshot(snapshot: WaitTimeSnapshot) -> Self {
        Self {
            response: Ok(snapshot),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fail every fetch with `error`.
    #[must_use]
    pub const fn with_error(error: WaitTimeError) -> Self {
        Self {
            response: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of fetches so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl WaitTimeProvider for StubWaitTimeProvider {
    fn fetch_snapshot(&self, _park_id: u64) -> Result<WaitTimeSnapshot, WaitTimeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

/// Stub `ParkDirectory` for testing.
#[derive(Debug)]
pub struct StubParkDirectory {
    response: Result<Vec<ParkGroup>, WaitTimeError>,
    calls: AtomicUsize,
}

impl StubParkDirectory {
    /// Return `groups` on every call.
    #[must_use]
    pub const fn with_groups(groups: Vec<ParkGroup>) -> Self {
        Self {
            response: Ok(groups),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fail every call with `error`.
    #[must_use]
    pub const fn with_error(error: WaitTimeError) -> Self {
        Self {
            response: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of listings so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ParkDirectory for StubParkDirectory {
    fn list_parks(&self) -> Result<Vec<ParkGroup>, WaitTimeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}
