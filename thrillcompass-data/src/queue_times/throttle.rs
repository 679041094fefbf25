//! Reuse recent snapshots instead of refetching the feed.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use thrillcompass_core::{WaitTimeError, WaitTimeProvider, WaitTimeSnapshot};

/// Shortest gap between two fetches of the same park.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug)]
struct CachedSnapshot {
    fetched_at: Instant,
    snapshot: WaitTimeSnapshot,
}

/// Wrap a provider so each park is fetched at most once per interval.
///
/// Within `min_interval` of the last successful fetch the cached snapshot
/// is returned without consulting the inner provider. Failures are passed
/// through and never cached.
///
/// # Examples
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::time::Duration;
/// use thrillcompass_core::{WaitTimeError, WaitTimeProvider, WaitTimeSnapshot};
/// use thrillcompass_data::ThrottledWaitTimeProvider;
///
/// #[derive(Default)]
/// struct Counting(AtomicUsize);
///
/// impl WaitTimeProvider for Counting {
///     fn fetch_snapshot(&self, _park_id: u64) -> Result<WaitTimeSnapshot, WaitTimeError> {
///         self.0.fetch_add(1, Ordering::SeqCst);
///         Ok(WaitTimeSnapshot::default())
///     }
/// }
///
/// let provider =
///     ThrottledWaitTimeProvider::with_min_interval(Counting::default(), Duration::from_secs(60));
/// provider.fetch_snapshot(64)?;
/// provider.fetch_snapshot(64)?;
/// assert_eq!(provider.inner().0.load(Ordering::SeqCst), 1);
/// # Ok::<(), WaitTimeError>(())
/// ```
#[derive(Debug)]
pub struct ThrottledWaitTimeProvider<P> {
    inner: P,
    min_interval: Duration,
    cache: Mutex<HashMap<u64, CachedSnapshot>>,
}

impl<P: WaitTimeProvider> ThrottledWaitTimeProvider<P> {
    /// Throttle `inner` with [`DEFAULT_MIN_INTERVAL`].
    #[must_use]
    pub fn new(inner: P) -> Self {
        Self::with_min_interval(inner, DEFAULT_MIN_INTERVAL)
    }

    /// Throttle `inner` with a custom interval.
    #[must_use]
    pub fn with_min_interval(inner: P, min_interval: Duration) -> Self {
        Self {
            inner,
            min_interval,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Borrow the wrapped provider.
    #[must_use]
    pub const fn inner(&self) -> &P {
        &self.inner
    }

    /// Return the configured interval.
    #[must_use]
    pub const fn min_interval(&self) -> Duration {
        self.min_interval
    }

    fn cached(&self, park_id: u64, now: Instant) -> Option<WaitTimeSnapshot> {
        let cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        cache
            .get(&park_id)
            .filter(|entry| now.saturating_duration_since(entry.fetched_at) < self.min_interval)
            .map(|entry| entry.snapshot.clone())
    }

    fn store(&self, park_id: u64, fetched_at: Instant, snapshot: WaitTimeSnapshot) {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        cache.insert(
            park_id,
            CachedSnapshot {
                fetched_at,
                snapshot,
            },
        );
    }
}

impl<P: WaitTimeProvider> WaitTimeProvider for ThrottledWaitTimeProvider<P> {
    fn fetch_snapshot(&self, park_id: u64) -> Result<WaitTimeSnapshot, WaitTimeError> {
        let now = Instant::now();
        if let Some(snapshot) = self.cached(park_id, now) {
            log::debug!("park {park_id}: reusing cached snapshot");
            return Ok(snapshot);
        }
        let snapshot = self.inner.fetch_snapshot(park_id)?;
        self.store(park_id, now, snapshot.clone());
        Ok(snapshot)
    }
}
