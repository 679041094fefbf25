//! Wait-time provider trait.

use crate::WaitTimeSnapshot;

use super::error::WaitTimeError;

/// Fetch the current rides and queue lengths of a park.
///
/// Implementations must be thread-safe so one provider can serve
/// concurrent requests.
///
/// # Examples
///
/// ```rust
/// use thrillcompass_core::{
///     RideStatus, RideWait, WaitTimeError, WaitTimeProvider, WaitTimeSnapshot,
/// };
///
/// struct OneRide;
///
/// impl WaitTimeProvider for OneRide {
///     fn fetch_snapshot(&self, _park_id: u64) -> Result<WaitTimeSnapshot, WaitTimeError> {
///         let ride = RideWait::new(1, "Space Mountain", RideStatus::Open { wait_minutes: 45 });
///         Ok(WaitTimeSnapshot::new(vec![ride])?)
///     }
/// }
///
/// let snapshot = OneRide.fetch_snapshot(16)?;
/// assert_eq!(snapshot.open_count(), 1);
/// # Ok::<(), WaitTimeError>(())
/// ```
pub trait WaitTimeProvider: Send + Sync {
    /// Return the current snapshot for `park_id`.
    ///
    /// # Errors
    /// Returns [`WaitTimeError`] when the feed cannot be reached or decoded.
    fn fetch_snapshot(&self, park_id: u64) -> Result<WaitTimeSnapshot, WaitTimeError>;
}
