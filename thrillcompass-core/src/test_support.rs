//! Test doubles for the scoring and wait-time seams.

use std::collections::HashMap;

use crate::{RideCandidate, Scorer, WaitTimeError, WaitTimeProvider, WaitTimeSnapshot};

/// `WaitTimeProvider` that returns the same result for every park.
#[derive(Debug, Clone)]
pub struct FixedWaitTimeProvider {
    result: Result<WaitTimeSnapshot, WaitTimeError>,
}

impl FixedWaitTimeProvider {
    /// Serve `snapshot` for every park.
    #[must_use]
    pub const fn new(snapshot: WaitTimeSnapshot) -> Self {
        Self {
            result: Ok(snapshot),
        }
    }

    /// Fail every fetch with `error`.
    #[must_use]
    pub const fn failing(error: WaitTimeError) -> Self {
        Self { result: Err(error) }
    }
}

impl WaitTimeProvider for FixedWaitTimeProvider {
    fn fetch_snapshot(&self, _park_id: u64) -> Result<WaitTimeSnapshot, WaitTimeError> {
        self.result.clone()
    }
}

/// `Scorer` returning a fixed score per ride id.
///
/// Unknown and closed rides score `0.0`. Useful for pinning exact ties.
#[derive(Debug, Clone, Default)]
pub struct TableScorer {
    scores: HashMap<u64, f32>,
}

impl TableScorer {
    /// Build from `(ride_id, score)` pairs.
    #[must_use]
    pub fn new<I>(scores: I) -> Self
    where
        I: IntoIterator<Item = (u64, f32)>,
    {
        Self {
            scores: scores.into_iter().collect(),
        }
    }
}

impl Scorer for TableScorer {
    fn score(&self, candidate: &RideCandidate) -> f32 {
        if !candidate.status.is_open() {
            return 0.0;
        }
        Self::sanitise(self.scores.get(&candidate.id).copied().unwrap_or(0.0))
    }
}
