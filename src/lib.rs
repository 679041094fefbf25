//! Facade crate for the ThrillCompass ride recommender.
//!
//! This crate re-exports the core domain types and exposes the Queue-Times
//! wait-time feed behind the `queue-times` feature flag.

#![forbid(unsafe_code)]

pub use thrillcompass_core::{
    BlendedScorer, DEFAULT_WAIT_CAP_MINUTES, HeightRequirements, ProfileError, Rating,
    RatingError, Recommendation, RecommendRequest, RideCandidate, RidePreference, RideStatus,
    RideWait, RiderProfile, ScoreWeights, ScoredRide, Scorer, ScorerConfigError, SnapshotError,
    WaitTimeError, WaitTimeProvider, WaitTimeSnapshot, assemble_candidates, recommend,
    recommend_with,
};

#[cfg(feature = "test-support")]
pub use thrillcompass_core::test_support;

#[cfg(feature = "queue-times")]
pub use thrillcompass_data::{
    HttpWaitTimeProvider, HttpWaitTimeProviderConfig, Park, ParkDirectory, ParkGroup,
    ThrottledWaitTimeProvider, parse_queue_times,
};
