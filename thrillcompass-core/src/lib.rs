//! Core domain types for the ThrillCompass ride recommender.
//!
//! Values are validated on construction so the scorer only ever sees
//! well-formed input. Nothing in this crate performs I/O; live wait times
//! arrive through the [`WaitTimeProvider`] seam.
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod eligibility;
pub mod profile;
pub mod recommend;
pub mod ride;
pub mod scorer;
pub mod snapshot;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod wait_time;

pub use eligibility::HeightRequirements;
pub use profile::{ProfileError, RidePreference, RiderProfile};
pub use recommend::{Recommendation, ScoredRide, recommend, recommend_with};
pub use ride::{Rating, RatingError, RideCandidate, RideStatus};
pub use scorer::{BlendedScorer, DEFAULT_WAIT_CAP_MINUTES, ScoreWeights, Scorer, ScorerConfigError};
pub use snapshot::{
    RecommendRequest, RideWait, SnapshotError, WaitTimeSnapshot, assemble_candidates,
};
pub use wait_time::{WaitTimeError, WaitTimeProvider};
