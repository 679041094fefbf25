//! Score ride candidates for a visitor.
//!
//! The `Scorer` trait assigns a desirability score to a
//! [`RideCandidate`](crate::RideCandidate). [`BlendedScorer`] is the default
//! implementation: it blends the visitor's rating with the inverse of the
//! capped queue length.

use thiserror::Error;

use crate::{Rating, RideCandidate};

/// Minutes beyond which a longer queue no longer lowers the score.
pub const DEFAULT_WAIT_CAP_MINUTES: u16 = 120;

/// Calculate a desirability score for a ride candidate.
///
/// Higher scores indicate a better next ride. Implementations must be
/// thread-safe (`Send` + `Sync`) so one scorer can serve concurrent
/// requests. The method is infallible; implementers must return `0.0` for
/// closed candidates, which are never eligible anyway.
///
/// Implementations must:
/// - Produce finite (`f32::is_finite`) scores.
/// - Return non-negative values.
/// - Normalise results to the range `0.0..=1.0`.
///
/// Use [`Scorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use thrillcompass_core::{RideCandidate, Scorer};
///
/// struct ShortestQueue;
///
/// impl Scorer for ShortestQueue {
///     fn score(&self, candidate: &RideCandidate) -> f32 {
///         candidate
///             .status
///             .wait_minutes()
///             .map_or(0.0, |wait| Self::sanitise(1.0 / (1.0 + f32::from(wait))))
///     }
/// }
///
/// let ride = RideCandidate::open(1, "Pteranodon Flyers", 0, None);
/// assert_eq!(ShortestQueue.score(&ride), 1.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `candidate`.
    fn score(&self, candidate: &RideCandidate) -> f32;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    #[must_use]
    fn sanitise(score: f32) -> f32
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}

/// Relative weighting between the visitor's rating and the queue length.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreWeights {
    /// Multiplier applied to the normalised rating.
    pub rating: f32,
    /// Multiplier applied to the inverse capped wait.
    pub wait: f32,
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScorerConfigError::InvalidWeights`] when either value is
    /// not finite, is negative, or the total weight is zero.
    pub fn validate(self) -> Result<Self, ScorerConfigError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ScorerConfigError::InvalidWeights {
                rating: self.rating,
                wait: self.wait,
            })
        }
    }

    const fn is_valid(self) -> bool {
        self.has_finite_values() && self.has_non_negative_values() && self.has_non_zero_total()
    }

    const fn has_finite_values(self) -> bool {
        self.rating.is_finite() && self.wait.is_finite()
    }

    const fn has_non_negative_values(self) -> bool {
        self.rating >= 0.0_f32 && self.wait >= 0.0_f32
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums weights to ensure a non-zero total"
    )]
    const fn has_non_zero_total(self) -> bool {
        (self.rating + self.wait) != 0.0_f32
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            rating: 0.7_f32,
            wait: 0.3_f32,
        }
    }
}

/// Errors raised when configuring a [`BlendedScorer`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScorerConfigError {
    /// Provided weights were unusable.
    #[error("weights (rating {rating}, wait {wait}) must be finite, non-negative and sum to a positive value")]
    InvalidWeights {
        /// Rejected rating weight.
        rating: f32,
        /// Rejected wait weight.
        wait: f32,
    },
    /// The wait cap would divide by zero.
    #[error("wait cap must be at least one minute")]
    ZeroWaitCap,
}

/// Scorer blending the visitor's rating with the posted queue length.
///
/// ```text
/// rating_score = (rating / 5) * weights.rating
/// wait_score   = (1 - min(wait, cap) / cap) * weights.wait
/// score        = (rating_score + wait_score) / (weights.rating + weights.wait)
/// ```
///
/// Dividing by the total keeps custom weights within `0.0..=1.0`, so only
/// their ratio matters.
/// Unrated rides use [`Rating::NEUTRAL`]. With the default weights a
/// rating of 5 and no queue scores `1.0`, and a rating of 1 behind a queue
/// at or above the cap scores `0.14`.
///
/// # Examples
/// ```
/// use thrillcompass_core::{BlendedScorer, Rating, RideCandidate, Scorer};
///
/// let scorer = BlendedScorer::default();
/// let favourite = RideCandidate::open(1, "Jurassic World VelociCoaster", 0, Rating::new(5).ok());
/// assert!((scorer.score(&favourite) - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BlendedScorer {
    weights: ScoreWeights,
    wait_cap_minutes: u16,
}

impl BlendedScorer {
    /// Construct a scorer from validated weights and a wait cap.
    ///
    /// # Errors
    /// Returns [`ScorerConfigError`] when the weights are invalid or the cap
    /// is zero.
    pub fn new(weights: ScoreWeights, wait_cap_minutes: u16) -> Result<Self, ScorerConfigError> {
        let validated = weights.validate()?;
        if wait_cap_minutes == 0 {
            return Err(ScorerConfigError::ZeroWaitCap);
        }
        Ok(Self {
            weights: validated,
            wait_cap_minutes,
        })
    }

    /// Return the configured weights.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Return the configured wait cap in minutes.
    #[must_use]
    pub const fn wait_cap_minutes(&self) -> u16 {
        self.wait_cap_minutes
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "score blending requires a weighted sum"
    )]
    fn blend(self, rating: Rating, wait_minutes: u16) -> f32 {
        let rating_share = f32::from(rating.value()) / f32::from(Rating::MAX);
        let cap = f32::from(self.wait_cap_minutes);
        let capped_wait = f32::from(wait_minutes.min(self.wait_cap_minutes));
        let wait_share = 1.0_f32 - capped_wait / cap;
        // `validate` guarantees a positive total.
        let total = self.weights.rating + self.weights.wait;
        (rating_share * self.weights.rating + wait_share * self.weights.wait) / total
    }
}

impl Default for BlendedScorer {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            wait_cap_minutes: DEFAULT_WAIT_CAP_MINUTES,
        }
    }
}

impl Scorer for BlendedScorer {
    fn score(&self, candidate: &RideCandidate) -> f32 {
        let Some(wait_minutes) = candidate.status.wait_minutes() else {
            return 0.0;
        };
        Self::sanitise(self.blend(candidate.rating_or_neutral(), wait_minutes))
    }
}
