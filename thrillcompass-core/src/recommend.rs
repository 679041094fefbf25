//! Pick the best and runner-up rides from a candidate list.
//!
//! Selection is a single pass over the candidates. Closed rides are never
//! offered. Equal scores resolve in favour of the earlier candidate, so the
//! order of the input list (feed order) is the tie-break.

use crate::{BlendedScorer, RideCandidate, Scorer};

/// A candidate paired with the score it received.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredRide {
    /// The ride that was scored.
    pub candidate: RideCandidate,
    /// Score in `0.0..=1.0`.
    pub score: f32,
}

/// The top two open rides for a visitor.
///
/// `runner_up` is only present when `best` is. Both are `None` when no open
/// candidate exists.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    /// Highest scoring open ride.
    pub best: Option<ScoredRide>,
    /// Second highest scoring open ride.
    pub runner_up: Option<ScoredRide>,
}

impl Recommendation {
    /// A recommendation with no rides.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            best: None,
            runner_up: None,
        }
    }

    /// Report whether no ride was recommended.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.best.is_none()
    }
}

/// Recommend rides using the default [`BlendedScorer`].
///
/// # Examples
/// ```
/// use thrillcompass_core::{recommend, Rating, RideCandidate};
///
/// let rides = [
///     RideCandidate::open(1, "Hagrid's Magical Creatures Motorbike Adventure", 90, Rating::new(5).ok()),
///     RideCandidate::open(2, "Flight of the Hippogriff", 10, Rating::new(3).ok()),
///     RideCandidate::closed(3, "Harry Potter and the Forbidden Journey", Rating::new(5).ok()),
/// ];
/// let picks = recommend(&rides);
/// assert_eq!(picks.best.map(|r| r.candidate.id), Some(1));
/// assert_eq!(picks.runner_up.map(|r| r.candidate.id), Some(2));
/// ```
#[must_use]
pub fn recommend(candidates: &[RideCandidate]) -> Recommendation {
    recommend_with(&BlendedScorer::default(), candidates)
}

/// Recommend rides using `scorer`.
///
/// Closed candidates are skipped. A candidate replaces the current best only
/// when its score is strictly greater, so the first of several equal scores
/// wins. A candidate that does not beat the best may still displace the
/// runner-up under the same rule.
///
/// # Examples
/// ```
/// use thrillcompass_core::{recommend_with, BlendedScorer, RideCandidate};
///
/// let twins = [
///     RideCandidate::open(1, "Dueling Dragons Fire", 20, None),
///     RideCandidate::open(2, "Dueling Dragons Ice", 20, None),
/// ];
/// let picks = recommend_with(&BlendedScorer::default(), &twins);
/// assert_eq!(picks.best.map(|r| r.candidate.id), Some(1));
/// assert_eq!(picks.runner_up.map(|r| r.candidate.id), Some(2));
/// ```
#[must_use]
pub fn recommend_with<S>(scorer: &S, candidates: &[RideCandidate]) -> Recommendation
where
    S: Scorer + ?Sized,
{
    let mut best: Option<(usize, f32)> = None;
    let mut runner_up: Option<(usize, f32)> = None;

    for (index, candidate) in candidates.iter().enumerate() {
        if !candidate.status.is_open() {
            continue;
        }
        let score = scorer.score(candidate);
        match best {
            Some((_, top)) if score <= top => {
                if runner_up.is_none_or(|(_, second)| score > second) {
                    runner_up = Some((index, score));
                }
            }
            _ => {
                runner_up = best;
                best = Some((index, score));
            }
        }
    }

    log::debug!(
        "scored {} candidates, best {:?}, runner-up {:?}",
        candidates.len(),
        best.map(|(index, _)| index),
        runner_up.map(|(index, _)| index)
    );

    Recommendation {
        best: best.and_then(|slot| scored(candidates, slot)),
        runner_up: runner_up.and_then(|slot| scored(candidates, slot)),
    }
}

fn scored(candidates: &[RideCandidate], (index, score): (usize, f32)) -> Option<ScoredRide> {
    candidates.get(index).map(|candidate| ScoredRide {
        candidate: candidate.clone(),
        score,
    })
}
