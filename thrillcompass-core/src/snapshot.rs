//! Live wait-time snapshots and candidate assembly.
//!
//! A [`WaitTimeSnapshot`] holds one park's rides in feed order.
//! [`assemble_candidates`] joins it with a [`RiderProfile`] and
//! [`HeightRequirements`] to build the per-request candidate list.

use std::collections::HashSet;

use thiserror::Error;

use crate::{
    HeightRequirements, Recommendation, RideCandidate, RideStatus, RiderProfile, Scorer,
    recommend_with,
};

/// One row of the live feed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RideWait {
    /// Ride identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Themed area the ride belongs to, if the feed groups rides.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub land: Option<String>,
    /// Operating status and posted wait.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub status: RideStatus,
}

impl RideWait {
    /// Construct a feed row without a land.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, status: RideStatus) -> Self {
        Self {
            id,
            name: name.into(),
            land: None,
            status,
        }
    }

    /// Attach the themed land.
    #[must_use]
    pub fn in_land(mut self, land: impl Into<String>) -> Self {
        self.land = Some(land.into());
        self
    }
}

/// Errors returned by [`WaitTimeSnapshot::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The feed listed a ride twice.
    #[error("ride {ride_id} appears more than once in the snapshot")]
    DuplicateRide {
        /// Repeated ride identifier.
        ride_id: u64,
    },
}

/// The rides of one park at a point in time, in feed order.
///
/// # Examples
/// ```
/// use thrillcompass_core::{RideStatus, RideWait, WaitTimeSnapshot};
///
/// let snapshot = WaitTimeSnapshot::new(vec![
///     RideWait::new(1, "Revenge of the Mummy", RideStatus::Open { wait_minutes: 35 }),
///     RideWait::new(2, "Men in Black: Alien Attack", RideStatus::Closed),
/// ])?;
/// assert_eq!(snapshot.len(), 2);
/// assert_eq!(snapshot.open_count(), 1);
/// assert!(snapshot.get(2).is_some_and(|ride| !ride.status.is_open()));
/// # Ok::<(), thrillcompass_core::SnapshotError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<RideWait>", into = "Vec<RideWait>")
)]
pub struct WaitTimeSnapshot {
    rides: Vec<RideWait>,
}

impl WaitTimeSnapshot {
    /// Validate and wrap feed rows.
    ///
    /// # Errors
    /// Returns [`SnapshotError::DuplicateRide`] when a ride id repeats.
    pub fn new(rides: Vec<RideWait>) -> Result<Self, SnapshotError> {
        let mut seen = HashSet::with_capacity(rides.len());
        if let Some(repeat) = rides.iter().find(|ride| !seen.insert(ride.id)) {
            return Err(SnapshotError::DuplicateRide { ride_id: repeat.id });
        }
        Ok(Self { rides })
    }

    /// Rides in feed order.
    #[must_use]
    pub fn rides(&self) -> &[RideWait] {
        &self.rides
    }

    /// Look up a ride by id.
    #[must_use]
    pub fn get(&self, ride_id: u64) -> Option<&RideWait> {
        self.rides.iter().find(|ride| ride.id == ride_id)
    }

    /// Number of rides in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rides.len()
    }

    /// Report whether the snapshot lists no rides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }

    /// Number of rides currently operating.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.rides.iter().filter(|ride| ride.status.is_open()).count()
    }
}

impl TryFrom<Vec<RideWait>> for WaitTimeSnapshot {
    type Error = SnapshotError;

    fn try_from(rides: Vec<RideWait>) -> Result<Self, Self::Error> {
        Self::new(rides)
    }
}

impl From<WaitTimeSnapshot> for Vec<RideWait> {
    fn from(snapshot: WaitTimeSnapshot) -> Self {
        snapshot.rides
    }
}

/// Build scoring candidates from a snapshot and a rider's stored data.
///
/// Candidates follow snapshot order. Rides the rider is too short for are
/// dropped; rides the rider never rated carry no rating. Ratings for rides
/// missing from the snapshot are ignored.
///
/// # Examples
/// ```
/// use thrillcompass_core::{
///     assemble_candidates, HeightRequirements, Rating, RiderProfile, RideStatus, RideWait,
///     WaitTimeSnapshot,
/// };
///
/// let snapshot = WaitTimeSnapshot::new(vec![
///     RideWait::new(1, "Jurassic World VelociCoaster", RideStatus::Open { wait_minutes: 80 }),
///     RideWait::new(2, "Camp Jurassic", RideStatus::Open { wait_minutes: 0 }),
/// ])?;
/// let profile = RiderProfile::new().with_height(48).with_rating(2, Rating::new(4)?);
/// let heights = HeightRequirements::new().with_requirement(1, 51);
///
/// let candidates = assemble_candidates(&snapshot, &profile, &heights);
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].id, 2);
/// assert_eq!(candidates[0].rating, Rating::new(4).ok());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn assemble_candidates(
    snapshot: &WaitTimeSnapshot,
    profile: &RiderProfile,
    heights: &HeightRequirements,
) -> Vec<RideCandidate> {
    let rider_height = profile.height_inches();
    snapshot
        .rides()
        .iter()
        .filter(|ride| {
            let admitted = heights.admits(ride.id, rider_height);
            if !admitted {
                log::debug!("ride {} excluded by height requirement", ride.id);
            }
            admitted
        })
        .map(|ride| {
            RideCandidate::new(
                ride.id,
                ride.name.clone(),
                ride.status,
                profile.rating(ride.id),
            )
        })
        .collect()
}

/// Stored inputs for one recommendation.
///
/// # Examples
/// ```
/// use thrillcompass_core::{
///     BlendedScorer, Rating, RecommendRequest, RiderProfile, RideStatus, RideWait,
///     WaitTimeSnapshot,
/// };
///
/// let request = RecommendRequest {
///     profile: RiderProfile::new().with_rating(1, Rating::new(5)?),
///     ..RecommendRequest::default()
/// };
/// let snapshot = WaitTimeSnapshot::new(vec![
///     RideWait::new(1, "Transformers: The Ride-3D", RideStatus::Open { wait_minutes: 20 }),
/// ])?;
/// let picks = request.recommend(&snapshot, &BlendedScorer::default());
/// assert_eq!(picks.best.map(|r| r.candidate.id), Some(1));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendRequest {
    /// Visitor ratings and height.
    #[cfg_attr(feature = "serde", serde(default))]
    pub profile: RiderProfile,
    /// Ride height minimums.
    #[cfg_attr(feature = "serde", serde(default))]
    pub height_requirements: HeightRequirements,
}

impl RecommendRequest {
    /// Assemble candidates from `snapshot` and pick the top two.
    #[must_use]
    pub fn recommend<S>(&self, snapshot: &WaitTimeSnapshot, scorer: &S) -> Recommendation
    where
        S: Scorer + ?Sized,
    {
        let candidates = assemble_candidates(snapshot, &self.profile, &self.height_requirements);
        recommend_with(scorer, &candidates)
    }
}
