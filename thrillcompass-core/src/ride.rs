//! Ride values that flow into a recommendation pass.
//!
//! Wait times and ratings are validated on construction, so a negative wait
//! or an out-of-range rating cannot reach the scorer. A closed ride is a
//! distinct [`RideStatus`] rather than a sentinel wait value.

use thiserror::Error;

/// A visitor's 1-5 preference for a ride.
///
/// # Examples
/// ```
/// use thrillcompass_core::Rating;
///
/// let rating = Rating::new(5)?;
/// assert_eq!(rating.value(), 5);
/// assert!(Rating::new(0).is_err());
/// assert_eq!(Rating::NEUTRAL.value(), 3);
/// # Ok::<(), thrillcompass_core::RatingError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Rating(u8);

/// Errors returned by [`Rating::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RatingError {
    /// The value fell outside `1..=5`.
    #[error("rating {value} must be between 1 and 5")]
    OutOfRange {
        /// Rejected raw value.
        value: u8,
    },
}

impl Rating {
    /// Lowest accepted rating.
    pub const MIN: u8 = 1;
    /// Highest accepted rating.
    pub const MAX: u8 = 5;
    /// Rating assumed for rides the visitor has not rated.
    pub const NEUTRAL: Self = Self(3);

    /// Validate and wrap a raw rating.
    ///
    /// # Errors
    /// Returns [`RatingError::OutOfRange`] unless `value` is within `1..=5`.
    pub const fn new(value: u8) -> Result<Self, RatingError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(RatingError::OutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Return the raw rating.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Whether a ride is running and, if so, its posted queue length.
///
/// # Examples
/// ```
/// use thrillcompass_core::RideStatus;
///
/// let open = RideStatus::Open { wait_minutes: 0 };
/// assert!(open.is_open());
/// assert_eq!(open.wait_minutes(), Some(0));
/// assert_eq!(RideStatus::Closed.wait_minutes(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "status", rename_all = "snake_case")
)]
pub enum RideStatus {
    /// The ride is operating.
    Open {
        /// Posted wait in minutes.
        wait_minutes: u16,
    },
    /// The ride is not operating.
    Closed,
}

impl RideStatus {
    /// Report whether the ride is operating.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Return the posted wait for an open ride.
    #[must_use]
    pub const fn wait_minutes(self) -> Option<u16> {
        match self {
            Self::Open { wait_minutes } => Some(wait_minutes),
            Self::Closed => None,
        }
    }
}

impl std::fmt::Display for RideStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { wait_minutes } => write!(f, "{wait_minutes} min"),
            Self::Closed => f.write_str("Closed"),
        }
    }
}

/// A ride under evaluation in one recommendation pass.
///
/// Candidates are assembled per request from the live snapshot and the
/// visitor's stored ratings, then discarded.
///
/// # Examples
/// ```
/// use thrillcompass_core::{Rating, RideCandidate};
///
/// let hulk = RideCandidate::open(7, "The Incredible Hulk Coaster", 45, Rating::new(5).ok());
/// assert!(hulk.status.is_open());
/// assert_eq!(hulk.rating_or_neutral().value(), 5);
///
/// let kong = RideCandidate::closed(3, "Skull Island: Reign of Kong", None);
/// assert_eq!(kong.rating_or_neutral().value(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RideCandidate {
    /// Ride identifier shared by the feed and stored ratings.
    pub id: u64,
    /// Display name; not used in scoring.
    pub name: String,
    /// Live status from the wait-time snapshot.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub status: RideStatus,
    /// Stored visitor rating, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rating: Option<Rating>,
}

impl RideCandidate {
    /// Construct a candidate with an explicit status.
    #[must_use]
    pub fn new(
        id: u64,
        name: impl Into<String>,
        status: RideStatus,
        rating: Option<Rating>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            status,
            rating,
        }
    }

    /// Construct an operating candidate.
    #[must_use]
    pub fn open(
        id: u64,
        name: impl Into<String>,
        wait_minutes: u16,
        rating: Option<Rating>,
    ) -> Self {
        Self::new(id, name, RideStatus::Open { wait_minutes }, rating)
    }

    /// Construct a closed candidate.
    #[must_use]
    pub fn closed(id: u64, name: impl Into<String>, rating: Option<Rating>) -> Self {
        Self::new(id, name, RideStatus::Closed, rating)
    }

    /// Return the stored rating or [`Rating::NEUTRAL`].
    #[must_use]
    pub fn rating_or_neutral(&self) -> Rating {
        self.rating.unwrap_or(Rating::NEUTRAL)
    }
}
