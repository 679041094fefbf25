//! Rider profiles: stored per-ride ratings and the rider's height.
//!
//! Re-rating a ride replaces the previous rating, mirroring how ratings
//! are persisted per visitor.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::Rating;

/// A single stored rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RidePreference {
    /// Ride the rating applies to.
    pub ride_id: u64,
    /// The visitor's rating.
    pub rating: Rating,
}

/// Errors returned when building a [`RiderProfile`] from stored records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// The same ride was rated more than once.
    #[error("ride {ride_id} appears more than once in the stored preferences")]
    DuplicateRide {
        /// Repeated ride identifier.
        ride_id: u64,
    },
}

/// A visitor's stored preferences.
///
/// # Examples
/// ```
/// use thrillcompass_core::{Rating, RiderProfile};
///
/// let profile = RiderProfile::new()
///     .with_height(54)
///     .with_rating(7, Rating::new(5)?)
///     .with_rating(8, Rating::new(2)?);
/// assert_eq!(profile.rating(7), Rating::new(5).ok());
/// assert!(profile.rating(9).is_none());
/// assert_eq!(profile.height_inches(), Some(54));
/// # Ok::<(), thrillcompass_core::RatingError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ProfileRecord", into = "ProfileRecord")
)]
pub struct RiderProfile {
    ratings: BTreeMap<u64, Rating>,
    height_inches: Option<u16>,
}

impl RiderProfile {
    /// Construct an empty profile.
    ///
    /// # Examples
    /// ```
    /// use thrillcompass_core::RiderProfile;
    ///
    /// let profile = RiderProfile::new();
    /// assert!(profile.is_empty());
    /// assert!(profile.height_inches().is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a profile from stored preference records.
    ///
    /// # Errors
    /// Returns [`ProfileError::DuplicateRide`] when a ride is rated twice.
    ///
    /// # Examples
    /// ```
    /// use thrillcompass_core::{ProfileError, Rating, RidePreference, RiderProfile};
    ///
    /// let five = Rating::new(5)?;
    /// let twice = [
    ///     RidePreference { ride_id: 1, rating: five },
    ///     RidePreference { ride_id: 1, rating: five },
    /// ];
    /// assert_eq!(
    ///     RiderProfile::from_preferences(twice),
    ///     Err(ProfileError::DuplicateRide { ride_id: 1 })
    /// );
    /// # Ok::<(), thrillcompass_core::RatingError>(())
    /// ```
    pub fn from_preferences<I>(preferences: I) -> Result<Self, ProfileError>
    where
        I: IntoIterator<Item = RidePreference>,
    {
        let mut ratings = BTreeMap::new();
        for RidePreference { ride_id, rating } in preferences {
            if ratings.insert(ride_id, rating).is_some() {
                return Err(ProfileError::DuplicateRide { ride_id });
            }
        }
        Ok(Self {
            ratings,
            height_inches: None,
        })
    }

    /// Return the stored rating for a ride, if present.
    #[must_use]
    pub fn rating(&self, ride_id: u64) -> Option<Rating> {
        self.ratings.get(&ride_id).copied()
    }

    /// Insert or replace the rating for a ride.
    pub fn set_rating(&mut self, ride_id: u64, rating: Rating) {
        self.ratings.insert(ride_id, rating);
    }

    /// Add a rating while returning `self` for chaining.
    #[must_use]
    pub fn with_rating(mut self, ride_id: u64, rating: Rating) -> Self {
        self.set_rating(ride_id, rating);
        self
    }

    /// Record the rider's height in inches.
    pub const fn set_height(&mut self, inches: u16) {
        self.height_inches = Some(inches);
    }

    /// Set the rider's height while returning `self` for chaining.
    #[must_use]
    pub const fn with_height(mut self, inches: u16) -> Self {
        self.set_height(inches);
        self
    }

    /// Return the rider's height, if known.
    #[must_use]
    pub const fn height_inches(&self) -> Option<u16> {
        self.height_inches
    }

    /// Iterate over stored ratings in ride id order.
    pub fn preferences(&self) -> impl Iterator<Item = RidePreference> + '_ {
        self.ratings
            .iter()
            .map(|(&ride_id, &rating)| RidePreference { ride_id, rating })
    }

    /// Return the number of rated rides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    /// Report whether no rides are rated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ProfileRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    height_inches: Option<u16>,
    #[serde(default)]
    ride_preferences: Vec<RidePreference>,
}

#[cfg(feature = "serde")]
impl TryFrom<ProfileRecord> for RiderProfile {
    type Error = ProfileError;

    fn try_from(record: ProfileRecord) -> Result<Self, Self::Error> {
        let mut profile = Self::from_preferences(record.ride_preferences)?;
        profile.height_inches = record.height_inches;
        Ok(profile)
    }
}

#[cfg(feature = "serde")]
impl From<RiderProfile> for ProfileRecord {
    fn from(profile: RiderProfile) -> Self {
        Self {
            height_inches: profile.height_inches,
            ride_preferences: profile.preferences().collect(),
        }
    }
}
