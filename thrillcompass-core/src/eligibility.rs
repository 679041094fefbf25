//! Minimum rider heights per ride.

use std::collections::BTreeMap;

/// Minimum heights in inches keyed by ride id.
///
/// Rides without an entry have no requirement.
///
/// # Examples
/// ```
/// use thrillcompass_core::HeightRequirements;
///
/// let heights = HeightRequirements::new().with_requirement(7, 54);
/// assert!(!heights.admits(7, Some(48)));
/// assert!(heights.admits(7, Some(54)));
/// assert!(heights.admits(8, Some(30)));
/// assert!(heights.admits(7, None));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct HeightRequirements {
    minimums: BTreeMap<u64, u16>,
}

impl HeightRequirements {
    /// Create an empty requirement table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a requirement while returning `self` for chaining.
    #[must_use]
    pub fn with_requirement(mut self, ride_id: u64, inches: u16) -> Self {
        self.insert(ride_id, inches);
        self
    }

    /// Insert or replace the requirement for a ride.
    pub fn insert(&mut self, ride_id: u64, inches: u16) {
        self.minimums.insert(ride_id, inches);
    }

    /// Return the minimum height for a ride, `0` when unknown.
    #[must_use]
    pub fn min_height(&self, ride_id: u64) -> u16 {
        self.minimums.get(&ride_id).copied().unwrap_or(0)
    }

    /// Report whether a rider of `rider_height` may board `ride_id`.
    ///
    /// An unknown rider height admits every ride.
    #[must_use]
    pub fn admits(&self, ride_id: u64, rider_height: Option<u16>) -> bool {
        rider_height.is_none_or(|height| height >= self.min_height(ride_id))
    }

    /// Return the number of rides with a requirement.
    #[must_use]
    pub fn len(&self) -> usize {
        self.minimums.len()
    }

    /// Report whether no requirements are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.minimums.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, true)]
    #[case(Some(47), false)]
    #[case(Some(48), true)]
    #[case(Some(72), true)]
    fn admits_against_requirement(#[case] height: Option<u16>, #[case] expected: bool) {
        let heights = HeightRequirements::new().with_requirement(1, 48);
        assert_eq!(heights.admits(1, height), expected);
    }

    #[rstest]
    fn unknown_ride_defaults_to_zero() {
        assert_eq!(HeightRequirements::new().min_height(99), 0);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn decodes_object_keyed_by_ride() {
        let heights: HeightRequirements =
            serde_json::from_str(r#"{"7":54,"12":40}"#).expect("decode heights");
        assert_eq!(heights.min_height(7), 54);
        assert_eq!(heights.min_height(12), 40);
        assert_eq!(heights.len(), 2);
    }
}
