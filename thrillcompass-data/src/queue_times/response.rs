//! Queue-Times `queue_times.json` document.
//!
//! Rides are listed inside themed lands and, for parks without lands, in a
//! top-level `rides` array. Both arrays may be absent.

use std::io::Read;

use serde::Deserialize;
use thiserror::Error;
use thrillcompass_core::{RideStatus, RideWait, SnapshotError, WaitTimeError, WaitTimeSnapshot};

/// Errors raised while decoding a Queue-Times document.
#[derive(Debug, Error)]
pub enum QueueTimesError {
    /// The document was not valid JSON for the expected shape.
    #[error("failed to decode queue-times document")]
    Decode(#[source] serde_json::Error),
    /// An open ride reported a wait that cannot be a queue length.
    #[error("ride {ride_id} reported an invalid wait of {wait_time} minutes")]
    InvalidWaitTime {
        /// Offending ride.
        ride_id: u64,
        /// Reported wait.
        wait_time: i64,
    },
    /// The rides did not form a valid snapshot.
    #[error("queue-times document did not form a valid snapshot")]
    Snapshot(#[from] SnapshotError),
}

impl From<QueueTimesError> for WaitTimeError {
    fn from(err: QueueTimesError) -> Self {
        match err {
            QueueTimesError::Snapshot(inner) => Self::InvalidSnapshot(inner),
            QueueTimesError::Decode(inner) => Self::Parse {
                message: inner.to_string(),
            },
            other @ QueueTimesError::InvalidWaitTime { .. } => Self::Parse {
                message: other.to_string(),
            },
        }
    }
}

/// One ride as reported by Queue-Times.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueueTimesRide {
    /// Ride identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Whether the ride is operating.
    #[serde(default)]
    pub is_open: bool,
    /// Posted wait in minutes. Missing values are treated as no queue.
    #[serde(default)]
    pub wait_time: Option<i64>,
    /// Timestamp of the last update, as published.
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl QueueTimesRide {
    fn status(&self) -> Result<RideStatus, QueueTimesError> {
        if !self.is_open {
            return Ok(RideStatus::Closed);
        }
        let reported = self.wait_time.unwrap_or_else(|| {
            log::warn!("ride {} is open without a wait time; assuming no queue", self.id);
            0
        });
        let wait_minutes =
            u16::try_from(reported).map_err(|_| QueueTimesError::InvalidWaitTime {
                ride_id: self.id,
                wait_time: reported,
            })?;
        Ok(RideStatus::Open { wait_minutes })
    }

    fn into_wait(self, land: Option<&str>) -> Result<RideWait, QueueTimesError> {
        let status = self.status()?;
        Ok(RideWait {
            id: self.id,
            name: self.name,
            land: land.map(str::to_owned),
            status,
        })
    }
}

/// A themed area grouping rides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueueTimesLand {
    /// Land identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Rides in this land.
    #[serde(default)]
    pub rides: Vec<QueueTimesRide>,
}

/// A decoded `queue_times.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct QueueTimesResponse {
    /// Rides grouped by land.
    #[serde(default)]
    pub lands: Vec<QueueTimesLand>,
    /// Rides not assigned to a land.
    #[serde(default)]
    pub rides: Vec<QueueTimesRide>,
}

impl QueueTimesResponse {
    /// Flatten the document into a snapshot.
    ///
    /// Land rides come first in document order, followed by top-level rides.
    /// A closed ride is [`RideStatus::Closed`] whatever wait it reports.
    ///
    /// # Errors
    /// Returns [`QueueTimesError::InvalidWaitTime`] for an open ride with a
    /// negative or oversized wait, and [`QueueTimesError::Snapshot`] when a
    /// ride appears twice.
    pub fn into_snapshot(self) -> Result<WaitTimeSnapshot, QueueTimesError> {
        let mut rides = Vec::with_capacity(
            self.rides.len() + self.lands.iter().map(|land| land.rides.len()).sum::<usize>(),
        );
        for land in self.lands {
            for ride in land.rides {
                rides.push(ride.into_wait(Some(&land.name))?);
            }
        }
        for ride in self.rides {
            rides.push(ride.into_wait(None)?);
        }
        Ok(WaitTimeSnapshot::new(rides)?)
    }
}

/// Decode a `queue_times.json` document into a snapshot.
///
/// # Errors
/// Returns [`QueueTimesError`] when the document is malformed or describes
/// an invalid snapshot.
///
/// # Examples
/// ```
/// use thrillcompass_data::parse_queue_times;
///
/// let json = r#"{
///     "lands": [{ "id": 1, "name": "Marvel Super Hero Island", "rides": [
///         { "id": 5, "name": "The Incredible Hulk Coaster", "is_open": true, "wait_time": 35 }
///     ]}],
///     "rides": []
/// }"#;
/// let snapshot = parse_queue_times(json.as_bytes())?;
/// assert_eq!(snapshot.open_count(), 1);
/// # Ok::<(), thrillcompass_data::QueueTimesError>(())
/// ```
pub fn parse_queue_times<R: Read>(reader: R) -> Result<WaitTimeSnapshot, QueueTimesError> {
    let response: QueueTimesResponse =
        serde_json::from_reader(reader).map_err(QueueTimesError::Decode)?;
    response.into_snapshot()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const ISLANDS: &str = r#"{
        "lands": [
            { "id": 10, "name": "Jurassic Park", "rides": [
                { "id": 1, "name": "VelociCoaster", "is_open": true, "wait_time": 75,
                  "last_updated": "2024-06-01T15:04:05.000Z" },
                { "id": 2, "name": "River Adventure", "is_open": false, "wait_time": 0 }
            ]},
            { "id": 11, "name": "Seuss Landing", "rides": [
                { "id": 3, "name": "Cat in the Hat", "is_open": true, "wait_time": 10 }
            ]}
        ],
        "rides": [
            { "id": 4, "name": "Single Rider", "is_open": true, "wait_time": null }
        ]
    }"#;

    #[rstest]
    fn flattens_lands_then_top_level() {
        let snapshot = parse_queue_times(ISLANDS.as_bytes()).expect("valid document");
        let ids: Vec<u64> = snapshot.rides().iter().map(|ride| ride.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(
            snapshot.get(1).and_then(|ride| ride.land.as_deref()),
            Some("Jurassic Park")
        );
        assert_eq!(snapshot.get(4).and_then(|ride| ride.land.as_deref()), None);
    }

    #[rstest]
    fn closed_ignores_reported_wait() {
        let json = r#"{"rides":[{"id":1,"name":"a","is_open":false,"wait_time":45}]}"#;
        let snapshot = parse_queue_times(json.as_bytes()).expect("valid document");
        assert_eq!(snapshot.get(1).map(|ride| ride.status), Some(RideStatus::Closed));
    }

    #[rstest]
    fn missing_wait_is_no_queue() {
        let snapshot = parse_queue_times(ISLANDS.as_bytes()).expect("valid document");
        assert_eq!(
            snapshot.get(4).map(|ride| ride.status),
            Some(RideStatus::Open { wait_minutes: 0 })
        );
    }

    #[rstest]
    #[case(-5)]
    #[case(70_000)]
    fn rejects_unrepresentable_open_wait(#[case] wait: i64) {
        let json = format!(r#"{{"rides":[{{"id":9,"name":"a","is_open":true,"wait_time":{wait}}}]}}"#);
        let err = parse_queue_times(json.as_bytes()).expect_err("invalid wait");
        assert!(matches!(
            err,
            QueueTimesError::InvalidWaitTime { ride_id: 9, wait_time } if wait_time == wait
        ));
    }

    #[rstest]
    fn rejects_duplicate_ride_ids() {
        let json = r#"{"lands":[{"id":1,"name":"x","rides":[{"id":7,"name":"a","is_open":true,"wait_time":5}]}],
                       "rides":[{"id":7,"name":"a","is_open":true,"wait_time":5}]}"#;
        let err = parse_queue_times(json.as_bytes()).expect_err("duplicate ride");
        assert!(matches!(
            WaitTimeError::from(err),
            WaitTimeError::InvalidSnapshot(SnapshotError::DuplicateRide { ride_id: 7 })
        ));
    }

    #[rstest]
    fn empty_document_is_empty_snapshot() {
        let snapshot = parse_queue_times(&b"{}"[..]).expect("valid document");
        assert!(snapshot.is_empty());
    }

    #[rstest]
    fn malformed_json_maps_to_parse_error() {
        let err = parse_queue_times(&b"{"[..]).expect_err("malformed");
        assert!(matches!(WaitTimeError::from(err), WaitTimeError::Parse { .. }));
    }
}
