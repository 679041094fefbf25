//! Queue-Times park directory (`parks.json`).

use serde::{Deserialize, Serialize};
use thrillcompass_core::WaitTimeError;

/// A single park.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Park {
    /// Park identifier used in `queue_times.json` URLs.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Country the park is in.
    #[serde(default)]
    pub country: String,
    /// Continent the park is on.
    #[serde(default)]
    pub continent: String,
    /// Latitude as published (a decimal string).
    #[serde(default)]
    pub latitude: String,
    /// Longitude as published (a decimal string).
    #[serde(default)]
    pub longitude: String,
    /// IANA time zone name.
    #[serde(default)]
    pub timezone: String,
}

/// Parks run by one operator.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ParkGroup {
    /// Operator identifier.
    pub id: u64,
    /// Operator name.
    pub name: String,
    /// Parks in this group.
    #[serde(default)]
    pub parks: Vec<Park>,
}

/// List the parks a wait-time feed covers.
pub trait ParkDirectory: Send + Sync {
    /// Return every park grouped by operator.
    ///
    /// # Errors
    /// Returns [`WaitTimeError`] when the directory cannot be fetched or
    /// decoded.
    fn list_parks(&self) -> Result<Vec<ParkGroup>, WaitTimeError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn decodes_directory() {
        let json = r#"[{
            "id": 11,
            "name": "Universal Parks & Resorts",
            "parks": [{
                "id": 64,
                "name": "Islands of Adventure At Universal Orlando",
                "country": "United States",
                "continent": "North America",
                "latitude": "28.4722",
                "longitude": "-81.4678",
                "timezone": "America/New_York"
            }]
        }]"#;
        let groups: Vec<ParkGroup> = serde_json::from_str(json).expect("decode directory");
        let park = groups
            .first()
            .and_then(|group| group.parks.first())
            .expect("one park");
        assert_eq!(park.id, 64);
        assert_eq!(park.timezone, "America/New_York");
    }
}
