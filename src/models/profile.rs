//! Travel profile.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How the traveller moves between places.
///
/// Selects the routing service profile and the speed assumed when durations
/// have to be estimated from straight-line distance.
///
/// # Examples
///
/// ```
/// use trip_route::models::TravelProfile;
///
/// assert_eq!(TravelProfile::Walking.as_str(), "walking");
/// assert_eq!(TravelProfile::default(), TravelProfile::Driving);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelProfile {
    #[default]
    Driving,
    Walking,
    Cycling,
}

impl TravelProfile {
    /// Profile name as used in routing service URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelProfile::Driving => "driving",
            TravelProfile::Walking => "walking",
            TravelProfile::Cycling => "cycling",
        }
    }

    /// Average speed in meters per second used for estimated durations.
    pub fn average_speed_mps(&self) -> f64 {
        match self {
            TravelProfile::Driving => 13.89, // ~50 km/h
            TravelProfile::Cycling => 4.17,  // ~15 km/h
            TravelProfile::Walking => 1.39,  // ~5 km/h
        }
    }
}

impl fmt::Display for TravelProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
