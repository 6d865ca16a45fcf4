//! Optimization result type.

use serde::{Deserialize, Serialize};

use super::Location;

/// Where the travel matrices used for an optimization came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatrixOrigin {
    /// The remote routing service.
    Service,
    /// Pairwise great-circle distances.
    Haversine,
}

/// The reordered itinerary day.
///
/// Geolocated places come first in optimized order, followed by places without
/// coordinates in their original relative order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub optimized_locations: Vec<Location>,
    /// Open-path sum of distances along the geolocated sub-tour, meters.
    pub total_distance_meters: f64,
    /// Open-path sum of durations along the same sub-tour, seconds.
    pub total_duration_seconds: f64,
    pub matrix_origin: MatrixOrigin,
}

impl OptimizationResult {
    /// Location IDs in result order.
    pub fn ids(&self) -> Vec<&str> {
        self.optimized_locations.iter().map(|l| l.id.as_str()).collect()
    }
}
