//! Great-circle distance.

use crate::models::Coordinate;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance in meters between two coordinates (haversine formula).
///
/// # Examples
///
/// ```
/// use trip_route::models::Coordinate;
/// use trip_route::distance::haversine_distance;
///
/// let paris = Coordinate::new(2.3522, 48.8566);
/// let london = Coordinate::new(-0.1276, 51.5072);
/// let d = haversine_distance(paris, london);
/// assert!((d - 343_500.0).abs() < 2_000.0);
/// assert_eq!(haversine_distance(paris, paris), 0.0);
/// ```
pub fn haversine_distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat().to_radians();
    let lat2 = b.lat().to_radians();
    // abs() keeps d(a, b) and d(b, a) bit-identical.
    let dlat = (b.lat() - a.lat()).abs().to_radians();
    let dlng = (b.lng() - a.lng()).abs().to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    // Rounding can push h just past 1 for near-antipodal points.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_METERS * c
}
