//! Location and coordinate types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A geographic point as `(longitude, latitude)` in decimal degrees.
///
/// Only used as the optimizer's internal geometry; derived from a
/// [`Location`] and discarded after the call.
///
/// # Examples
///
/// ```
/// use trip_route::models::Coordinate;
///
/// let c = Coordinate::new(2.2945, 48.8584);
/// assert_eq!(c.lng(), 2.2945);
/// assert_eq!(c.lat(), 48.8584);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lng: f64,
    lat: f64,
}

impl Coordinate {
    /// Creates a coordinate from longitude and latitude.
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }
}

/// One visitable place of an itinerary day.
///
/// Coordinates are optional: a place may not have been geocoded yet. All the
/// other attributes are carried through optimization untouched, including any
/// unknown fields present when deserializing. Unknown fields serialize back as
/// the same JSON values; typed fields are normalized (`cost` as a float, `null`
/// optionals omitted).
///
/// # Examples
///
/// ```
/// use trip_route::models::Location;
///
/// let louvre = Location::new("louvre", "Louvre").with_coordinates(48.8606, 2.3376);
/// assert!(louvre.coordinate().is_some());
///
/// let tbd = Location::new("dinner", "Dinner (TBD)");
/// assert!(tbd.coordinate().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<String>,
    /// Any further attributes, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Location {
    /// Creates a location with no coordinates and no attributes.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            latitude: None,
            longitude: None,
            category: None,
            cost: None,
            time_of_day: None,
            extra: BTreeMap::new(),
        }
    }

    /// Sets latitude and longitude, in that order.
    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Sets the category tag.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the expected cost.
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Sets the time-of-day tag (e.g. `"morning"`).
    pub fn with_time_of_day(mut self, tag: impl Into<String>) -> Self {
        self.time_of_day = Some(tag.into());
        self
    }

    /// Returns the coordinate if both latitude and longitude are present and finite.
    ///
    /// A location with only one of the two is treated as having none.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => {
                Some(Coordinate::new(lng, lat))
            }
            _ => None,
        }
    }
}
