//! Distance and duration matrices.
//!
//! Provides the great-circle calculator, a dense matrix type, the remote
//! matrix service seam with its HTTP client, and the builder that falls back
//! from the service to haversine distances.

mod builder;
#[cfg(test)]
pub(crate) mod fake;
mod haversine;
mod mapbox;
mod matrix;
mod service;

pub use builder::MatrixBuilder;
pub use haversine::{haversine_distance, EARTH_RADIUS_METERS};
pub use mapbox::{parse_matrix_response, MapboxMatrixClient};
pub use matrix::{DistanceMatrix, TravelMatrices};
pub use service::{MatrixService, OfflineMatrixService};
