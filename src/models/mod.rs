//! Domain model types for itinerary route ordering.
//!
//! Provides places to visit (with optional coordinates and pass-through
//! attributes), the internal coordinate representation, travel profiles,
//! and the optimization result.

mod location;
mod profile;
mod result;

pub use location::{Coordinate, Location};
pub use profile::TravelProfile;
pub use result::{MatrixOrigin, OptimizationResult};
