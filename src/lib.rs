//! # trip-route
//!
//! Visiting-order optimization for a day of travel itinerary: given the places
//! to visit, find a short order to visit them in.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, Coordinate, TravelProfile, OptimizationResult)
//! - [`distance`] — Haversine distance, travel matrices, remote matrix service with fallback
//! - [`constructive`] — Constructive heuristics (Nearest Neighbor)
//! - [`local_search`] — Local search operators (2-opt)
//! - [`optimizer`] — End-to-end ordering of an itinerary day
//! - [`config`] — Matrix service and optimizer settings
//! - [`error`] — Error type of the remote matrix path

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod local_search;
pub mod models;
pub mod optimizer;

pub use optimizer::{optimize_places_order, RouteOptimizer};
