//! Visiting-order optimization for one itinerary day.
//!
//! Geolocated places are split off, a travel matrix is built over them, an
//! initial path is constructed by nearest neighbor and improved by 2-opt.
//! Places without coordinates are appended unchanged after the optimized ones.

use tracing::{debug, warn};

use crate::config::OptimizerConfig;
use crate::constructive::nearest_neighbor;
use crate::distance::{MapboxMatrixClient, MatrixBuilder, MatrixService, OfflineMatrixService};
use crate::error::RouteResult;
use crate::local_search::{two_opt_improve, TwoOptClosure};
use crate::models::{Coordinate, Location, OptimizationResult, TravelProfile};

/// Orders places to keep total travel short.
///
/// # Examples
///
/// ```
/// use trip_route::models::{Location, TravelProfile};
/// use trip_route::optimizer::RouteOptimizer;
///
/// let places = vec![
///     Location::new("a", "Start").with_coordinates(0.0, 0.0),
///     Location::new("far", "Far").with_coordinates(0.0, 0.3),
///     Location::new("tbd", "Somewhere"),
///     Location::new("near", "Near").with_coordinates(0.0, 0.1),
/// ];
/// let optimizer = RouteOptimizer::offline(Default::default());
/// let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// let result = rt
///     .block_on(optimizer.optimize(&places, TravelProfile::Walking))
///     .unwrap();
/// assert_eq!(result.ids(), vec!["a", "near", "far", "tbd"]);
/// ```
#[derive(Debug, Clone)]
pub struct RouteOptimizer<S> {
    builder: MatrixBuilder<S>,
    closure: TwoOptClosure,
}

impl RouteOptimizer<MapboxMatrixClient> {
    /// Creates an optimizer backed by the configured HTTP matrix service.
    pub fn from_config(config: OptimizerConfig) -> RouteResult<Self> {
        let max_batch_size = config.matrix.max_batch_size;
        let client = MapboxMatrixClient::new(config.matrix)?;
        Ok(Self::new(client, max_batch_size, config.two_opt))
    }

    /// Creates an optimizer from environment variables.
    ///
    /// See [`MatrixServiceConfig::from_env`](crate::config::MatrixServiceConfig::from_env).
    pub fn from_env() -> RouteResult<Self> {
        Self::from_config(OptimizerConfig {
            matrix: crate::config::MatrixServiceConfig::from_env(),
            ..OptimizerConfig::default()
        })
    }
}

impl RouteOptimizer<OfflineMatrixService> {
    /// Creates an optimizer that only uses haversine distances.
    pub fn offline(closure: TwoOptClosure) -> Self {
        Self::new(OfflineMatrixService, 0, closure)
    }
}

impl<S: MatrixService> RouteOptimizer<S> {
    /// Creates an optimizer over any matrix service.
    pub fn new(service: S, max_batch_size: usize, closure: TwoOptClosure) -> Self {
        Self {
            builder: MatrixBuilder::new(service, max_batch_size),
            closure,
        }
    }

    /// The matrix builder in use.
    pub fn builder(&self) -> &MatrixBuilder<S> {
        &self.builder
    }

    /// Reorders `locations` for travel by `profile`.
    ///
    /// Returns `None` when fewer than two locations have coordinates. The
    /// input is left untouched; the result holds clones.
    pub async fn optimize(
        &self,
        locations: &[Location],
        profile: TravelProfile,
    ) -> Option<OptimizationResult> {
        let (located, unlocated): (Vec<(&Location, Coordinate)>, Vec<&Location>) =
            partition_by_coordinates(locations);
        if located.len() < 2 {
            debug!(located = located.len(), "not enough geolocated places to optimize");
            return None;
        }

        let coordinates: Vec<Coordinate> = located.iter().map(|&(_, c)| c).collect();
        let matrices = self.builder.build(&coordinates, profile).await?;
        if matrices.size() != located.len() {
            warn!(
                expected = located.len(),
                got = matrices.size(),
                "travel matrix does not match places"
            );
            return None;
        }

        let initial = nearest_neighbor(&matrices.distances, 0);
        let tour = two_opt_improve(&initial, &matrices.distances, self.closure);
        if tour.len() != located.len() {
            warn!(
                expected = located.len(),
                got = tour.len(),
                "tour does not cover every place"
            );
            return None;
        }

        let total_distance_meters = matrices.distances.path_length(&tour);
        let total_duration_seconds = matrices.durations.path_length(&tour);
        debug!(
            places = tour.len(),
            skipped = unlocated.len(),
            initial = matrices.distances.path_length(&initial),
            total_distance_meters,
            origin = ?matrices.origin,
            "optimized visiting order"
        );

        let optimized_locations = tour
            .iter()
            .map(|&i| located[i].0.clone())
            .chain(unlocated.into_iter().cloned())
            .collect();

        Some(OptimizationResult {
            optimized_locations,
            total_distance_meters,
            total_duration_seconds,
            matrix_origin: matrices.origin,
        })
    }
}

/// Reorders `locations` using the matrix service configured in the environment.
///
/// Falls back to haversine-only optimization if the HTTP client cannot be
/// created. Returns `None` when fewer than two locations have coordinates.
pub async fn optimize_places_order(
    locations: &[Location],
    profile: TravelProfile,
) -> Option<OptimizationResult> {
    match RouteOptimizer::from_env() {
        Ok(optimizer) => optimizer.optimize(locations, profile).await,
        Err(err) => {
            warn!(%err, "matrix client unavailable, using haversine distances");
            RouteOptimizer::offline(TwoOptClosure::default())
                .optimize(locations, profile)
                .await
        }
    }
}

fn partition_by_coordinates(
    locations: &[Location],
) -> (Vec<(&Location, Coordinate)>, Vec<&Location>) {
    let mut located = Vec::new();
    let mut unlocated = Vec::new();
    for location in locations {
        match location.coordinate() {
            Some(c) => located.push((location, c)),
            None => unlocated.push(location),
        }
    }
    (located, unlocated)
}
