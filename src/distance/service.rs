//! Remote matrix service seam.

use std::future::Future;

use crate::error::{RouteError, RouteResult};
use crate::models::{Coordinate, TravelProfile};

use super::TravelMatrices;

/// A source of road-network distance and duration matrices.
///
/// One call covers all coordinates. Implementations report any failure as an
/// error; the [`MatrixBuilder`](super::MatrixBuilder) decides what to do
/// about it.
pub trait MatrixService {
    /// Fetches n×n distance (meters) and duration (seconds) matrices for
    /// `coordinates` under `profile`.
    fn fetch_matrices(
        &self,
        coordinates: &[Coordinate],
        profile: TravelProfile,
    ) -> impl Future<Output = RouteResult<TravelMatrices>> + Send;
}

/// A service that is never reachable.
///
/// Every request fails with [`RouteError::MissingToken`], so a
/// [`MatrixBuilder`](super::MatrixBuilder) over it always uses haversine
/// distances.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineMatrixService;

impl MatrixService for OfflineMatrixService {
    async fn fetch_matrices(
        &self,
        _coordinates: &[Coordinate],
        _profile: TravelProfile,
    ) -> RouteResult<TravelMatrices> {
        Err(RouteError::MissingToken)
    }
}
