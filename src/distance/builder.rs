//! Travel matrix construction with haversine fallback.
//!
//! One remote attempt, then great-circle distances. The fallback never fails,
//! so any two or more coordinates always produce a usable matrix.

use tracing::{debug, warn};

use crate::error::{RouteError, RouteResult};
use crate::models::{Coordinate, TravelProfile};

use super::{DistanceMatrix, MatrixService, TravelMatrices};

/// Builds travel matrices from a [`MatrixService`], falling back to haversine.
///
/// The service is skipped when fewer than two coordinates are given (nothing
/// to build) or when more than `max_batch_size` are given. A failed request,
/// a non-`"Ok"` code or a malformed payload all fall back silently.
///
/// # Examples
///
/// ```
/// use trip_route::config::MatrixServiceConfig;
/// use trip_route::distance::{MapboxMatrixClient, MatrixBuilder};
/// use trip_route::models::{Coordinate, MatrixOrigin, TravelProfile};
///
/// // No access token: the remote path is skipped.
/// let client = MapboxMatrixClient::new(MatrixServiceConfig::default()).unwrap();
/// let builder = MatrixBuilder::new(client, 25);
/// let coords = [Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0)];
/// let m = builder.haversine(&coords, TravelProfile::Walking);
/// assert_eq!(m.origin, MatrixOrigin::Haversine);
/// ```
#[derive(Debug, Clone)]
pub struct MatrixBuilder<S> {
    service: S,
    max_batch_size: usize,
}

impl<S: MatrixService> MatrixBuilder<S> {
    /// Creates a builder that sends at most `max_batch_size` coordinates per request.
    pub fn new(service: S, max_batch_size: usize) -> Self {
        Self {
            service,
            max_batch_size,
        }
    }

    /// The per-request coordinate cap.
    pub fn max_batch_size(&self) -> usize {
        self.max_batch_size
    }

    /// Builds distance and duration matrices for `coordinates`.
    ///
    /// Returns `None` for fewer than two coordinates.
    pub async fn build(
        &self,
        coordinates: &[Coordinate],
        profile: TravelProfile,
    ) -> Option<TravelMatrices> {
        if coordinates.len() < 2 {
            return None;
        }
        match self.fetch_remote(coordinates, profile).await {
            Ok(matrices) => Some(matrices),
            Err(err) => {
                match &err {
                    RouteError::BatchTooLarge { .. } | RouteError::MissingToken => {
                        debug!(%err, "skipping matrix service, using haversine distances")
                    }
                    _ => warn!(%err, "matrix service failed, using haversine distances"),
                }
                Some(self.haversine(coordinates, profile))
            }
        }
    }

    /// Builds only the distance matrix (meters).
    pub async fn build_distances(
        &self,
        coordinates: &[Coordinate],
        profile: TravelProfile,
    ) -> Option<DistanceMatrix> {
        self.build(coordinates, profile).await.map(|m| m.distances)
    }

    /// The fallback matrices: great-circle distances, durations at the profile's speed.
    pub fn haversine(&self, coordinates: &[Coordinate], profile: TravelProfile) -> TravelMatrices {
        TravelMatrices::haversine(coordinates, profile.average_speed_mps())
    }

    async fn fetch_remote(
        &self,
        coordinates: &[Coordinate],
        profile: TravelProfile,
    ) -> RouteResult<TravelMatrices> {
        let size = coordinates.len();
        if size > self.max_batch_size {
            return Err(RouteError::BatchTooLarge {
                size,
                max: self.max_batch_size,
            });
        }
        let matrices = self.service.fetch_matrices(coordinates, profile).await?;
        if matrices.size() != size || matrices.durations.size() != size {
            return Err(RouteError::Malformed(format!(
                "expected {size}x{size} matrices, got {} and {}",
                matrices.size(),
                matrices.durations.size()
            )));
        }
        Ok(matrices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatrixServiceConfig;
    use crate::distance::fake::{FakeService, Reply};
    use crate::distance::MapboxMatrixClient;
    use crate::models::MatrixOrigin;

    fn grid(n: usize) -> Vec<Coordinate> {
        (0..n)
            .map(|i| Coordinate::new(2.30 + (i % 6) as f64 * 0.01, 48.85 + (i / 6) as f64 * 0.01))
            .collect()
    }

    #[tokio::test]
    async fn test_fewer_than_two_is_none() {
        let builder = MatrixBuilder::new(FakeService::new(Reply::Scaled(1.3)), 25);
        assert!(builder.build(&[], TravelProfile::Driving).await.is_none());
        assert!(builder.build(&grid(1), TravelProfile::Driving).await.is_none());
        assert_eq!(builder.service.calls(), 0);
    }

    #[tokio::test]
    async fn test_service_matrix_used() {
        let builder = MatrixBuilder::new(FakeService::new(Reply::Scaled(1.3)), 25);
        let coords = grid(5);
        let m = builder.build(&coords, TravelProfile::Driving).await.expect("matrix");
        assert_eq!(m.origin, MatrixOrigin::Service);
        assert_eq!(m.size(), 5);
        for i in 0..5 {
            assert_eq!(m.distances.get(i, i), 0.0);
        }
        let h = DistanceMatrix::from_coordinates(&coords);
        assert!((m.distances.get(0, 4) - 1.3 * h.get(0, 4)).abs() < 1e-6);
        assert_eq!(builder.service.calls(), 1);
    }

    #[tokio::test]
    async fn test_http_failure_falls_back_to_haversine() {
        let builder = MatrixBuilder::new(FakeService::new(Reply::Status(503)), 25);
        let coords = grid(6);
        let m = builder.build(&coords, TravelProfile::Driving).await.expect("matrix");
        assert_eq!(m.origin, MatrixOrigin::Haversine);
        assert_eq!(m.distances, DistanceMatrix::from_coordinates(&coords));
    }

    #[tokio::test]
    async fn test_non_ok_code_falls_back_to_haversine() {
        let body = r#"{"code": "NoRoute"}"#.to_string();
        let builder = MatrixBuilder::new(FakeService::new(Reply::Body(body)), 25);
        let coords = grid(4);
        let m = builder.build_distances(&coords, TravelProfile::Cycling).await;
        assert_eq!(m, Some(DistanceMatrix::from_coordinates(&coords)));
    }

    #[tokio::test]
    async fn test_wrong_size_falls_back_to_haversine() {
        let body = r#"{"code": "Ok", "distances": [[0, 1], [1, 0]]}"#.to_string();
        let builder = MatrixBuilder::new(FakeService::new(Reply::Body(body)), 25);
        let coords = grid(3);
        let m = builder.build(&coords, TravelProfile::Walking).await.expect("matrix");
        assert_eq!(m.origin, MatrixOrigin::Haversine);
        assert_eq!(m.distances, DistanceMatrix::from_coordinates(&coords));
    }

    #[tokio::test]
    async fn test_nonzero_diagonal_falls_back_to_haversine() {
        let body = r#"{"code": "Ok", "distances": [[12, 900], [880, 0]]}"#.to_string();
        let builder = MatrixBuilder::new(FakeService::new(Reply::Body(body)), 25);
        let coords = grid(2);
        let m = builder.build(&coords, TravelProfile::Driving).await.expect("matrix");
        assert_eq!(m.origin, MatrixOrigin::Haversine);
        assert_eq!(m.distances.get(0, 0), 0.0);
    }

    #[tokio::test]
    async fn test_batch_too_large_skips_service() {
        let builder = MatrixBuilder::new(FakeService::new(Reply::Scaled(1.3)), 25);
        let coords = grid(30);
        let m = builder.build(&coords, TravelProfile::Driving).await.expect("matrix");
        assert_eq!(m.origin, MatrixOrigin::Haversine);
        assert_eq!(m.size(), 30);
        assert_eq!(builder.service.calls(), 0);
    }

    #[tokio::test]
    async fn test_batch_cap_is_configurable() {
        let builder = MatrixBuilder::new(FakeService::new(Reply::Scaled(1.3)), 40);
        let m = builder.build(&grid(30), TravelProfile::Driving).await.expect("matrix");
        assert_eq!(m.origin, MatrixOrigin::Service);
        assert_eq!(builder.max_batch_size(), 40);
    }

    #[tokio::test]
    async fn test_unreachable_service_falls_back() {
        let config = MatrixServiceConfig {
            base_url: "http://127.0.0.1:9".into(),
            access_token: Some("pk.test".into()),
            max_batch_size: 25,
            timeout_secs: 2,
        };
        let builder = MatrixBuilder::new(MapboxMatrixClient::new(config).expect("client"), 25);
        let coords = grid(3);
        let m = builder.build(&coords, TravelProfile::Driving).await.expect("matrix");
        assert_eq!(m.origin, MatrixOrigin::Haversine);
        assert_eq!(m.distances, DistanceMatrix::from_coordinates(&coords));
    }
}
