//! In-memory matrix service for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{RouteError, RouteResult};
use crate::models::{Coordinate, MatrixOrigin, TravelProfile};

use super::{parse_matrix_response, DistanceMatrix, MatrixService, TravelMatrices};

pub(crate) enum Reply {
    /// Haversine distances times a detour factor, tagged as coming from the service.
    Scaled(f64),
    /// A non-success HTTP status.
    Status(u16),
    /// A raw response body, run through the real payload parser.
    Body(String),
}

pub(crate) struct FakeService {
    reply: Reply,
    calls: AtomicUsize,
}

impl FakeService {
    pub(crate) fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl MatrixService for FakeService {
    async fn fetch_matrices(
        &self,
        coordinates: &[Coordinate],
        profile: TravelProfile,
    ) -> RouteResult<TravelMatrices> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Reply::Scaled(factor) => {
                let distances = DistanceMatrix::from_coordinates(coordinates).scaled(*factor);
                let durations = distances.scaled(1.0 / profile.average_speed_mps());
                Ok(TravelMatrices {
                    distances,
                    durations,
                    origin: MatrixOrigin::Service,
                })
            }
            Reply::Status(code) => Err(RouteError::Status(*code)),
            Reply::Body(body) => parse_matrix_response(body, coordinates.len(), profile),
        }
    }
}
