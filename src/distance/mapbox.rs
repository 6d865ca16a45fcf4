//! HTTP client for a Mapbox-style directions matrix endpoint.
//!
//! `GET {base}/directions-matrix/v1/mapbox/{profile}/{lng,lat;lng,lat;...}`
//! with `annotations=distance,duration`. A successful payload carries
//! `"code": "Ok"` and n×n `distances`/`durations` arrays; unroutable pairs
//! come back as `null`.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::MatrixServiceConfig;
use crate::error::{RouteError, RouteResult};
use crate::models::{Coordinate, MatrixOrigin, TravelProfile};

use super::{DistanceMatrix, MatrixService, TravelMatrices};

#[derive(Debug, Deserialize)]
struct MatrixResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    distances: Option<Vec<Vec<Option<f64>>>>,
    #[serde(default)]
    durations: Option<Vec<Vec<Option<f64>>>>,
}

/// Matrix service backed by a Mapbox-compatible HTTP API.
#[derive(Debug, Clone)]
pub struct MapboxMatrixClient {
    client: Client,
    config: MatrixServiceConfig,
}

impl MapboxMatrixClient {
    /// Creates a client with the configured timeout.
    pub fn new(config: MatrixServiceConfig) -> RouteResult<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &MatrixServiceConfig {
        &self.config
    }

    /// Request URL without query parameters.
    pub fn matrix_url(&self, coordinates: &[Coordinate], profile: TravelProfile) -> String {
        let coords = coordinates
            .iter()
            .map(|c| format!("{},{}", c.lng(), c.lat()))
            .collect::<Vec<_>>()
            .join(";");
        format!(
            "{}/directions-matrix/v1/mapbox/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            profile,
            coords
        )
    }
}

impl MatrixService for MapboxMatrixClient {
    async fn fetch_matrices(
        &self,
        coordinates: &[Coordinate],
        profile: TravelProfile,
    ) -> RouteResult<TravelMatrices> {
        let token = self
            .config
            .access_token
            .as_deref()
            .ok_or(RouteError::MissingToken)?;
        let url = self.matrix_url(coordinates, profile);
        debug!(size = coordinates.len(), %profile, "requesting travel matrix");

        let response = self
            .client
            .get(&url)
            .query(&[("annotations", "distance,duration"), ("access_token", token)])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RouteError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        parse_matrix_response(&body, coordinates.len(), profile)
    }
}

/// Parses a matrix payload for `size` coordinates.
///
/// Missing durations are estimated from distances at the profile's average
/// speed.
pub fn parse_matrix_response(
    body: &str,
    size: usize,
    profile: TravelProfile,
) -> RouteResult<TravelMatrices> {
    let response: MatrixResponse =
        serde_json::from_str(body).map_err(|e| RouteError::Malformed(e.to_string()))?;
    if response.code != "Ok" {
        if let Some(message) = &response.message {
            debug!(code = %response.code, %message, "matrix service refused request");
        }
        return Err(RouteError::Service(response.code));
    }

    let distances = response
        .distances
        .ok_or_else(|| RouteError::Malformed("missing distances".into()))?;
    let distances = to_matrix(&distances, size, "distances")?;
    let durations = match response.durations {
        Some(rows) => to_matrix(&rows, size, "durations")?,
        None => distances.scaled(1.0 / profile.average_speed_mps()),
    };

    Ok(TravelMatrices {
        distances,
        durations,
        origin: MatrixOrigin::Service,
    })
}

fn to_matrix(rows: &[Vec<Option<f64>>], size: usize, field: &str) -> RouteResult<DistanceMatrix> {
    let rows = rows
        .iter()
        .map(|row| row.iter().copied().collect::<Option<Vec<f64>>>())
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| RouteError::Malformed(format!("null entry in {field}")))?;
    DistanceMatrix::from_rows(size, &rows)
        .ok_or_else(|| RouteError::Malformed(format!("{field} is not a valid {size}x{size} matrix")))
}
