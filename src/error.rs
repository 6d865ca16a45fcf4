//! Crate error type.
//!
//! Errors only arise on the remote matrix path. The matrix builder turns every
//! one of them into the haversine fallback, so they never reach callers of the
//! optimizer.

use thiserror::Error;

/// Errors produced while fetching a travel matrix from the routing service.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Carries no request URL, which would include the access token.
    #[error("HTTP error calling matrix service: {0}")]
    Http(#[source] reqwest::Error),

    #[error("matrix service returned HTTP status {0}")]
    Status(u16),

    #[error("matrix service returned code {0:?}")]
    Service(String),

    #[error("malformed matrix payload: {0}")]
    Malformed(String),

    #[error("{size} coordinates exceed the matrix batch limit of {max}")]
    BatchTooLarge { size: usize, max: usize },

    #[error("no access token configured for the matrix service")]
    MissingToken,
}

impl From<reqwest::Error> for RouteError {
    fn from(err: reqwest::Error) -> Self {
        RouteError::Http(err.without_url())
    }
}

/// Shorthand result type for the matrix path.
pub type RouteResult<T> = Result<T, RouteError>;
