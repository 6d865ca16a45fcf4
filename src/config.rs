//! Optimizer configuration.
//!
//! Values come from code, from any serde source, or from environment
//! variables via [`MatrixServiceConfig::from_env`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::local_search::TwoOptClosure;

/// Coordinates per request accepted by the reference matrix provider.
pub const DEFAULT_MAX_BATCH_SIZE: usize = 25;

/// Default matrix service host.
pub const DEFAULT_BASE_URL: &str = "https://api.mapbox.com";

/// Default HTTP timeout for a matrix request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the remote distance/duration matrix service.
///
/// # Examples
///
/// ```
/// use trip_route::config::MatrixServiceConfig;
///
/// let config = MatrixServiceConfig::default();
/// assert_eq!(config.max_batch_size, 25);
/// assert!(config.access_token.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixServiceConfig {
    pub base_url: String,
    /// Without a token the remote path is skipped entirely.
    pub access_token: Option<String>,
    /// Largest coordinate count sent in one request.
    pub max_batch_size: usize,
    pub timeout_secs: u64,
}

impl Default for MatrixServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: None,
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl MatrixServiceConfig {
    /// Reads `MAPBOX_ACCESS_TOKEN`, `ROUTE_MATRIX_BASE_URL`,
    /// `ROUTE_MATRIX_MAX_BATCH` and `ROUTE_MATRIX_TIMEOUT_SECS` over the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(token) = lookup("MAPBOX_ACCESS_TOKEN").filter(|t| !t.trim().is_empty()) {
            config.access_token = Some(token);
        }
        if let Some(url) = lookup("ROUTE_MATRIX_BASE_URL").filter(|u| !u.trim().is_empty()) {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(n) = lookup("ROUTE_MATRIX_MAX_BATCH").and_then(|v| v.trim().parse().ok()) {
            config.max_batch_size = n;
        }
        if let Some(s) = lookup("ROUTE_MATRIX_TIMEOUT_SECS").and_then(|v| v.trim().parse().ok()) {
            config.timeout_secs = s;
        }
        config
    }

    /// Sets the access token.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Sets the service host.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the per-request coordinate cap.
    pub fn with_max_batch_size(mut self, n: usize) -> Self {
        self.max_batch_size = n;
        self
    }

    /// HTTP timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Settings for a whole optimization run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    pub matrix: MatrixServiceConfig,
    pub two_opt: TwoOptClosure,
}
