//! Directions HTTP client.

use reqwest::Url;
use tracing::debug;

use crate::domain::Coordinate;

use super::error::RoutingError;
use super::types::{DirectionsResponse, RouteSummary};

/// Default base URL for driving directions.
const DEFAULT_BASE_URL: &str = "https://api.mapbox.com/directions/v5/mapbox/driving";

/// Configuration for the routing client.
#[derive(Debug, Clone)]
pub struct RoutingConfig {
    /// Access token sent as the `access_token` query parameter
    pub access_token: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RoutingConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Driving-directions client.
#[derive(Debug, Clone)]
pub struct RoutingClient {
    http: reqwest::Client,
    config: RoutingConfig,
}

impl RoutingClient {
    pub fn new(config: RoutingConfig) -> Result<Self, RoutingError> {
        if config.access_token.trim().is_empty() {
            return Err(RoutingError::NotConfigured("access token is empty".to_string()));
        }
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    /// Request URL for a waypoint list (`lon,lat;lon,lat;...`).
    pub fn route_url(&self, waypoints: &[Coordinate]) -> Result<Url, RoutingError> {
        if waypoints.len() < 2 {
            return Err(RoutingError::TooFewWaypoints(waypoints.len()));
        }
        let path = waypoints
            .iter()
            .map(Coordinate::to_lon_lat_string)
            .collect::<Vec<_>>()
            .join(";");

        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| RoutingError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| RoutingError::InvalidUrl(self.config.base_url.clone()))?
            .pop_if_empty()
            .push(&path);
        url.query_pairs_mut()
            .append_pair("geometries", "geojson")
            .append_pair("overview", "full")
            .append_pair("access_token", &self.config.access_token);
        Ok(url)
    }

    /// Fastest driving route through `waypoints`, in order.
    pub async fn route(&self, waypoints: &[Coordinate]) -> Result<RouteSummary, RoutingError> {
        let url = self.route_url(waypoints)?;
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(RoutingError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RoutingError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let directions: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| RoutingError::Json {
                message: e.to_string(),
            })?;

        let route = directions
            .routes
            .into_iter()
            .next()
            .ok_or(RoutingError::NoRoute)?;
        debug!(
            waypoints = waypoints.len(),
            distance = route.distance,
            duration = route.duration,
            "route found"
        );
        Ok(route.into())
    }
}
