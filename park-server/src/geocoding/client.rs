//! Geocoding HTTP client.

use reqwest::Url;
use tracing::debug;

use crate::domain::LocationCandidate;
use crate::resolver::{PlaceSource, TypeFilter};

use super::convert::feature_to_candidate;
use super::error::GeocodingError;
use super::types::FeatureCollection;

/// Default base URL for the places endpoint.
const DEFAULT_BASE_URL: &str = "https://api.mapbox.com/geocoding/v5/mapbox.places";

/// Default number of features requested per query.
const DEFAULT_LIMIT: usize = 8;

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodingConfig {
    /// Access token sent as the `access_token` query parameter
    pub access_token: String,
    /// Base URL for the API
    pub base_url: String,
    /// Maximum features per query
    pub limit: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocodingConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            limit: DEFAULT_LIMIT,
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Forward-geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    http: reqwest::Client,
    config: GeocodingConfig,
}

impl GeocodingClient {
    pub fn new(config: GeocodingConfig) -> Result<Self, GeocodingError> {
        if config.access_token.trim().is_empty() {
            return Err(GeocodingError::NotConfigured(
                "access token is empty".to_string(),
            ));
        }
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    /// Request URL for a query. The query is a single percent-encoded
    /// path segment ending in `.json`.
    pub fn search_url(&self, query: &str, filter: TypeFilter) -> Result<Url, GeocodingError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| GeocodingError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| GeocodingError::InvalidUrl(self.config.base_url.clone()))?
            .pop_if_empty()
            .push(&format!("{}.json", query.trim()));
        url.query_pairs_mut()
            .append_pair("access_token", &self.config.access_token)
            .append_pair("types", filter.as_param())
            .append_pair("country", "us")
            .append_pair("limit", &self.config.limit.to_string());
        Ok(url)
    }

    /// Look up `query`, returning candidates in the geocoder's order.
    pub async fn search(
        &self,
        query: &str,
        filter: TypeFilter,
    ) -> Result<Vec<LocationCandidate>, GeocodingError> {
        let url = self.search_url(query, filter)?;
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(GeocodingError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodingError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let collection: FeatureCollection =
            serde_json::from_str(&body).map_err(|e| GeocodingError::Json {
                message: e.to_string(),
            })?;

        debug!(query, features = collection.features.len(), "geocoding response");
        Ok(collection.features.iter().map(feature_to_candidate).collect())
    }
}

impl PlaceSource for GeocodingClient {
    type Error = GeocodingError;

    async fn search_places(
        &self,
        query: &str,
        filter: TypeFilter,
    ) -> Result<Vec<LocationCandidate>, GeocodingError> {
        self.search(query, filter).await
    }
}

/// An unconfigured geocoder fails every lookup, which the resolver
/// treats as zero results.
impl PlaceSource for Option<GeocodingClient> {
    type Error = GeocodingError;

    async fn search_places(
        &self,
        query: &str,
        filter: TypeFilter,
    ) -> Result<Vec<LocationCandidate>, GeocodingError> {
        match self {
            Some(client) => client.search(query, filter).await,
            None => Err(GeocodingError::NotConfigured("MAPBOX_TOKEN is unset".to_string())),
        }
    }
}
