//! NPS data API HTTP client.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::Coordinate;

use super::AlertSource;
use super::error::NpsError;
use super::types::{Alert, AlertsResponse, ParksResponse};

/// Default base URL for the NPS data API.
const DEFAULT_BASE_URL: &str = "https://developer.nps.gov/api/v1";

/// Configuration for the NPS client.
#[derive(Debug, Clone)]
pub struct NpsConfig {
    /// API key for `X-Api-Key` header authentication
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl NpsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
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

/// Client for the NPS alerts and parks endpoints.
#[derive(Debug, Clone)]
pub struct NpsClient {
    http: reqwest::Client,
    base_url: String,
}

impl NpsClient {
    pub fn new(config: NpsConfig) -> Result<Self, NpsError> {
        if config.api_key.trim().is_empty() {
            return Err(NpsError::NotConfigured("API key is empty".to_string()));
        }

        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| NpsError::Api {
            status: 0,
            message: "Invalid API key format".to_string(),
        })?;
        headers.insert(HeaderName::from_static("x-api-key"), api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        park_codes: &str,
    ) -> Result<T, NpsError> {
        let url = format!("{}/{endpoint}", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("parkCode", park_codes)])
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(NpsError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NpsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| NpsError::Json {
            message: e.to_string(),
        })
    }

    /// Current alerts for one or more parks.
    pub async fn alerts(&self, park_codes: &[String]) -> Result<Vec<Alert>, NpsError> {
        if park_codes.is_empty() {
            return Ok(Vec::new());
        }
        let codes = park_codes.join(",").to_lowercase();
        let response: AlertsResponse = self.get_json("alerts", &codes).await?;
        debug!(parks = %codes, alerts = response.data.len(), "fetched alerts");
        Ok(response.data.into_iter().map(Alert::from).collect())
    }

    /// Entrance coordinate reported by the parks endpoint, if any.
    pub async fn entrance(&self, park_code: &str) -> Result<Option<Coordinate>, NpsError> {
        let code = park_code.trim().to_lowercase();
        let response: ParksResponse = self.get_json("parks", &code).await?;
        Ok(response
            .data
            .iter()
            .find(|p| p.park_code.eq_ignore_ascii_case(&code))
            .and_then(|p| p.coordinate()))
    }
}

impl AlertSource for NpsClient {
    async fn park_alerts(&self, park_code: &str) -> Result<Vec<Alert>, NpsError> {
        self.alerts(&[park_code.to_string()]).await
    }
}
