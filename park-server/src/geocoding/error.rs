//! Geocoding client error types.

/// Errors from the geocoding HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum GeocodingError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The access token was rejected
    #[error("unauthorized: check MAPBOX_TOKEN")]
    Unauthorized,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Base URL cannot carry a query path
    #[error("invalid geocoding URL: {0}")]
    InvalidUrl(String),

    /// No access token was configured
    #[error("geocoding not configured: {0}")]
    NotConfigured(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GeocodingError::Api {
            status: 422,
            message: "Query too long".into(),
        };
        assert_eq!(err.to_string(), "API error 422: Query too long");

        let err = GeocodingError::NotConfigured("MAPBOX_TOKEN is unset".into());
        assert_eq!(err.to_string(), "geocoding not configured: MAPBOX_TOKEN is unset");
    }
}
