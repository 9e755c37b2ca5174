//! Routing client error types.

/// Errors from the routing HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    /// HTTP request failed
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

    /// A route needs a start and an end
    #[error("a route needs at least two waypoints, got {0}")]
    TooFewWaypoints(usize),

    /// The service found no route between the waypoints
    #[error("no route found")]
    NoRoute,

    /// Base URL cannot carry a waypoint path
    #[error("invalid routing URL: {0}")]
    InvalidUrl(String),

    /// No access token was configured
    #[error("routing not configured: {0}")]
    NotConfigured(String),
}
