//! NPS client error types.

/// Errors from the NPS HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum NpsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// 401 or 403 from the API
    #[error("unauthorized: check NPS_API_KEY")]
    Unauthorized,

    #[error("NPS API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Body did not match the expected shape
    #[error("NPS response parse error: {message}")]
    Json { message: String },

    #[error("NPS API not configured: {0}")]
    NotConfigured(String),
}
