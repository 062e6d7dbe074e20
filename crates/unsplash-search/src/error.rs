//! Error types for the unsplash-search crate.

use thiserror::Error;

/// Errors that can occur when calling the Unsplash search API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, TLS, connection reset).
    #[error("Network error: {0}")]
    Network(String),

    /// The access key was rejected.
    #[error("Access key rejected by Unsplash (401)")]
    Unauthorized,

    /// The hourly request quota for the access key is exhausted.
    #[error("Rate limited by Unsplash{}", retry_after.as_ref().map(|r| format!(" (retry after {r})")).unwrap_or_default())]
    RateLimited {
        /// Value of the `Retry-After` header, if present.
        retry_after: Option<String>,
    },

    /// Unsplash returned a 5xx status.
    #[error("Unsplash server error ({0})")]
    Server(u16),

    /// Any other non-success status.
    #[error("Unexpected status from Unsplash ({0})")]
    Unexpected(u16),

    /// The response body was not the expected JSON shape.
    #[error("Failed to parse search response: {0}")]
    Parse(String),
}
