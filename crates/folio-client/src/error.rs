//! Client error types.

use thiserror::Error;

/// Errors from a single backend or listing call.
///
/// Read paths swallow these and serve fallback data; command paths (sync,
/// health, stats) return them to the caller.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport error, including timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The response body did not decode into the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// The public listing has no API root or owner configured; no request
    /// was made.
    #[error("public listing is not configured (github.api_url and github.owner are required)")]
    ListingNotConfigured,

    /// The server returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}

impl ClientError {
    /// Whether the call ran out of time.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}
