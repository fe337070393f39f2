//! API client error types.

use thiserror::Error;

/// Errors that can occur when calling the research and items APIs.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse an API response.
    #[error("parse error: {0}")]
    Parse(String),

    /// A request failed client-side validation before being sent.
    #[error("validation error: {0}")]
    Validation(String),

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited — retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}

impl ApiError {
    /// Whether a retry of the same request could plausibly succeed.
    ///
    /// Validation failures are deterministic and never retried; transport,
    /// server-side, and rate-limit errors are transient.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        !matches!(self, Self::Validation(_) | Self::Parse(_))
    }
}
