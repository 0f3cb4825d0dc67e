//! Error types for remote store operations.

use thiserror::Error;

/// Result type for remote store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while talking to the remote store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level failure (connect, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// The store asked us to back off.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// Invalid or missing configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl StoreError {
    /// Returns true if this error represents a 429 rate-limit response.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            StoreError::RateLimited { .. } => true,
            StoreError::Api { status, .. } => *status == 429,
            StoreError::Http(e) => e.status().is_some_and(|s| s.as_u16() == 429),
            _ => false,
        }
    }

    /// Returns the retry-after duration if this is a rate-limit error.
    pub fn retry_after(&self) -> Option<std::time::Duration> {
        match self {
            StoreError::RateLimited { retry_after_secs } => {
                Some(std::time::Duration::from_secs(*retry_after_secs))
            }
            _ => None,
        }
    }
}
