//! Unsplash error types

use thiserror::Error;

/// Errors that can occur during photo search
#[derive(Debug, Error)]
pub enum UnsplashError {
    /// Connection to the service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Service answered with a non-success status
    #[error("Request failed with HTTP {status}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
    },

    /// Failed to parse the response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// No access key configured
    #[error("Unsplash access key not configured")]
    NotConfigured,

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl UnsplashError {
    pub(crate) fn from_send(error: &reqwest::Error, timeout_secs: u64) -> Self {
        if error.is_timeout() {
            Self::Timeout { timeout_secs }
        } else {
            Self::ConnectionFailed(error.to_string())
        }
    }
}
