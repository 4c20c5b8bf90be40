//! GraphHopper error types

use reqwest::{Response, StatusCode};
use thiserror::Error;

use crate::models::ErrorBody;

/// Errors that can occur when talking to GraphHopper
#[derive(Debug, Error)]
pub enum GraphHopperError {
    /// Connection to the service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Service answered with a non-success status
    #[error("Request failed with HTTP {status}: {message}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Message from the error body, if any
        message: String,
    },

    /// Failed to parse a response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl GraphHopperError {
    pub(crate) fn from_send(error: &reqwest::Error, timeout_secs: u64) -> Self {
        if error.is_timeout() {
            Self::Timeout { timeout_secs }
        } else {
            Self::ConnectionFailed(error.to_string())
        }
    }

    /// Turn a non-success response into an error, passing successes through
    pub(crate) async fn check_status(response: Response) -> Result<Response, Self> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(Self::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_default();

        Err(Self::RequestFailed {
            status: status.as_u16(),
            message,
        })
    }
}
