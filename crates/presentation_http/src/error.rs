//! API error handling
//!
//! Pipeline failures map to one status code and one stable `code` each.
//! Response bodies carry only the user-facing message; provider payloads
//! and underlying causes are logged, never returned.

use application::PipelineError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
    /// Stable machine-readable code
    pub code: String,
}

impl ApiError {
    /// HTTP status for this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Pipeline(e) => match e {
                PipelineError::MissingInput => StatusCode::BAD_REQUEST,
                PipelineError::GeocodeFailed { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                PipelineError::NoRouteFound => StatusCode::NOT_FOUND,
                PipelineError::RouteFetchFailed(_) | PipelineError::InvalidRouteGeometry { .. } => {
                    StatusCode::BAD_GATEWAY
                },
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let Self::Pipeline(err) = &self;

        if status.is_server_error() {
            error!(code = err.code(), error = ?err, "Route request failed");
        } else {
            warn!(code = err.code(), error = %err, "Route request rejected");
        }

        let body = ErrorResponse {
            error: err.user_message().to_string(),
            code: err.code().to_string(),
        };

        (status, Json(body)).into_response()
    }
}
