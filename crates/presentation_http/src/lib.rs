//! Wayfinder HTTP presentation layer
//!
//! This crate provides the JSON API for route planning.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use middleware::{REQUEST_ID_HEADER, RequestId};
pub use routes::create_router;
pub use state::AppState;
