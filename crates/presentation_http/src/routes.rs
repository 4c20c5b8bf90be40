//! Route definitions

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{handlers, middleware::request_id, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Route planning API (v1)
        .route("/v1/routes", post(handlers::routes::plan_routes))
        // Request correlation for every route
        .layer(middleware::from_fn(request_id))
        // Attach state
        .with_state(state)
}
