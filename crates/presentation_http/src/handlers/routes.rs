//! Route planning handler

use axum::{Json, extract::State};
use domain::entities::RouteSet;
use domain::value_objects::TravelMode;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{error::ApiError, middleware::RequestId, state::AppState};

/// Route planning request
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRequest {
    /// Free-text start place
    pub start: String,
    /// Free-text end place
    pub end: String,
    /// Provider vehicle profile, `car` when absent or blank
    #[serde(default)]
    pub vehicle: Option<String>,
}

impl PlanRequest {
    fn travel_mode(&self) -> TravelMode {
        self.vehicle
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map_or_else(TravelMode::default, TravelMode::from)
    }

    /// Planning rejects blank places up front, so no lookups are spent on them
    fn has_both_places(&self) -> bool {
        !self.start.trim().is_empty() && !self.end.trim().is_empty()
    }
}

/// Route planning response
#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    pub route_set: RouteSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_image: Option<String>,
}

/// Plan alternative routes between two places
///
/// Place images are looked up concurrently with planning and never affect
/// the outcome.
#[instrument(skip_all, fields(request_id = %request_id))]
pub async fn plan_routes(
    State(state): State<AppState>,
    request_id: RequestId,
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, ApiError> {
    let mode = request.travel_mode();

    let images = async {
        match &state.images {
            Some(images) if request.has_both_places() => {
                images.images_for(&request.start, &request.end).await
            },
            _ => (None, None),
        }
    };

    let (planned, (start_image, end_image)) = tokio::join!(
        state.planner.plan(&request.start, &request.end, mode),
        images
    );
    let route_set = planned?;

    info!(
        routes = route_set.routes().len(),
        vehicle = %route_set.vehicle(),
        "Route request served"
    );

    Ok(Json(PlanResponse {
        route_set,
        start_image,
        end_image,
    }))
}
