//! Route planning pipeline
//!
//! Validates the two place texts, geocodes both concurrently, fetches
//! alternative routes between the resolved points and normalizes them into
//! a [`RouteSet`]. Each request is independent; nothing is cached.

use std::sync::Arc;

use domain::entities::RouteSet;
use domain::value_objects::TravelMode;
use tracing::{debug, info, instrument, warn};

use crate::error::PipelineError;
use crate::ports::RoutingPort;
use crate::services::geocoder::Geocoder;
use crate::services::route_normalizer::{NormalizeError, normalize};

/// Orchestrates geocoding, route retrieval and normalization
#[derive(Clone)]
pub struct RoutePlanner {
    geocoder: Geocoder,
    routing: Arc<dyn RoutingPort>,
}

impl std::fmt::Debug for RoutePlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutePlanner")
            .field("geocoder", &self.geocoder)
            .finish_non_exhaustive()
    }
}

impl RoutePlanner {
    /// Create a new route planner
    #[must_use]
    pub fn new(geocoder: Geocoder, routing: Arc<dyn RoutingPort>) -> Self {
        Self { geocoder, routing }
    }

    /// Plan routes between two free-text places
    ///
    /// Surrounding whitespace is trimmed before use. The route provider is
    /// only called once both places have resolved.
    ///
    /// # Errors
    ///
    /// Returns a [`PipelineError`] describing the first stage that failed.
    #[instrument(skip(self, mode), fields(mode = %mode))]
    pub async fn plan(
        &self,
        start_text: &str,
        end_text: &str,
        mode: TravelMode,
    ) -> Result<RouteSet, PipelineError> {
        let start_text = start_text.trim();
        let end_text = end_text.trim();
        if start_text.is_empty() || end_text.is_empty() {
            return Err(PipelineError::MissingInput);
        }

        let (start, end) = tokio::join!(
            self.geocoder.resolve(start_text),
            self.geocoder.resolve(end_text)
        );

        let (start, end) = match (start, end) {
            (Some(start), Some(end)) => (start, end),
            (start, end) => {
                let unresolved: Vec<String> =
                    [(start_text, start.is_none()), (end_text, end.is_none())]
                        .into_iter()
                        .filter(|(_, missing)| *missing)
                        .map(|(text, _)| text.to_string())
                        .collect();
                warn!(?unresolved, "Geocoding failed");
                return Err(PipelineError::GeocodeFailed { unresolved });
            },
        };
        debug!(%start, %end, "Resolved both places");

        let raw_routes = self
            .routing
            .fetch_routes(start, end, &mode)
            .await
            .map_err(|e| {
                warn!(error = %e, "Route fetch failed");
                PipelineError::RouteFetchFailed(e)
            })?;

        let routes = normalize(&raw_routes).map_err(|e| match e {
            NormalizeError::EmptyResult => PipelineError::NoRouteFound,
            NormalizeError::InvalidGeometry { index, source } => {
                warn!(index, error = %source, "Provider returned invalid route geometry");
                PipelineError::InvalidRouteGeometry { index, source }
            },
        })?;

        info!(routes = routes.len(), "Planned routes");

        RouteSet::new(start, end, mode, routes).map_err(|_| PipelineError::NoRouteFound)
    }
}
