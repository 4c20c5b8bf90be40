//! GraphHopper adapter - Implements GeocodingPort and RoutingPort using integration_graphhopper

use application::error::ProviderError;
use application::ports::{GeocodingPort, RawRoute, RoutingPort};
use async_trait::async_trait;
use domain::value_objects::{GeoPoint, TravelMode};
use integration_graphhopper::{
    GeocodingClient, GraphHopperConfig, GraphHopperError, GraphHopperGeocodingClient,
    GraphHopperRoutingClient, RoutingClient,
};
use tracing::{debug, instrument};

/// Adapter for the GraphHopper geocoding and routing APIs
#[derive(Debug)]
pub struct GraphHopperAdapter {
    geocoding_client: GraphHopperGeocodingClient,
    routing_client: GraphHopperRoutingClient,
}

impl GraphHopperAdapter {
    /// Create a new adapter with clients built from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP clients fail to initialize.
    pub fn new(config: &GraphHopperConfig) -> Result<Self, GraphHopperError> {
        Ok(Self::from_clients(
            GraphHopperGeocodingClient::new(config)?,
            GraphHopperRoutingClient::new(config)?,
        ))
    }

    /// Create an adapter from already-built clients
    #[must_use]
    pub const fn from_clients(
        geocoding_client: GraphHopperGeocodingClient,
        routing_client: GraphHopperRoutingClient,
    ) -> Self {
        Self {
            geocoding_client,
            routing_client,
        }
    }

    /// Map an integration error onto the provider-level taxonomy
    fn map_error(error: GraphHopperError) -> ProviderError {
        match error {
            GraphHopperError::ConnectionFailed(msg) => ProviderError::Connection(msg),
            GraphHopperError::Timeout { timeout_secs } => ProviderError::Timeout { timeout_secs },
            GraphHopperError::RequestFailed { status, message } => {
                ProviderError::Status { status, message }
            },
            GraphHopperError::RateLimitExceeded { retry_after_secs } => ProviderError::Status {
                status: 429,
                message: retry_after_secs.map_or_else(
                    || "Rate limit exceeded".to_string(),
                    |secs| format!("Rate limit exceeded, retry after {secs} seconds"),
                ),
            },
            GraphHopperError::ParseError(msg) => ProviderError::Parse(msg),
        }
    }
}

#[async_trait]
impl GeocodingPort for GraphHopperAdapter {
    #[instrument(skip(self))]
    async fn lookup(&self, query: &str) -> Result<Option<GeoPoint>, ProviderError> {
        self.geocoding_client
            .geocode(query)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl RoutingPort for GraphHopperAdapter {
    #[instrument(skip(self, start, end), fields(start = %start, end = %end))]
    async fn fetch_routes(
        &self,
        start: GeoPoint,
        end: GeoPoint,
        mode: &TravelMode,
    ) -> Result<Vec<RawRoute>, ProviderError> {
        let paths = self
            .routing_client
            .route(start, end, mode.as_str())
            .await
            .map_err(Self::map_error)?;

        debug!(count = paths.len(), "Converting provider paths");

        Ok(paths
            .into_iter()
            .map(|path| RawRoute::new(path.points, path.distance, path.time))
            .collect())
    }
}
