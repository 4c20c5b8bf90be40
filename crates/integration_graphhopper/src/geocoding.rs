//! GraphHopper geocoding client
//!
//! Converts free-text place names to coordinates using the
//! `/geocode` endpoint. Only the best match is requested.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::GeoPoint;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::GraphHopperConfig;
use crate::error::GraphHopperError;
use crate::models::GeocodeResponse;

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a free-text place to its best-matching point
    ///
    /// Zero matches is `Ok(None)`, not an error.
    async fn geocode(&self, query: &str) -> Result<Option<GeoPoint>, GraphHopperError>;
}

/// GraphHopper-based geocoding client
#[derive(Debug)]
pub struct GraphHopperGeocodingClient {
    client: Client,
    config: GraphHopperConfig,
}

impl GraphHopperGeocodingClient {
    /// Create a new GraphHopper geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &GraphHopperConfig) -> Result<Self, GraphHopperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("Wayfinder/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GraphHopperError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl GeocodingClient for GraphHopperGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, query: &str) -> Result<Option<GeoPoint>, GraphHopperError> {
        let url = format!("{}/geocode", self.config.base_url);
        let params = [
            ("q", query),
            ("locale", self.config.locale.as_str()),
            ("limit", "1"),
            ("key", self.config.api_key.as_str()),
        ];

        debug!(%query, "Geocoding place");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| GraphHopperError::from_send(&e, self.config.timeout_secs))?;

        let response = GraphHopperError::check_status(response).await?;

        let body: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| GraphHopperError::ParseError(e.to_string()))?;

        let Some(hit) = body.hits.first() else {
            debug!(%query, "No geocoding hits");
            return Ok(None);
        };

        let point = GeoPoint::new(hit.point.lat, hit.point.lng)
            .map_err(|e| GraphHopperError::ParseError(e.to_string()))?;
        debug!(%query, %point, "Geocoded place");

        Ok(Some(point))
    }
}
