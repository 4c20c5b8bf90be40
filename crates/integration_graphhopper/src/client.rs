//! GraphHopper routing client
//!
//! Requests alternative routes between two points from the `/route`
//! endpoint with encoded polyline geometry.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::GeoPoint;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::GraphHopperConfig;
use crate::error::GraphHopperError;
use crate::models::{RoutePath, RouteResponse};

/// Trait for routing clients
#[async_trait]
pub trait RoutingClient: Send + Sync {
    /// Fetch alternative paths from `start` to `end` for the given vehicle
    ///
    /// Paths are returned in provider order. A response without paths is an
    /// empty vector, not an error.
    async fn route(
        &self,
        start: GeoPoint,
        end: GeoPoint,
        vehicle: &str,
    ) -> Result<Vec<RoutePath>, GraphHopperError>;
}

/// GraphHopper-based routing client
#[derive(Debug)]
pub struct GraphHopperRoutingClient {
    client: Client,
    config: GraphHopperConfig,
}

impl GraphHopperRoutingClient {
    /// Create a new GraphHopper routing client
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

    /// Query parameters for a route request; `point` appears twice, start first
    fn route_params(&self, start: GeoPoint, end: GeoPoint, vehicle: &str) -> Vec<(&str, String)> {
        vec![
            ("point", start.to_query_param()),
            ("point", end.to_query_param()),
            ("vehicle", vehicle.to_string()),
            ("locale", self.config.locale.clone()),
            ("points_encoded", "true".to_string()),
            ("algorithm", "alternative_route".to_string()),
            ("max_paths", self.config.max_paths.to_string()),
            ("key", self.config.api_key.clone()),
        ]
    }

    /// Parse a raw `/route` body
    fn parse_route_response(body: &str) -> Result<Vec<RoutePath>, GraphHopperError> {
        let response: RouteResponse =
            serde_json::from_str(body).map_err(|e| GraphHopperError::ParseError(e.to_string()))?;
        Ok(response.paths)
    }
}

#[async_trait]
impl RoutingClient for GraphHopperRoutingClient {
    #[instrument(skip(self, start, end), fields(start = %start, end = %end))]
    async fn route(
        &self,
        start: GeoPoint,
        end: GeoPoint,
        vehicle: &str,
    ) -> Result<Vec<RoutePath>, GraphHopperError> {
        let url = format!("{}/route", self.config.base_url);
        let params = self.route_params(start, end, vehicle);

        debug!(?url, "Requesting alternative routes");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| GraphHopperError::from_send(&e, self.config.timeout_secs))?;

        let response = GraphHopperError::check_status(response).await?;

        let body = response
            .text()
            .await
            .map_err(|e| GraphHopperError::ParseError(e.to_string()))?;

        let paths = Self::parse_route_response(&body)?;

        if paths.is_empty() {
            warn!("No paths returned");
        }

        debug!(count = paths.len(), "Paths found");
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn test_route_params() {
        let client = GraphHopperRoutingClient::new(&GraphHopperConfig::for_testing()).unwrap();
        let params = client.route_params(point(48.8566, 2.3522), point(45.764, 4.8357), "bike");

        let points: Vec<_> = params
            .iter()
            .filter(|(k, _)| *k == "point")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(points, vec!["48.8566,2.3522", "45.764,4.8357"]);
        assert!(params.contains(&("vehicle", "bike".to_string())));
        assert!(params.contains(&("algorithm", "alternative_route".to_string())));
        assert!(params.contains(&("max_paths", "3".to_string())));
        assert!(params.contains(&("points_encoded", "true".to_string())));
        assert!(params.contains(&("locale", "en".to_string())));
        assert!(params.contains(&("key", "test-key".to_string())));
    }

    #[test]
    fn test_parse_route_response() {
        let body = r#"{"paths": [{"points": "_p~iF~ps|U", "distance": 1200.0, "time": 60000}]}"#;
        let paths = GraphHopperRoutingClient::parse_route_response(body).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].time, 60_000);
    }

    #[test]
    fn test_parse_route_response_missing_paths() {
        let paths = GraphHopperRoutingClient::parse_route_response("{}").unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn test_parse_route_response_invalid_json() {
        let err = GraphHopperRoutingClient::parse_route_response("not json").unwrap_err();
        assert!(matches!(err, GraphHopperError::ParseError(_)));
    }
}
