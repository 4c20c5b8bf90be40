//! Routing provider port
//!
//! Requests alternative routes between two points. Adapters in the
//! infrastructure layer implement this port using a routing API.

use async_trait::async_trait;
use domain::value_objects::{GeoPoint, TravelMode};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// A provider path before normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRoute {
    /// Encoded polyline geometry
    pub points: String,
    /// Distance in meters
    pub distance_meters: f64,
    /// Duration in milliseconds
    pub time_millis: u64,
}

impl RawRoute {
    /// Create a raw route
    #[must_use]
    pub fn new(points: impl Into<String>, distance_meters: f64, time_millis: u64) -> Self {
        Self {
            points: points.into(),
            distance_meters,
            time_millis,
        }
    }
}

/// Port for alternative-route retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Fetch alternative routes from `start` to `end`
    ///
    /// Paths are returned exactly in provider order. An empty vector is a
    /// valid answer; transport and HTTP failures are errors.
    async fn fetch_routes(
        &self,
        start: GeoPoint,
        end: GeoPoint,
        mode: &TravelMode,
    ) -> Result<Vec<RawRoute>, ProviderError>;
}
