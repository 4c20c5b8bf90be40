//! GraphHopper response models
//!
//! Only the fields Wayfinder consumes are modeled; everything else in the
//! payloads is ignored.

use serde::{Deserialize, Serialize};

/// Response of `GET /geocode`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeocodeResponse {
    /// Matches, best first
    #[serde(default)]
    pub hits: Vec<GeocodeHit>,
}

/// One geocoding match
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeocodeHit {
    /// Location of the match
    pub point: HitPoint,
}

/// Coordinates of a geocoding match
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HitPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Response of `GET /route`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RouteResponse {
    /// Alternative paths in provider order; absent means none
    #[serde(default)]
    pub paths: Vec<RoutePath>,
}

/// One alternative path
///
/// Missing numeric fields default to zero; missing geometry defaults to an
/// empty string and is rejected downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RoutePath {
    /// Encoded polyline (precision 5)
    #[serde(default)]
    pub points: String,
    /// Distance in meters
    #[serde(default)]
    pub distance: f64,
    /// Duration in milliseconds
    #[serde(default)]
    pub time: u64,
}

/// Error payload returned with non-success statuses
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}
