//! Domain-level errors

use thiserror::Error;

use crate::polyline::PolylineError;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    /// Latitude or longitude outside of the valid degree range
    #[error(
        "Invalid coordinates ({latitude}, {longitude}): latitude must be -90 to 90, longitude must be -180 to 180"
    )]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// Encoded route geometry could not be decoded
    #[error("Invalid route geometry: {0}")]
    InvalidGeometry(#[from] PolylineError),

    /// A route must contain at least one coordinate
    #[error("Route {id} has no coordinates")]
    EmptyGeometry { id: usize },

    /// A route set must contain at least one route
    #[error("Route set must contain at least one route")]
    EmptyRouteSet,
}
