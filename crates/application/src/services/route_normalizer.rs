//! Route normalization
//!
//! Turns provider paths into display-ready routes: decodes the polyline
//! geometry, converts meters and milliseconds to rounded kilometers and
//! hours, and assigns position-based ids, names and palette colors.
//! Provider order is preserved; routes are never re-sorted.

use domain::entities::NormalizedRoute;
use domain::{DomainError, polyline};
use thiserror::Error;
use tracing::debug;

use crate::ports::RawRoute;

/// Errors from [`normalize`]
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The provider returned no paths
    #[error("No route found")]
    EmptyResult,

    /// A path's geometry could not be decoded into at least one point
    #[error("Path {index} has invalid geometry: {source}")]
    InvalidGeometry {
        /// 0-based position of the path
        index: usize,
        #[source]
        source: DomainError,
    },
}

/// Normalize provider paths in order
///
/// # Errors
///
/// Returns [`NormalizeError::EmptyResult`] for an empty input rather than an
/// empty sequence, and [`NormalizeError::InvalidGeometry`] for the first path
/// whose geometry is malformed or empty.
pub fn normalize(raw_routes: &[RawRoute]) -> Result<Vec<NormalizedRoute>, NormalizeError> {
    if raw_routes.is_empty() {
        return Err(NormalizeError::EmptyResult);
    }

    raw_routes
        .iter()
        .enumerate()
        .map(|(index, raw)| normalize_one(index, raw))
        .collect()
}

fn normalize_one(index: usize, raw: &RawRoute) -> Result<NormalizedRoute, NormalizeError> {
    let invalid = |source: DomainError| NormalizeError::InvalidGeometry { index, source };

    let coords = polyline::decode(&raw.points).map_err(|e| invalid(e.into()))?;
    debug!(index, points = coords.len(), "Decoded route geometry");

    NormalizedRoute::new(index, coords, raw.distance_meters, raw.time_millis as f64)
        .map_err(invalid)
}
