//! Normalized route entity

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Display colors cycled by route position
pub const PALETTE: [&str; 5] = ["#1f77b4", "#2ca02c", "#9467bd", "#ff7f0e", "#d62728"];

const METERS_PER_KILOMETER: f64 = 1000.0;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Palette color for the route at a 0-based position
///
/// A pure function of position: the same input order always yields the
/// same styling.
#[must_use]
pub fn color_for_index(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Round to two decimal places
///
/// Rounds the exact binary value, with ties to even: `0.125` becomes `0.12`
/// while `2.675`, stored just below the half, becomes `2.67`.
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// A display-ready route
///
/// Built once from a provider path and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRoute {
    /// 1-based position in the route set
    id: usize,
    /// Decoded geometry as `[lat, lon]` pairs
    coords: Vec<[f64; 2]>,
    /// Distance in kilometers, two decimals
    distance_km: f64,
    /// Duration in hours, two decimals
    time_hours: f64,
    /// Palette color
    color: String,
    /// Label, e.g. "Route 1"
    name: String,
}

impl NormalizedRoute {
    /// Build the route at 0-based `index` from decoded geometry and raw metrics
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyGeometry` if `coords` is empty.
    pub fn new(
        index: usize,
        coords: Vec<[f64; 2]>,
        distance_meters: f64,
        duration_millis: f64,
    ) -> Result<Self, DomainError> {
        let id = index + 1;
        if coords.is_empty() {
            return Err(DomainError::EmptyGeometry { id });
        }

        Ok(Self {
            id,
            coords,
            distance_km: round_to_hundredths(distance_meters / METERS_PER_KILOMETER),
            time_hours: round_to_hundredths(duration_millis / MILLIS_PER_HOUR),
            color: color_for_index(index).to_string(),
            name: format!("Route {id}"),
        })
    }

    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    #[must_use]
    pub fn coords(&self) -> &[[f64; 2]] {
        &self.coords
    }

    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    #[must_use]
    pub const fn time_hours(&self) -> f64 {
        self.time_hours
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
