//! Route set aggregate

use serde::{Deserialize, Serialize};

use crate::entities::NormalizedRoute;
use crate::errors::DomainError;
use crate::value_objects::{GeoPoint, TravelMode};

/// The response aggregate of one planning request
///
/// Routes keep the provider's order: the first route is the provider's
/// primary recommendation. A route set is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSet {
    routes: Vec<NormalizedRoute>,
    start: GeoPoint,
    end: GeoPoint,
    vehicle: TravelMode,
}

impl RouteSet {
    /// Assemble a route set
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyRouteSet` if `routes` is empty.
    pub fn new(
        start: GeoPoint,
        end: GeoPoint,
        vehicle: TravelMode,
        routes: Vec<NormalizedRoute>,
    ) -> Result<Self, DomainError> {
        if routes.is_empty() {
            return Err(DomainError::EmptyRouteSet);
        }
        Ok(Self {
            routes,
            start,
            end,
            vehicle,
        })
    }

    #[must_use]
    pub fn routes(&self) -> &[NormalizedRoute] {
        &self.routes
    }

    #[must_use]
    pub const fn start(&self) -> GeoPoint {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> GeoPoint {
        self.end
    }

    #[must_use]
    pub const fn vehicle(&self) -> &TravelMode {
        &self.vehicle
    }

    /// The provider's primary recommendation
    #[must_use]
    pub fn primary(&self) -> &NormalizedRoute {
        // Non-empty by construction
        &self.routes[0]
    }
}
