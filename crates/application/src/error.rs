//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Transport or HTTP-level failure of an external provider
///
/// Distinct from a well-formed empty result: a provider that answers with
/// zero hits or zero paths is not an error at this level.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Connection to the provider failed
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Request exceeded its timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Provider answered with a non-success HTTP status
    #[error("Provider returned HTTP {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Provider-supplied error message, if any
        message: String,
    },

    /// Provider response could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Terminal failure of one route-planning request
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Start or end place text was empty
    #[error("Start and end places are required")]
    MissingInput,

    /// Direct and fallback lookups found nothing for at least one place
    #[error("Could not geocode: {}", .unresolved.join(", "))]
    GeocodeFailed {
        /// Place texts that could not be resolved
        unresolved: Vec<String>,
    },

    /// Routing provider failed; the cause is kept for diagnostics
    #[error("Route fetch failed: {0}")]
    RouteFetchFailed(#[source] ProviderError),

    /// Routing provider returned zero paths
    #[error("No route found")]
    NoRouteFound,

    /// A returned path could not be turned into a route
    #[error("Route {} has invalid geometry: {source}", .index + 1)]
    InvalidRouteGeometry {
        /// 0-based position of the offending path
        index: usize,
        /// Underlying decoding failure
        #[source]
        source: DomainError,
    },
}

impl PipelineError {
    /// Stable machine-readable code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingInput => "missing_input",
            Self::GeocodeFailed { .. } => "geocode_failed",
            Self::RouteFetchFailed(_) => "route_fetch_failed",
            Self::NoRouteFound => "no_route_found",
            Self::InvalidRouteGeometry { .. } => "invalid_route_geometry",
        }
    }

    /// Human-readable message safe to show to end users
    ///
    /// Never includes provider payloads or underlying causes.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::MissingInput => {
                "Please enter both start and end locations (city, landmark, address, etc)."
            },
            Self::GeocodeFailed { .. } => {
                "Could not geocode start or end place. Tip: use well-known city names or \
                 landmarks, or append the city and country."
            },
            Self::RouteFetchFailed(_) => {
                "The routing service could not be reached. Please try again later."
            },
            Self::NoRouteFound => "No route found.",
            Self::InvalidRouteGeometry { .. } => {
                "The routing service returned a route that could not be displayed."
            },
        }
    }
}
