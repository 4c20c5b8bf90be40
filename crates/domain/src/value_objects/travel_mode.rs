//! Travel mode value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Routing profile selector handed to the routing provider
///
/// The value is passed through untouched: any string is accepted here and an
/// unknown profile is rejected by the provider, not locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TravelMode(String);

impl TravelMode {
    /// Create a travel mode from any profile name
    #[must_use]
    pub fn new(profile: impl Into<String>) -> Self {
        Self(profile.into())
    }

    /// Car profile
    #[must_use]
    pub fn car() -> Self {
        Self::new("car")
    }

    /// Bike profile
    #[must_use]
    pub fn bike() -> Self {
        Self::new("bike")
    }

    /// Foot profile
    #[must_use]
    pub fn foot() -> Self {
        Self::new("foot")
    }

    /// Profile name as sent to the provider
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TravelMode {
    fn default() -> Self {
        Self::car()
    }
}

impl From<&str> for TravelMode {
    fn from(profile: &str) -> Self {
        Self::new(profile)
    }
}

impl From<String> for TravelMode {
    fn from(profile: String) -> Self {
        Self(profile)
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
