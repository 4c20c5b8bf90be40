//! Geocoding provider port
//!
//! A single lookup attempt against a geocoding provider. The fallback policy
//! lives in [`crate::services::Geocoder`], not in adapters.

use async_trait::async_trait;
use domain::value_objects::GeoPoint;
#[cfg(test)]
use mockall::automock;

use crate::error::ProviderError;

/// Port for free-text geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Look up `query` and return the first hit's point
    ///
    /// `Ok(None)` means the provider answered with zero hits.
    async fn lookup(&self, query: &str) -> Result<Option<GeoPoint>, ProviderError>;
}
