//! Geocoding with a one-shot locale fallback
//!
//! Resolves a free-text place in at most two provider calls: the text as
//! given, then the text with a locale-disambiguation suffix appended. Zero
//! hits, provider errors and timeouts all fall through to the next attempt;
//! a double miss is reported as `None`, never as an error.

use std::sync::Arc;
use std::time::Duration;

use domain::value_objects::GeoPoint;
use tracing::{debug, instrument, warn};

use crate::ports::GeocodingPort;

/// Configuration for the [`Geocoder`]
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Appended to the place text for the fallback attempt
    pub fallback_suffix: String,
    /// Independent timeout of each attempt
    pub attempt_timeout: Duration,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            fallback_suffix: ", India".to_string(),
            attempt_timeout: Duration::from_secs(15),
        }
    }
}

/// Resolves place names to points through a [`GeocodingPort`]
#[derive(Clone)]
pub struct Geocoder {
    port: Arc<dyn GeocodingPort>,
    config: GeocoderConfig,
}

impl std::fmt::Debug for Geocoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Geocoder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Geocoder {
    /// Create a new geocoder
    #[must_use]
    pub fn new(port: Arc<dyn GeocodingPort>, config: GeocoderConfig) -> Self {
        Self { port, config }
    }

    /// Resolve `place` to a point, or `None` if both attempts come up empty
    #[instrument(skip(self))]
    pub async fn resolve(&self, place: &str) -> Option<GeoPoint> {
        if let Some(point) = self.attempt(place).await {
            return Some(point);
        }

        let fallback = format!("{place}{}", self.config.fallback_suffix);
        debug!(%fallback, "Retrying geocoding with locale suffix");

        let point = self.attempt(&fallback).await;
        if point.is_none() {
            debug!(%place, "Place could not be geocoded");
        }
        point
    }

    /// One bounded provider call; every failure collapses to `None`
    async fn attempt(&self, query: &str) -> Option<GeoPoint> {
        match tokio::time::timeout(self.config.attempt_timeout, self.port.lookup(query)).await {
            Ok(Ok(Some(point))) => {
                debug!(%query, %point, "Geocoded place");
                Some(point)
            },
            Ok(Ok(None)) => {
                debug!(%query, "No geocoding hits");
                None
            },
            Ok(Err(e)) => {
                warn!(%query, error = %e, "Geocoding attempt failed");
                None
            },
            Err(_) => {
                warn!(
                    %query,
                    timeout_secs = self.config.attempt_timeout.as_secs(),
                    "Geocoding attempt timed out"
                );
                None
            },
        }
    }
}
