//! Geocoding fallback configuration.

use std::time::Duration;

use application::GeocoderConfig;
use serde::{Deserialize, Serialize};

/// Geocoding fallback settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderAppConfig {
    /// Appended to the place text on the second attempt (default: ", India")
    #[serde(default = "default_fallback_suffix")]
    pub fallback_suffix: String,

    /// Timeout of each geocoding attempt in seconds (default: 15)
    #[serde(default = "default_attempt_timeout")]
    pub attempt_timeout_secs: u64,
}

fn default_fallback_suffix() -> String {
    ", India".to_string()
}

const fn default_attempt_timeout() -> u64 {
    15
}

impl Default for GeocoderAppConfig {
    fn default() -> Self {
        Self {
            fallback_suffix: default_fallback_suffix(),
            attempt_timeout_secs: default_attempt_timeout(),
        }
    }
}

impl GeocoderAppConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            attempt_timeout_secs: 2,
            ..Default::default()
        }
    }

    /// Convert to `application::GeocoderConfig`
    #[must_use]
    pub fn to_geocoder_config(&self) -> GeocoderConfig {
        GeocoderConfig {
            fallback_suffix: self.fallback_suffix.clone(),
            attempt_timeout: Duration::from_secs(self.attempt_timeout_secs),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.attempt_timeout_secs == 0 {
            return Err("attempt_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}
