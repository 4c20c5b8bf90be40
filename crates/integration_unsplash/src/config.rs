//! Unsplash service configuration

use std::fmt;

use serde::{Deserialize, Serialize};

/// Configuration for the Unsplash photo search API
#[derive(Clone, Serialize, Deserialize)]
pub struct UnsplashConfig {
    /// Base URL for the Unsplash API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Access key sent as `client_id`
    #[serde(default)]
    pub access_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Requested photo orientation
    #[serde(default = "default_orientation")]
    pub orientation: String,
}

fn default_base_url() -> String {
    "https://api.unsplash.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_orientation() -> String {
    "landscape".to_string()
}

impl fmt::Debug for UnsplashConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnsplashConfig")
            .field("base_url", &self.base_url)
            .field("access_key", &redacted(&self.access_key))
            .field("timeout_secs", &self.timeout_secs)
            .field("orientation", &self.orientation)
            .finish()
    }
}

const fn redacted(secret: &str) -> &'static str {
    if secret.is_empty() { "<unset>" } else { "[REDACTED]" }
}

impl Default for UnsplashConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_key: String::new(),
            timeout_secs: default_timeout_secs(),
            orientation: default_orientation(),
        }
    }
}

impl UnsplashConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            access_key: "test-access-key".to_string(),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Image lookups are only attempted with an access key
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.access_key.trim().is_empty()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
