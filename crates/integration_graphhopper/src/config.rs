//! GraphHopper service configuration

use std::fmt;

use serde::{Deserialize, Serialize};

/// Configuration for the GraphHopper geocoding and routing APIs
#[derive(Clone, Serialize, Deserialize)]
pub struct GraphHopperConfig {
    /// Base URL for the GraphHopper API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as the `key` query parameter
    #[serde(default)]
    pub api_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Locale for instructions and geocoding results
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Maximum number of alternative paths requested
    #[serde(default = "default_max_paths")]
    pub max_paths: u8,
}

fn default_base_url() -> String {
    "https://graphhopper.com/api/1".to_string()
}

const fn default_timeout_secs() -> u64 {
    15
}

fn default_locale() -> String {
    "en".to_string()
}

const fn default_max_paths() -> u8 {
    3
}

impl fmt::Debug for GraphHopperConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphHopperConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &redacted(&self.api_key))
            .field("timeout_secs", &self.timeout_secs)
            .field("locale", &self.locale)
            .field("max_paths", &self.max_paths)
            .finish()
    }
}

const fn redacted(secret: &str) -> &'static str {
    if secret.is_empty() { "<unset>" } else { "[REDACTED]" }
}

impl Default for GraphHopperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            locale: default_locale(),
            max_paths: default_max_paths(),
        }
    }
}

impl GraphHopperConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: "test-key".to_string(),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Check if an API key is present
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
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

        if !self.has_api_key() {
            return Err("api_key must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.locale.is_empty() {
            return Err("locale must not be empty".to_string());
        }

        if self.max_paths == 0 {
            return Err("max_paths must be greater than 0".to_string());
        }

        if self.max_paths > 5 {
            return Err("max_paths must be 5 or less".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GraphHopperConfig::default();
        assert_eq!(config.base_url, "https://graphhopper.com/api/1");
        assert!(config.api_key.is_empty());
        assert_eq!(config.timeout_secs, 15);
        assert_eq!(config.locale, "en");
        assert_eq!(config.max_paths, 3);
    }

    #[test]
    fn test_testing_config() {
        let config = GraphHopperConfig::for_testing();
        assert_eq!(config.timeout_secs, 5);
        assert!(config.has_api_key());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_missing_key() {
        let config = GraphHopperConfig::default();
        let err = config.validate().unwrap_err();
        assert!(err.contains("api_key"));

        let config = GraphHopperConfig {
            api_key: "   ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = GraphHopperConfig {
            base_url: String::new(),
            ..GraphHopperConfig::for_testing()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = GraphHopperConfig {
            timeout_secs: 0,
            ..GraphHopperConfig::for_testing()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_max_paths_bounds() {
        let config = GraphHopperConfig {
            max_paths: 0,
            ..GraphHopperConfig::for_testing()
        };
        assert!(config.validate().is_err());

        let config = GraphHopperConfig {
            max_paths: 6,
            ..GraphHopperConfig::for_testing()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let config: GraphHopperConfig = serde_json::from_str(r#"{"api_key": "abc"}"#).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.timeout_secs, 15);
        assert_eq!(config.max_paths, 3);
        assert_eq!(config.base_url, "https://graphhopper.com/api/1");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = GraphHopperConfig::for_testing();
        let debug = format!("{config:?}");
        assert!(!debug.contains(&config.api_key));
        assert!(debug.contains("[REDACTED]"));
    }
}
