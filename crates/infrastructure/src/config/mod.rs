//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `geocoder`: Geocoding fallback policy
//!
//! Provider sections reuse the integration crates' own config types.
//!
//! Sources are layered: built-in defaults, then an optional `config.toml`,
//! then `WAYFINDER_*` environment variables with `__` between nested keys
//! (e.g. `WAYFINDER_GRAPHHOPPER__API_KEY`).

mod geocoder;
mod server;

use integration_graphhopper::GraphHopperConfig;
use integration_unsplash::UnsplashConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub use geocoder::GeocoderAppConfig;
pub use server::ServerConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "WAYFINDER";

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum AppConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A section failed validation
    #[error("Invalid [{section}] configuration: {reason}")]
    Invalid {
        /// Offending section name
        section: &'static str,
        /// Validation failure
        reason: String,
    },
}

impl AppConfigError {
    fn invalid(section: &'static str) -> impl FnOnce(String) -> Self {
        move |reason| Self::Invalid { section, reason }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// GraphHopper geocoding and routing configuration
    #[serde(default)]
    pub graphhopper: GraphHopperConfig,

    /// Geocoding fallback configuration
    #[serde(default)]
    pub geocoder: GeocoderAppConfig,

    /// Unsplash place imagery configuration (optional)
    #[serde(default)]
    pub unsplash: Option<UnsplashConfig>,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and the environment
    pub fn load() -> Result<Self, AppConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the named file (extension optional, file may be absent)
    pub fn load_from(name: &str) -> Result<Self, AppConfigError> {
        debug!(file = %name, "Loading configuration");
        Self::from_sources(
            config::File::with_name(name).required(false),
            Self::env_source(),
        )
    }

    /// Environment source with the `WAYFINDER_` prefix and `__` key separator
    fn env_source() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("server.allowed_origins")
    }

    fn from_sources<F>(file: F, env: config::Environment) -> Result<Self, AppConfigError>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., WAYFINDER_SERVER__PORT)
            .add_source(env)
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            server: ServerConfig::default(),
            graphhopper: GraphHopperConfig::for_testing(),
            geocoder: GeocoderAppConfig::for_testing(),
            unsplash: None,
        }
    }

    /// Unsplash configuration, if image lookups are enabled
    #[must_use]
    pub fn unsplash_enabled(&self) -> Option<&UnsplashConfig> {
        self.unsplash.as_ref().filter(|c| c.is_enabled())
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first section that fails validation. A missing GraphHopper
    /// API key is always an error.
    pub fn validate(&self) -> Result<(), AppConfigError> {
        let invalid = AppConfigError::invalid;

        self.server.validate().map_err(invalid("server"))?;
        self.graphhopper.validate().map_err(invalid("graphhopper"))?;
        self.geocoder.validate().map_err(invalid("geocoder"))?;

        if let Some(unsplash) = &self.unsplash {
            unsplash.validate().map_err(invalid("unsplash"))?;
            if !unsplash.is_enabled() {
                warn!("Unsplash section present without access_key, place images disabled");
            }
        }

        Ok(())
    }
}
