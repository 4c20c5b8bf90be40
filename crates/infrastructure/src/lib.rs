//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer on top of the
//! GraphHopper and Unsplash integration clients, and loads the
//! application configuration.

pub mod adapters;
pub mod config;

pub use adapters::*;
pub use crate::config::{AppConfig, AppConfigError, GeocoderAppConfig, ServerConfig};
