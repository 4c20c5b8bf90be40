//! GraphHopper integration for Wayfinder
//!
//! Provides free-text geocoding and alternative-route retrieval via the
//! [GraphHopper Directions API](https://docs.graphhopper.com).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with the other
//! integration crates. [`GeocodingClient`] resolves place names and is
//! implemented by [`GraphHopperGeocodingClient`]. [`RoutingClient`] fetches
//! alternative paths between two points and is implemented by
//! [`GraphHopperRoutingClient`]. Both clients make exactly one HTTP request
//! per call; retry policy lives with the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_graphhopper::{GraphHopperConfig, GraphHopperRoutingClient, RoutingClient};
//!
//! let config = GraphHopperConfig {
//!     api_key: "my-key".to_string(),
//!     ..GraphHopperConfig::default()
//! };
//! let client = GraphHopperRoutingClient::new(&config)?;
//!
//! let paths = client.route(pune, hyderabad, "car").await?;
//! ```

mod client;
mod config;
mod error;
mod geocoding;
mod models;

pub use client::{GraphHopperRoutingClient, RoutingClient};
pub use config::GraphHopperConfig;
pub use error::GraphHopperError;
pub use geocoding::{GeocodingClient, GraphHopperGeocodingClient};
pub use models::{GeocodeHit, GeocodeResponse, HitPoint, RoutePath, RouteResponse};
