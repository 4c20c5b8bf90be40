//! Application layer - Use cases and orchestration
//!
//! Defines the provider ports and the route-planning pipeline:
//! geocoding with a one-shot fallback, alternative-route retrieval and
//! route normalization, plus the independent place-image enrichment.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{PipelineError, ProviderError};
pub use ports::*;
pub use services::*;
