//! Application services
//!
//! Services orchestrate domain logic with port implementations.

mod geocoder;
mod place_image_service;
mod route_normalizer;
mod route_planner;

pub use geocoder::{Geocoder, GeocoderConfig};
pub use place_image_service::PlaceImageService;
pub use route_normalizer::{NormalizeError, normalize};
pub use route_planner::RoutePlanner;
