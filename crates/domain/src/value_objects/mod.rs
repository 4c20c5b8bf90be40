//! Value Objects - Immutable, identity-less domain primitives

mod geo_point;
mod travel_mode;

pub use geo_point::GeoPoint;
pub use travel_mode::TravelMode;
