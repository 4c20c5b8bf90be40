//! Ports - interfaces to external providers
//!
//! Adapters in the infrastructure layer implement these traits on top of
//! the integration clients.

mod geocoding_port;
mod image_lookup_port;
mod routing_port;

pub use geocoding_port::GeocodingPort;
pub use image_lookup_port::ImageLookupPort;
pub use routing_port::{RawRoute, RoutingPort};

#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
#[cfg(test)]
pub use image_lookup_port::MockImageLookupPort;
#[cfg(test)]
pub use routing_port::MockRoutingPort;
