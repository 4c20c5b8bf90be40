//! Domain layer for Wayfinder
//!
//! Contains the route-planning value objects, entities, the polyline codec
//! and domain errors. This layer performs no I/O and defines the ubiquitous
//! language shared by every other crate.

pub mod entities;
pub mod errors;
pub mod polyline;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use polyline::PolylineError;
pub use value_objects::*;
