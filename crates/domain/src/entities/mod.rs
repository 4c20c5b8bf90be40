//! Entities produced by the route-planning pipeline

mod route;
mod route_set;

pub use route::{NormalizedRoute, PALETTE, color_for_index, round_to_hundredths};
pub use route_set::RouteSet;
