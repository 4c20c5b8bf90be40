//! Adapters implementing application ports

mod graphhopper_adapter;
mod unsplash_adapter;

pub use graphhopper_adapter::GraphHopperAdapter;
pub use unsplash_adapter::UnsplashAdapter;
