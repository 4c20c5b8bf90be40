//! Unsplash integration for Wayfinder
//!
//! Looks up a representative landscape photo for a place name via the
//! [Unsplash search API](https://unsplash.com/documentation#search-photos).
//! [`ImageSearchClient`] defines the interface and is implemented by
//! [`UnsplashClient`].

mod client;
mod config;
mod error;
mod models;

pub use client::{ImageSearchClient, UnsplashClient};
pub use config::UnsplashConfig;
pub use error::UnsplashError;
pub use models::{Photo, PhotoUrls, SearchResponse};
