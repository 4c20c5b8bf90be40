//! Application state shared across handlers

use std::sync::Arc;

use application::{PlaceImageService, RoutePlanner};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Geocode-fetch-normalize pipeline
    pub planner: Arc<RoutePlanner>,
    /// Place imagery, absent when no Unsplash key is configured
    pub images: Option<Arc<PlaceImageService>>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("planner", &self.planner)
            .field("images_enabled", &self.images.is_some())
            .finish()
    }
}
