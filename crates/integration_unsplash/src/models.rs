//! Unsplash response models

use serde::{Deserialize, Serialize};

/// Response of `GET /search/photos`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub results: Vec<Photo>,
}

/// One photo search result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Photo {
    pub id: String,
    pub urls: PhotoUrls,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_description: Option<String>,
}

/// Rendition URLs of a photo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhotoUrls {
    /// 1080px wide rendition
    pub regular: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full: Option<String>,
}
