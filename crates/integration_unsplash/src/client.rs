//! Unsplash photo search client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::UnsplashConfig;
use crate::error::UnsplashError;
use crate::models::SearchResponse;

/// Trait for image search clients
#[async_trait]
pub trait ImageSearchClient: Send + Sync {
    /// URL of the top result for `query`, or `None` when nothing matches
    async fn first_photo_url(&self, query: &str) -> Result<Option<String>, UnsplashError>;
}

/// Unsplash-based image search client
#[derive(Debug)]
pub struct UnsplashClient {
    client: Client,
    config: UnsplashConfig,
}

impl UnsplashClient {
    /// Create a new Unsplash client
    ///
    /// # Errors
    ///
    /// Returns an error if no access key is configured or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &UnsplashConfig) -> Result<Self, UnsplashError> {
        if !config.is_enabled() {
            return Err(UnsplashError::NotConfigured);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("Wayfinder/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UnsplashError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl ImageSearchClient for UnsplashClient {
    #[instrument(skip(self))]
    async fn first_photo_url(&self, query: &str) -> Result<Option<String>, UnsplashError> {
        let url = format!("{}/search/photos", self.config.base_url);
        let params = [
            ("query", query),
            ("client_id", self.config.access_key.as_str()),
            ("orientation", self.config.orientation.as_str()),
            ("per_page", "1"),
        ];

        debug!(%query, "Searching photos");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| UnsplashError::from_send(&e, self.config.timeout_secs))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UnsplashError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| UnsplashError::ParseError(e.to_string()))?;

        let url = body.results.into_iter().next().map(|photo| photo.urls.regular);
        debug!(%query, found = url.is_some(), "Photo search complete");

        Ok(url)
    }
}
