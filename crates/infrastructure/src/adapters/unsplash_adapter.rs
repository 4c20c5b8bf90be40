//! Unsplash adapter - Implements ImageLookupPort using integration_unsplash

use application::error::ProviderError;
use application::ports::ImageLookupPort;
use async_trait::async_trait;
use integration_unsplash::{ImageSearchClient, UnsplashClient, UnsplashConfig, UnsplashError};
use tracing::instrument;

/// Adapter for the Unsplash photo search API
#[derive(Debug)]
pub struct UnsplashAdapter {
    client: UnsplashClient,
}

impl UnsplashAdapter {
    /// Create a new adapter
    ///
    /// # Errors
    ///
    /// Returns an error if no access key is configured or the HTTP client
    /// fails to initialize.
    pub fn new(config: &UnsplashConfig) -> Result<Self, UnsplashError> {
        Ok(Self {
            client: UnsplashClient::new(config)?,
        })
    }

    fn map_error(error: UnsplashError) -> ProviderError {
        match error {
            UnsplashError::ConnectionFailed(msg) => ProviderError::Connection(msg),
            UnsplashError::NotConfigured => ProviderError::Connection(error.to_string()),
            UnsplashError::Timeout { timeout_secs } => ProviderError::Timeout { timeout_secs },
            UnsplashError::RequestFailed { status } => ProviderError::Status {
                status,
                message: String::new(),
            },
            UnsplashError::ParseError(msg) => ProviderError::Parse(msg),
        }
    }
}

#[async_trait]
impl ImageLookupPort for UnsplashAdapter {
    #[instrument(skip(self))]
    async fn find_image(&self, query: &str) -> Result<Option<String>, ProviderError> {
        self.client
            .first_photo_url(query)
            .await
            .map_err(Self::map_error)
    }
}
