//! Place image lookup port

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ProviderError;

/// Port for finding an illustrative photo of a place
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ImageLookupPort: Send + Sync {
    /// Return the display URL of the first matching landscape photo
    async fn find_image(&self, query: &str) -> Result<Option<String>, ProviderError>;
}
