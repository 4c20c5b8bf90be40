//! Best-effort place imagery
//!
//! Image lookups are decorative: every failure degrades to "no image" and
//! never affects route planning.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::ports::ImageLookupPort;

/// Looks up a representative image URL for a place name
#[derive(Clone)]
pub struct PlaceImageService {
    port: Arc<dyn ImageLookupPort>,
}

impl std::fmt::Debug for PlaceImageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaceImageService").finish_non_exhaustive()
    }
}

impl PlaceImageService {
    #[must_use]
    pub fn new(port: Arc<dyn ImageLookupPort>) -> Self {
        Self { port }
    }

    /// Image URL for `place`, or `None` on a blank place, no result or any failure
    #[instrument(skip(self))]
    pub async fn image_for(&self, place: &str) -> Option<String> {
        let place = place.trim();
        if place.is_empty() {
            return None;
        }

        match self.port.find_image(place).await {
            Ok(Some(url)) => {
                debug!(%place, "Found place image");
                Some(url)
            },
            Ok(None) => {
                debug!(%place, "No image for place");
                None
            },
            Err(e) => {
                warn!(%place, error = %e, "Image lookup failed");
                None
            },
        }
    }

    /// Look up images for both ends of a route concurrently
    pub async fn images_for(&self, start: &str, end: &str) -> (Option<String>, Option<String>) {
        tokio::join!(self.image_for(start), self.image_for(end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::ports::MockImageLookupPort;

    #[tokio::test]
    async fn returns_first_result() {
        let mut port = MockImageLookupPort::new();
        port.expect_find_image()
            .withf(|q| q == "Taj Mahal")
            .times(1)
            .returning(|_| Ok(Some("https://images.example/taj.jpg".to_string())));

        let service = PlaceImageService::new(Arc::new(port));
        assert_eq!(
            service.image_for("Taj Mahal").await.as_deref(),
            Some("https://images.example/taj.jpg")
        );
    }

    #[tokio::test]
    async fn blank_place_skips_lookup() {
        let mut port = MockImageLookupPort::new();
        port.expect_find_image().never();

        let service = PlaceImageService::new(Arc::new(port));
        assert_eq!(service.image_for("  ").await, None);
    }

    #[tokio::test]
    async fn failure_degrades_to_none() {
        let mut port = MockImageLookupPort::new();
        port.expect_find_image()
            .returning(|_| Err(ProviderError::Timeout { timeout_secs: 10 }));

        let service = PlaceImageService::new(Arc::new(port));
        assert_eq!(service.image_for("Goa").await, None);
    }

    #[tokio::test]
    async fn looks_up_both_ends() {
        let mut port = MockImageLookupPort::new();
        port.expect_find_image().returning(|q| {
            Ok((q == "Mumbai").then(|| "https://images.example/mumbai.jpg".to_string()))
        });

        let service = PlaceImageService::new(Arc::new(port));
        let (start, end) = service.images_for("Mumbai", "Nowhere").await;
        assert_eq!(start.as_deref(), Some("https://images.example/mumbai.jpg"));
        assert_eq!(end, None);
    }
}
