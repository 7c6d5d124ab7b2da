//! Resolution of image generation responses into inline images.

use crate::ImageFetcher;
use atelier_core::{DEFAULT_IMAGE_MIME, ImageGeneration, InlineImage};
use atelier_error::{AtelierResult, MalformedResponseError};
use tracing::{debug, instrument};

/// Turns the first generated image reference into an [`InlineImage`].
#[derive(Debug, Clone)]
pub struct ImageResolver<F> {
    fetcher: F,
}

impl<F: ImageFetcher> ImageResolver<F> {
    /// Creates a resolver over `fetcher`.
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Locates the first image URL, fetches it, and encodes the bytes.
    ///
    /// # Errors
    ///
    /// A response without a usable `images[0].url` is a malformed-response
    /// error and nothing is fetched. Fetch failures are transient errors.
    #[instrument(skip_all, fields(images = generation.images().len()))]
    pub async fn resolve(&self, generation: &ImageGeneration) -> AtelierResult<InlineImage> {
        let url = generation
            .images()
            .first()
            .and_then(|image| image.url().as_deref())
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                MalformedResponseError::new(
                    "images[0].url",
                    "image generation response carried no image URL",
                )
            })?;

        let fetched = self.fetcher.fetch(url).await?;

        let mime_type = fetched
            .content_type()
            .as_deref()
            .map(|value| value.split_once(';').map_or(value, |(mime, _)| mime).trim())
            .filter(|mime| !mime.is_empty())
            .unwrap_or(DEFAULT_IMAGE_MIME);

        debug!(mime_type, len = fetched.bytes().len(), "Resolved generated image");
        Ok(InlineImage::from_bytes(mime_type, fetched.bytes()))
    }
}
