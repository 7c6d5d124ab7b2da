//! HTTP download of generated images.

use crate::{FetchedImage, ImageFetcher};
use async_trait::async_trait;
use atelier_error::{AtelierResult, TransientError};
use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use tracing::{debug, error, instrument};

/// Fetches image bytes with a plain GET, bypassing intermediate caches.
#[derive(Debug, Clone, Default)]
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    /// Creates a fetcher with a fresh HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fetcher that shares an existing HTTP client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> AtelierResult<FetchedImage> {
        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Image host unreachable");
                TransientError::new(format!("Failed to fetch image: {}", e)).with_url(url)
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, "Image host returned an error status");
            return Err(TransientError::new(format!("Image host returned {}", status))
                .with_url(url)
                .with_status(status.as_u16())
                .into());
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let bytes = response.bytes().await.map_err(|e| {
            error!(error = ?e, "Failed to read image body");
            TransientError::new(format!("Failed to read image body: {}", e)).with_url(url)
        })?;

        if bytes.is_empty() {
            return Err(TransientError::new("Image host returned an empty body")
                .with_url(url)
                .with_status(status.as_u16())
                .into());
        }

        debug!(len = bytes.len(), content_type = ?content_type, "Fetched image");
        Ok(FetchedImage::new(bytes.to_vec(), content_type))
    }
}
