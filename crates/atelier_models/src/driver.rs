//! Async seams between the pipeline and the network.
//!
//! The pipeline depends only on these traits; the reqwest-backed clients in
//! this crate are one implementation, test doubles are another.

use async_trait::async_trait;
use atelier_core::{GenerateRequest, ImageGeneration, ImageRequest, TextCompletion};
use atelier_error::AtelierResult;
use derive_getters::Getters;

/// Sends chat completion requests to a text or vision model.
#[async_trait]
pub trait ChatDriver: Send + Sync {
    /// Issues one completion call and returns the first candidate's text.
    ///
    /// # Errors
    ///
    /// Returns a configuration, transient, HTTP, policy or malformed-response
    /// error. The call is never retried.
    async fn complete(&self, request: &GenerateRequest) -> AtelierResult<TextCompletion>;
}

/// Sends image generation requests.
#[async_trait]
pub trait ImageDriver: Send + Sync {
    /// Issues one generation call and returns the provider's image references.
    async fn generate(&self, request: &ImageRequest) -> AtelierResult<ImageGeneration>;
}

/// Downloads generated images.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Fetches the bytes behind `url`.
    ///
    /// # Errors
    ///
    /// Any failure to obtain the bytes is a transient error.
    async fn fetch(&self, url: &str) -> AtelierResult<FetchedImage>;
}

/// Raw bytes of a downloaded image plus the content type the host declared.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct FetchedImage {
    /// Image bytes
    bytes: Vec<u8>,
    /// `Content-Type` header, if any
    content_type: Option<String>,
}

impl FetchedImage {
    /// Creates a fetched image.
    pub fn new(bytes: Vec<u8>, content_type: Option<String>) -> Self {
        Self {
            bytes,
            content_type,
        }
    }
}
