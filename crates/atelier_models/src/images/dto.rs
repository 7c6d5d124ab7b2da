//! Data transfer objects for image generation.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Image generation request body.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ImageGenerationRequest {
    /// Model identifier
    model: String,
    /// Caption to render
    prompt: String,
    /// Number of images
    n: u32,
    /// `<width>x<height>`
    size: String,
    /// Always `"url"`; images are fetched separately
    #[builder(default = "\"url\".to_string()")]
    response_format: String,
}

impl ImageGenerationRequest {
    /// Creates a new builder for ImageGenerationRequest.
    pub fn builder() -> ImageGenerationRequestBuilder {
        ImageGenerationRequestBuilder::default()
    }
}

/// One generated image reference.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageEntry {
    /// Retrievable URL
    #[serde(default)]
    pub url: Option<String>,
}

/// Image generation response.
///
/// Some providers list images under `images`, others under `data`, and some
/// send both.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageGenerationResponse {
    /// References under the `images` key
    #[serde(default)]
    pub images: Option<Vec<ImageEntry>>,
    /// References under the `data` key
    #[serde(default)]
    pub data: Option<Vec<ImageEntry>>,
}

impl ImageGenerationResponse {
    /// The first non-empty list, preferring `images`.
    pub fn into_entries(self) -> Vec<ImageEntry> {
        match (self.images, self.data) {
            (Some(images), _) if !images.is_empty() => images,
            (_, Some(data)) => data,
            (images, None) => images.unwrap_or_default(),
        }
    }

    /// Number of references in the list [`into_entries`](Self::into_entries) picks.
    pub fn entry_count(&self) -> usize {
        [&self.images, &self.data]
            .into_iter()
            .flatten()
            .map(Vec::len)
            .find(|len| *len > 0)
            .unwrap_or(0)
    }
}
