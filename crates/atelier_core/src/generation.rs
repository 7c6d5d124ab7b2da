//! Request and response types for image generation.

use serde::{Deserialize, Serialize};

/// Provider-neutral image generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ImageRequest {
    /// Caption describing the image to generate
    prompt: String,
}

impl ImageRequest {
    /// Creates a request for `prompt`.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// A generated image reference.
///
/// The URL is optional because providers do not reliably include it;
/// consumers decide whether its absence is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GeneratedImage {
    /// Retrievable URL of the image
    url: Option<String>,
}

impl GeneratedImage {
    /// Creates a reference.
    pub fn new(url: Option<String>) -> Self {
        Self { url }
    }
}

/// What an image provider returned.
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct ImageGeneration {
    /// Generated images, in provider order
    images: Vec<GeneratedImage>,
}

impl ImageGeneration {
    /// Creates a generation result.
    pub fn new(images: Vec<GeneratedImage>) -> Self {
        Self { images }
    }
}
