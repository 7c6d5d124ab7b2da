//! Type conversions between Atelier and the image wire format.

use crate::ProviderConfig;
use crate::images::{ImageGenerationRequest, ImageGenerationResponse};
use atelier_core::{GeneratedImage, ImageGeneration, ImageRequest};
use atelier_error::ValidationError;

/// Builds the request body for `req` under `config`.
pub fn to_generation_request(
    req: &ImageRequest,
    config: &ProviderConfig,
) -> Result<ImageGenerationRequest, ValidationError> {
    if req.prompt().trim().is_empty() {
        return Err(ValidationError::field(
            "image_request",
            "prompt",
            "must not be blank",
        ));
    }

    ImageGenerationRequest::builder()
        .model(config.image_model().clone())
        .prompt(req.prompt().clone())
        .n(*config.image_count())
        .size(config.image_size().clone())
        .build()
        .map_err(|e| ValidationError::field("image_request", "$", e.to_string()))
}

/// Converts the wire response. Entries without a URL are kept so the
/// resolver can report the missing field.
pub fn from_generation_response(response: ImageGenerationResponse) -> ImageGeneration {
    ImageGeneration::new(
        response
            .into_entries()
            .into_iter()
            .map(|entry| GeneratedImage::new(entry.url))
            .collect(),
    )
}
