//! Client for OpenAI-style image generation endpoints.

mod client;
mod conversions;
mod dto;

pub use client::ImageClient;
pub use conversions::{from_generation_response, to_generation_request};
pub use dto::{
    ImageEntry, ImageGenerationRequest, ImageGenerationRequestBuilder, ImageGenerationResponse,
};
