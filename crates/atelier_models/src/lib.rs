//! Provider integrations for Atelier.
//!
//! This crate holds everything that talks to the network: the chat and image
//! generation clients, the image fetcher, and the resolver that turns an
//! image generation response into an inline image. The pipeline depends only
//! on the [`ChatDriver`], [`ImageDriver`] and [`ImageFetcher`] traits.

mod config;
mod driver;
mod fetch;
pub mod images;
pub mod openai_compat;
mod policy;
mod resolver;

pub use config::{
    DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_IMAGE_SIZE, DEFAULT_POLICY_MARKERS,
    DEFAULT_TEXT_MODEL, DEFAULT_VISION_MODEL, ENV_API_KEY, ENV_BASE_URL, ENV_IMAGE_MODEL,
    ENV_IMAGE_SIZE, ENV_TEXT_MODEL, ENV_VISION_MODEL, ProviderConfig, ProviderConfigBuilder,
};
pub use driver::{ChatDriver, FetchedImage, ImageDriver, ImageFetcher};
pub use fetch::HttpImageFetcher;
pub use images::ImageClient;
pub use openai_compat::ChatClient;
pub use policy::{classify_failure, find_policy_marker};
pub use resolver::ImageResolver;
