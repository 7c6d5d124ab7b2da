//! Core data types for the Atelier outfit generation pipeline.
//!
//! This crate provides the request, result and provider-neutral message
//! types shared by every other Atelier crate.

mod creativity;
mod generation;
mod input;
mod media;
mod message;
pub mod observability;
mod operation;
mod outcome;
mod persona;
mod request;
mod role;

pub use creativity::CreativityLevel;
pub use generation::{GeneratedImage, ImageGeneration, ImageRequest};
pub use input::Input;
pub use media::{DEFAULT_IMAGE_MIME, InlineImage};
pub use message::Message;
pub use operation::{
    CatalogRequest, DEFAULT_EXPLORE_COUNT, ExploreItemsRequest, ExploreOutfitRequest,
    GenerateNameRequest, IdentifyAttributesRequest, MAX_EXPLORE_COUNT, OutfitImageRequest,
    RecommendRequest,
};
pub use outcome::{
    CatalogedItem, ClothingAttributes, ClothingName, ExplorableItem, IllustratedOutfit,
    IllustratedRecommendation, NameSource, NewOutfit, Recommendation,
};
pub use persona::{Persona, PersonaBuilder};
pub use request::{GenerateRequest, GenerateRequestBuilder, TextCompletion};
pub use role::Role;
