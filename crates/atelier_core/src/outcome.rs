//! Validated results returned to callers.

use crate::InlineImage;
use serde::{Deserialize, Serialize};

/// Attributes identified in a garment photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingAttributes {
    /// Attributes such as colour, material, style and garment type
    pub attributes: Vec<String>,
}

/// A generated garment name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingName {
    /// Short descriptive name
    pub name: String,
}

/// Where a cataloged garment's name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum NameSource {
    /// Produced by the text model
    #[display("generated")]
    Generated,
    /// Name generation failed; the caller's fallback was used
    #[display("fallback")]
    Fallback,
}

/// A garment identified and named from a photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogedItem {
    /// Identified attributes
    pub attributes: Vec<String>,
    /// Display name
    pub name: String,
    /// Whether `name` was generated or fell back
    pub name_source: NameSource,
}

/// An outfit recommended from the user's closet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Prose description of the outfit and why it suits the occasion
    pub recommended_outfit: String,
    /// Garment-only caption for image generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt_details: Option<String>,
}

impl Recommendation {
    /// The image caption, if present and not blank.
    pub fn image_caption(&self) -> Option<&str> {
        self.image_prompt_details
            .as_deref()
            .map(str::trim)
            .filter(|caption| !caption.is_empty())
    }
}

/// A recommendation plus its illustration, when one could be requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IllustratedRecommendation {
    /// The text recommendation
    pub recommendation: Recommendation,
    /// Rendered outfit; absent when the model gave no image caption
    pub image: Option<InlineImage>,
}

/// A new outfit built around explorable items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOutfit {
    /// Prose description of the outfit
    pub description: String,
    /// Garment-only caption for image generation
    pub image_prompt_details: String,
}

/// A new outfit plus its illustration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IllustratedOutfit {
    /// The text recommendation
    pub outfit: NewOutfit,
    /// Rendered outfit
    pub image: InlineImage,
}

/// A fashion item or style suggested for exploration.
///
/// Generated fresh per request and never persisted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorableItem {
    /// Identifier unique to this generation
    pub id: String,
    /// Concise name
    pub name: String,
    /// One or two sentence description
    pub description: String,
}
