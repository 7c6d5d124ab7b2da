//! Caller-facing request types, one per use case.

use crate::{CreativityLevel, InlineImage, Persona};
use atelier_error::{FieldViolation, ValidationError};
use serde::{Deserialize, Serialize};

/// Default number of explorable items generated per request.
pub const DEFAULT_EXPLORE_COUNT: u32 = 10;
/// Largest number of explorable items a single request may ask for.
pub const MAX_EXPLORE_COUNT: u32 = 30;

fn require_text(violations: &mut Vec<FieldViolation>, field: &str, value: &str) {
    if value.trim().is_empty() {
        violations.push(FieldViolation::new(field, "must not be blank"));
    }
}

fn require_items(violations: &mut Vec<FieldViolation>, field: &str, items: &[String]) {
    if items.iter().all(|item| item.trim().is_empty()) {
        violations.push(FieldViolation::new(field, "must contain at least one entry"));
    }
}

fn finish(operation: &str, violations: Vec<FieldViolation>) -> Result<(), ValidationError> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(operation, violations))
    }
}

/// Checks the persona and creativity level shared by both recommendation requests.
fn finish_with_creativity(
    operation: &str,
    mut violations: Vec<FieldViolation>,
    persona: &Persona,
    creativity_level: i64,
) -> Result<CreativityLevel, ValidationError> {
    if let Err(err) = persona.validate() {
        violations.extend(err.violations);
    }
    match CreativityLevel::new(creativity_level) {
        Ok(level) if violations.is_empty() => Ok(level),
        Ok(_) => Err(ValidationError::new(operation, violations)),
        Err(err) => {
            violations.extend(err.violations);
            Err(ValidationError::new(operation, violations))
        }
    }
}

/// Identify the attributes of a photographed garment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifyAttributesRequest {
    /// Photo of the garment
    pub image: InlineImage,
}

/// Generate a short display name from garment attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateNameRequest {
    /// Attributes, e.g. `["白色", "棉布", "连衣裙"]`
    pub attributes: Vec<String>,
}

impl GenerateNameRequest {
    /// Rejects an empty attribute list.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        require_items(&mut violations, "attributes", &self.attributes);
        finish("generate_name", violations)
    }
}

/// Identify attributes, then name the garment, falling back to a caller name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRequest {
    /// Photo of the garment
    pub image: InlineImage,
    /// Name used when name generation fails, typically the upload's file name
    pub fallback_name: String,
}

impl CatalogRequest {
    /// Rejects a blank fallback name.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        require_text(&mut violations, "fallbackName", &self.fallback_name);
        finish("catalog_item", violations)
    }
}

/// Recommend an outfit from the user's closet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    /// Mood keywords, e.g. "开心"
    pub mood: String,
    /// Weather description, e.g. "晴朗"
    pub weather: String,
    /// Attributes or names of the garments available in the closet
    pub closet_items: Vec<String>,
    /// Optional user descriptors
    #[serde(default)]
    pub persona: Persona,
    /// Requested creativity, validated against 1..=10
    pub creativity_level: i64,
}

impl RecommendRequest {
    /// Checks every field and returns the validated creativity level.
    pub fn validate(&self) -> Result<CreativityLevel, ValidationError> {
        let mut violations = Vec::new();
        require_text(&mut violations, "mood", &self.mood);
        require_text(&mut violations, "weather", &self.weather);
        require_items(&mut violations, "closetItems", &self.closet_items);
        finish_with_creativity(
            "recommend_from_closet",
            violations,
            &self.persona,
            self.creativity_level,
        )
    }
}

/// Generate a fresh list of explorable fashion items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExploreItemsRequest {
    /// How many items to generate; defaults to [`DEFAULT_EXPLORE_COUNT`]
    pub count: Option<u32>,
}

impl ExploreItemsRequest {
    /// Returns the effective count after range checking.
    pub fn validate(&self) -> Result<u32, ValidationError> {
        let count = self.count.unwrap_or(DEFAULT_EXPLORE_COUNT);
        if (1..=MAX_EXPLORE_COUNT).contains(&count) {
            Ok(count)
        } else {
            Err(ValidationError::field(
                "explore_items",
                "count",
                format!("must be between 1 and {}, got {}", MAX_EXPLORE_COUNT, count),
            ))
        }
    }
}

/// Recommend a new outfit built around selected explorable items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreOutfitRequest {
    /// Names of the explorable items the user picked
    pub selected_items: Vec<String>,
    /// Mood keywords
    pub mood: String,
    /// Weather description
    pub weather: String,
    /// Optional user descriptors
    #[serde(default)]
    pub persona: Persona,
    /// Requested creativity, validated against 1..=10
    pub creativity_level: i64,
}

impl ExploreOutfitRequest {
    /// Checks every field and returns the validated creativity level.
    pub fn validate(&self) -> Result<CreativityLevel, ValidationError> {
        let mut violations = Vec::new();
        require_items(&mut violations, "selectedItems", &self.selected_items);
        require_text(&mut violations, "mood", &self.mood);
        require_text(&mut violations, "weather", &self.weather);
        finish_with_creativity(
            "recommend_from_exploration",
            violations,
            &self.persona,
            self.creativity_level,
        )
    }
}

/// Render an outfit description as an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitImageRequest {
    /// Garment-only description of the outfit
    pub outfit_description: String,
    /// Optional descriptors of the model wearing the outfit
    #[serde(default)]
    pub model_persona: Option<Persona>,
}

impl OutfitImageRequest {
    /// An image request with no model descriptors.
    pub fn garments_only(outfit_description: impl Into<String>) -> Self {
        Self {
            outfit_description: outfit_description.into(),
            model_persona: None,
        }
    }

    /// Rejects a blank description.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        require_text(&mut violations, "outfitDescription", &self.outfit_description);
        if let Some(Err(err)) = self.model_persona.as_ref().map(Persona::validate) {
            violations.extend(err.violations);
        }
        finish("generate_image", violations)
    }
}
