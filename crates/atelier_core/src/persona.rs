//! Optional descriptors of the end user.

use atelier_error::{FieldViolation, ValidationError};
use serde::{Deserialize, Serialize};

/// Descriptors used to personalise generated prose.
///
/// Every field is independently optional. Absent fields are left out of
/// prompts entirely; they are never replaced with a placeholder.
///
/// # Examples
///
/// ```
/// use atelier_core::Persona;
///
/// let persona = Persona::builder().gender("女").age(28u32).build().unwrap();
/// assert_eq!(persona.gender().as_deref(), Some("女"));
/// assert!(persona.weight_kg().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[serde(rename_all = "camelCase", default)]
#[builder(setter(into, strip_option), default)]
pub struct Persona {
    /// Gender, free text (e.g. "女", "男")
    gender: Option<String>,
    /// Age in years
    age: Option<u32>,
    /// Weight in kilograms
    weight_kg: Option<u32>,
    /// Height in centimetres
    height_cm: Option<u32>,
    /// Skin tone, free text (e.g. "自然", "白皙")
    skin_tone: Option<String>,
}

impl Persona {
    /// Returns a builder for constructing a Persona.
    pub fn builder() -> PersonaBuilder {
        PersonaBuilder::default()
    }

    /// Returns true when no descriptor is set.
    pub fn is_empty(&self) -> bool {
        self.gender_text().is_none()
            && self.age.is_none()
            && self.weight_kg.is_none()
            && self.height_cm.is_none()
            && self.skin_tone_text().is_none()
    }

    /// Gender, treating blank text as absent.
    pub fn gender_text(&self) -> Option<&str> {
        non_blank(self.gender.as_deref())
    }

    /// Skin tone, treating blank text as absent.
    pub fn skin_tone_text(&self) -> Option<&str> {
        non_blank(self.skin_tone.as_deref())
    }

    /// Rejects numeric descriptors that cannot describe a person.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        if self.age == Some(0) {
            violations.push(FieldViolation::new("persona.age", "must be a positive integer"));
        }
        if self.weight_kg == Some(0) {
            violations.push(FieldViolation::new(
                "persona.weightKg",
                "must be a positive integer",
            ));
        }
        if self.height_cm == Some(0) {
            violations.push(FieldViolation::new(
                "persona.heightCm",
                "must be a positive integer",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new("persona", violations))
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_counts_as_absent() {
        let persona = Persona::builder().gender("  ").build().unwrap();
        assert!(persona.is_empty());
        assert_eq!(persona.gender_text(), None);
    }

    #[test]
    fn test_zero_age_rejected() {
        let persona = Persona::builder().age(0u32).height_cm(0u32).build().unwrap();
        let err = persona.validate().unwrap_err();
        assert!(err.names_field("persona.age"));
        assert!(err.names_field("persona.heightCm"));
    }

    #[test]
    fn test_deserializes_with_missing_fields() {
        let persona: Persona = serde_json::from_str(r#"{"skinTone":"自然"}"#).unwrap();
        assert_eq!(persona.skin_tone_text(), Some("自然"));
        assert!(persona.age().is_none());
    }
}
