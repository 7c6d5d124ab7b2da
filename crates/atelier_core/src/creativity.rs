//! Creativity level for recommendations.

use atelier_error::ValidationError;
use serde::{Deserialize, Serialize};

/// How adventurous a recommendation may be, from 1 (conservative) to 10 (bold).
///
/// The range is closed and checked at construction, so a value of this type
/// is always in range.
///
/// # Examples
///
/// ```
/// use atelier_core::CreativityLevel;
///
/// let level = CreativityLevel::new(5).unwrap();
/// assert_eq!(level.get(), 5);
/// assert!(CreativityLevel::new(11).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "u8")]
pub struct CreativityLevel(u8);

impl CreativityLevel {
    /// Lowest accepted level.
    pub const MIN: u8 = 1;
    /// Highest accepted level.
    pub const MAX: u8 = 10;

    /// Validates `level` against the closed range.
    #[track_caller]
    pub fn new(level: i64) -> Result<Self, ValidationError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&level) {
            Ok(Self(level as u8))
        } else {
            Err(ValidationError::field(
                "creativity",
                "creativityLevel",
                format!(
                    "must be an integer between {} and {}, got {}",
                    Self::MIN,
                    Self::MAX,
                    level
                ),
            ))
        }
    }

    /// The level as a plain integer.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Sampling temperature for this level: 0.37 at level 1 up to 1.0 at level 10.
    pub fn temperature(self) -> f32 {
        0.3 + 0.07 * f32::from(self.0)
    }
}

impl TryFrom<i64> for CreativityLevel {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CreativityLevel> for u8 {
    fn from(level: CreativityLevel) -> Self {
        level.0
    }
}

impl std::fmt::Display for CreativityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(CreativityLevel::new(1).is_ok());
        assert!(CreativityLevel::new(10).is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        for level in [-5, 0, 11, 15, 255, i64::MAX] {
            let err = CreativityLevel::new(level).unwrap_err();
            assert!(err.names_field("creativityLevel"), "level {}", level);
        }
    }

    #[test]
    fn test_temperature_stays_within_sampling_range() {
        let low = CreativityLevel::new(1).unwrap().temperature();
        let high = CreativityLevel::new(10).unwrap().temperature();
        assert!((low - 0.37).abs() < 1e-6);
        assert!((high - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<CreativityLevel>("7").is_ok());
        assert!(serde_json::from_str::<CreativityLevel>("12").is_err());
    }
}
