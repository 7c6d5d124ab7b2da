//! Extraction error types.

/// No recovery strategy produced a structured payload from model text.
///
/// # Examples
///
/// ```
/// use atelier_error::ExtractionError;
///
/// let err = ExtractionError::new("recommendation", vec!["recommendedOutfit".into()], "???");
/// assert_eq!(err.raw, "???");
/// assert!(format!("{}", err).contains("recommendedOutfit"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Extraction Error: no structured payload for '{}' (expected keys: {}) in model output {:?} at line {} in {}",
    operation,
    expected_keys.join(", "),
    raw,
    line,
    file
)]
pub struct ExtractionError {
    /// Operation whose output was being extracted
    pub operation: String,
    /// Keys the payload was expected to carry
    pub expected_keys: Vec<String>,
    /// The raw model text, kept for diagnosis
    pub raw: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ExtractionError {
    /// Create a new ExtractionError at the current location.
    #[track_caller]
    pub fn new(
        operation: impl Into<String>,
        expected_keys: Vec<String>,
        raw: impl Into<String>,
    ) -> Self {
        let location = std::panic::Location::caller();
        Self {
            operation: operation.into(),
            expected_keys,
            raw: raw.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
