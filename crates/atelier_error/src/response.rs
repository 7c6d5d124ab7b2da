//! Malformed provider response errors.

/// A provider answered successfully but a required response field is absent.
///
/// # Examples
///
/// ```
/// use atelier_error::MalformedResponseError;
///
/// let err = MalformedResponseError::new("images[0].url", "no image URL in response");
/// assert!(format!("{}", err).contains("images[0].url"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Malformed Response: missing '{}': {} at line {} in {}",
    field,
    message,
    line,
    file
)]
pub struct MalformedResponseError {
    /// Path of the missing field, e.g. `choices[0].message.content`
    pub field: String,
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl MalformedResponseError {
    /// Create a new MalformedResponseError at the current location.
    #[track_caller]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            field: field.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
