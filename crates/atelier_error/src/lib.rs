//! Error types for the Atelier library.
//!
//! Every pipeline stage returns one of the error structs in this crate. Each
//! records the source location it was raised from. [`AtelierError`] wraps
//! them all so stages compose with `?`.

mod config;
mod extraction;
mod http;
mod policy;
mod response;
mod transient;
mod validation;

pub use config::ConfigError;
pub use extraction::ExtractionError;
pub use http::HttpError;
pub use policy::PolicyError;
pub use response::MalformedResponseError;
pub use transient::TransientError;
pub use validation::{FieldViolation, ValidationError};

/// Crate-level error variants.
#[derive(Debug, Clone, derive_more::From, derive_more::Display)]
pub enum AtelierErrorKind {
    /// Missing or placeholder credential or endpoint
    #[display("{}", _0)]
    Config(ConfigError),
    /// Provider returned a non-success status
    #[display("{}", _0)]
    Http(HttpError),
    /// Provider rejected the request on content-policy grounds
    #[display("{}", _0)]
    Policy(PolicyError),
    /// Provider returned success but without a required response field
    #[display("{}", _0)]
    MalformedResponse(MalformedResponseError),
    /// No structured payload could be recovered from model text
    #[display("{}", _0)]
    Extraction(ExtractionError),
    /// Input or payload failed its field contract
    #[display("{}", _0)]
    Validation(ValidationError),
    /// Network-level failure
    #[display("{}", _0)]
    Transient(TransientError),
}

/// Atelier error with kind discrimination.
#[derive(Debug, Clone, derive_more::Display)]
#[display("Atelier Error: {}", _0)]
pub struct AtelierError(Box<AtelierErrorKind>);

impl AtelierError {
    /// Create a new error from a kind.
    pub fn new(kind: AtelierErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AtelierErrorKind {
        &self.0
    }

    /// True for content-policy rejections; callers should suggest rewording.
    pub fn is_policy(&self) -> bool {
        matches!(self.kind(), AtelierErrorKind::Policy(_))
    }

    /// True for network-level failures.
    pub fn is_transient(&self) -> bool {
        matches!(self.kind(), AtelierErrorKind::Transient(_))
    }

    /// True for configuration failures, which are never worth retrying.
    pub fn is_configuration(&self) -> bool {
        matches!(self.kind(), AtelierErrorKind::Config(_))
    }

    /// True when the caller's input or the model's payload broke a contract.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), AtelierErrorKind::Validation(_))
    }
}

impl std::error::Error for AtelierError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            AtelierErrorKind::Config(e) => Some(e),
            AtelierErrorKind::Http(e) => Some(e),
            AtelierErrorKind::Policy(e) => Some(e),
            AtelierErrorKind::MalformedResponse(e) => Some(e),
            AtelierErrorKind::Extraction(e) => Some(e),
            AtelierErrorKind::Validation(e) => Some(e),
            AtelierErrorKind::Transient(e) => Some(e),
        }
    }
}

// Generic From implementation for any type that converts to AtelierErrorKind
impl<T> From<T> for AtelierError
where
    T: Into<AtelierErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Atelier operations.
pub type AtelierResult<T> = std::result::Result<T, AtelierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_mark_lifts_stage_errors() {
        fn stage() -> AtelierResult<()> {
            let rejected: Result<(), PolicyError> =
                Err(PolicyError::new(400, "body", "SAFETY_FILTER_TRIGGERED"));
            rejected?;
            Ok(())
        }

        let err = stage().unwrap_err();
        assert!(err.is_policy());
        assert!(!err.is_transient());
    }

    #[test]
    fn test_location_is_recorded() {
        let err = ConfigError::new("missing key");
        assert!(err.file.ends_with("lib.rs"));
        assert!(err.line > 0);
    }

    #[test]
    fn test_display_includes_inner_message() {
        let err: AtelierError = HttpError::new(502, "bad gateway").into();
        let text = err.to_string();
        assert!(text.contains("502"));
        assert!(text.contains("bad gateway"));
    }

    #[test]
    fn test_validation_lists_every_field() {
        let err = ValidationError::new(
            "new_outfit",
            vec![
                FieldViolation::new("description", "missing required field"),
                FieldViolation::new("imagePromptDetails", "expected string, found number"),
            ],
        );
        let text = err.to_string();
        assert!(text.contains("description"));
        assert!(text.contains("imagePromptDetails"));
        assert!(err.names_field("description"));
        assert!(!err.names_field("name"));
    }
}
