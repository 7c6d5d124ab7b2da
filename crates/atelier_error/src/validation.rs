//! Validation error types.

/// A single field that failed its contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{}: {}", field, problem)]
pub struct FieldViolation {
    /// Field path, e.g. `items[2].name`
    pub field: String,
    /// What was wrong with it
    pub problem: String,
}

impl FieldViolation {
    /// Creates a violation for `field`.
    pub fn new(field: impl Into<String>, problem: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            problem: problem.into(),
        }
    }
}

/// Input or payload failed a field contract.
///
/// Raised both for caller input checked before any network call (for
/// example an out-of-range creativity level) and for extracted model
/// payloads that do not satisfy the operation's field contract.
///
/// # Examples
///
/// ```
/// use atelier_error::{FieldViolation, ValidationError};
///
/// let err = ValidationError::new(
///     "recommendation",
///     vec![FieldViolation::new("recommendedOutfit", "missing required field")],
/// );
/// assert!(err.names_field("recommendedOutfit"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Validation Error: '{}' failed [{}] at line {} in {}",
    operation,
    violations.iter().map(|v| v.to_string()).collect::<Vec<_>>().join("; "),
    line,
    file
)]
pub struct ValidationError {
    /// Operation or input being validated
    pub operation: String,
    /// Every offending field
    pub violations: Vec<FieldViolation>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError at the current location.
    #[track_caller]
    pub fn new(operation: impl Into<String>, violations: Vec<FieldViolation>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            operation: operation.into(),
            violations,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a single offending field.
    #[track_caller]
    pub fn field(
        operation: impl Into<String>,
        field: impl Into<String>,
        problem: impl Into<String>,
    ) -> Self {
        Self::new(operation, vec![FieldViolation::new(field, problem)])
    }

    /// Returns true if `field` is among the violations.
    pub fn names_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}
