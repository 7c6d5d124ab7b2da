//! Content policy rejection errors.

/// A provider refused the request on content-policy grounds.
///
/// Kept apart from [`HttpError`](crate::HttpError) so callers can suggest
/// rewording the request instead of treating the failure as transient.
///
/// # Examples
///
/// ```
/// use atelier_error::PolicyError;
///
/// let err = PolicyError::new(400, "SAFETY_FILTER_TRIGGERED", "SAFETY_FILTER_TRIGGERED");
/// assert_eq!(err.marker, "SAFETY_FILTER_TRIGGERED");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Policy Error: request rejected by content policy (status {}, marker '{}') at line {} in {}",
    status,
    marker,
    line,
    file
)]
pub struct PolicyError {
    /// HTTP status code returned with the rejection
    pub status: u16,
    /// Raw response body
    pub body: String,
    /// The rejection marker found in the body
    pub marker: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl PolicyError {
    /// Create a new PolicyError at the current location.
    #[track_caller]
    pub fn new(status: u16, body: impl Into<String>, marker: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            status,
            body: body.into(),
            marker: marker.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
