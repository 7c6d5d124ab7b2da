//! HTTP error types.

/// A provider answered with a non-success status.
///
/// # Examples
///
/// ```
/// use atelier_error::HttpError;
///
/// let err = HttpError::new(503, "upstream overloaded");
/// assert_eq!(err.status, 503);
/// assert!(format!("{}", err).contains("503"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: status {} ({}) at line {} in {}", status, body, line, file)]
pub struct HttpError {
    /// HTTP status code returned by the provider
    pub status: u16,
    /// Raw response body
    pub body: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a new HttpError at the current location.
    #[track_caller]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            status,
            body: body.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
