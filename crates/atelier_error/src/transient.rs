//! Network-level failures.

/// A network-level failure: the provider or image host was unreachable, or
/// the generated image could not be downloaded.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transient Error: {} at line {} in {}", message, line, file)]
pub struct TransientError {
    /// Error message
    pub message: String,
    /// URL being contacted, when known
    pub url: Option<String>,
    /// HTTP status, when the host answered at all
    pub status: Option<u16>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl TransientError {
    /// Create a new TransientError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            url: None,
            status: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Attach the URL that failed.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Attach the HTTP status that was returned.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}
