//! Classification of provider error responses.

use atelier_error::{AtelierError, HttpError, PolicyError};

/// Finds the first marker contained in `body`, ignoring case.
pub fn find_policy_marker<'a>(body: &str, markers: &'a [String]) -> Option<&'a str> {
    let body = body.to_lowercase();
    markers
        .iter()
        .map(String::as_str)
        .filter(|marker| !marker.trim().is_empty())
        .find(|marker| body.contains(&marker.to_lowercase()))
}

/// Turns a non-success response into a [`PolicyError`] when its body
/// carries a policy marker, and an [`HttpError`] otherwise.
pub fn classify_failure(status: u16, body: String, markers: &[String]) -> AtelierError {
    match find_policy_marker(&body, markers) {
        Some(marker) => {
            tracing::warn!(status, marker, "Provider rejected request on policy grounds");
            PolicyError::new(status, body, marker).into()
        }
        None => HttpError::new(status, body).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> Vec<String> {
        vec![
            "SAFETY_FILTER_TRIGGERED".to_string(),
            "content_policy_violation".to_string(),
        ]
    }

    #[test]
    fn test_marker_match_ignores_case() {
        let body = r#"{"error":{"code":"Content_Policy_Violation"}}"#;
        assert_eq!(
            find_policy_marker(body, &markers()),
            Some("content_policy_violation")
        );
    }

    #[test]
    fn test_policy_body_is_reclassified() {
        let err = classify_failure(400, "SAFETY_FILTER_TRIGGERED: blocked".into(), &markers());
        assert!(err.is_policy());
    }

    #[test]
    fn test_plain_failure_stays_http() {
        let err = classify_failure(500, "internal error".into(), &markers());
        assert!(!err.is_policy());
        assert!(matches!(err.kind(), atelier_error::AtelierErrorKind::Http(e) if e.status == 500));
    }
}
