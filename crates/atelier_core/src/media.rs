//! Self-contained inline image payloads.

use atelier_error::ValidationError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// MIME type assumed when an image host does not declare one.
pub const DEFAULT_IMAGE_MIME: &str = "image/png";

/// An image carried inline as a MIME type plus base64-encoded bytes.
///
/// Immutable once constructed.
///
/// # Examples
///
/// ```
/// use atelier_core::InlineImage;
///
/// let image = InlineImage::from_bytes("image/jpeg", &[0xff, 0xd8, 0xff]);
/// assert_eq!(image.mime_type(), "image/jpeg");
/// assert_eq!(image.to_data_uri(), "data:image/jpeg;base64,/9j/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct InlineImage {
    /// MIME type, e.g. `image/png`
    mime_type: String,
    /// Standard base64 encoding of the image bytes
    encoded_bytes: String,
}

impl InlineImage {
    /// Encodes raw bytes.
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.into(),
            encoded_bytes: STANDARD.encode(bytes),
        }
    }

    /// Parses a `data:<mime>;base64,<payload>` URI.
    pub fn from_data_uri(uri: &str) -> Result<Self, ValidationError> {
        let invalid = |problem: &str| ValidationError::field("inline_image", "dataUri", problem);

        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| invalid("data URI must start with 'data:'"))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| invalid("data URI has no ',' separating header and payload"))?;
        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| invalid("only base64 data URIs are supported"))?;
        if mime_type.is_empty() {
            return Err(invalid("data URI declares no MIME type"));
        }
        STANDARD
            .decode(payload)
            .map_err(|e| invalid(&format!("payload is not valid base64: {}", e)))?;

        Ok(Self {
            mime_type: mime_type.to_string(),
            encoded_bytes: payload.to_string(),
        })
    }

    /// Renders the image as a data URI.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.encoded_bytes)
    }

    /// Decodes the image bytes.
    pub fn decode(&self) -> Result<Vec<u8>, ValidationError> {
        STANDARD.decode(&self.encoded_bytes).map_err(|e| {
            ValidationError::field(
                "inline_image",
                "encodedBytes",
                format!("not valid base64: {}", e),
            )
        })
    }
}
