//! Input types for provider requests.

use crate::InlineImage;
use serde::{Deserialize, Serialize};

/// Supported message inputs.
///
/// # Examples
///
/// ```
/// use atelier_core::{InlineImage, Input};
///
/// let text = Input::Text("请识别这件衣物".to_string());
/// let photo = Input::Image(InlineImage::from_bytes("image/png", &[1, 2, 3]));
/// assert!(matches!(text, Input::Text(_)));
/// assert!(matches!(photo, Input::Image(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text input.
    Text(String),
    /// Inline image input, sent to vision-capable models.
    Image(InlineImage),
}
