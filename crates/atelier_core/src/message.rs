//! Chat messages sent to text and vision models.

use crate::{InlineImage, Input, Role};
use serde::{Deserialize, Serialize};

/// One chat turn, possibly mixing text and images.
///
/// # Examples
///
/// ```
/// use atelier_core::{InlineImage, Message};
///
/// let photo = InlineImage::from_bytes("image/jpeg", &[0xff, 0xd8]);
/// let message = Message::user_with_image("请识别这件衣物", photo);
///
/// assert!(message.has_image());
/// assert_eq!(message.content().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Message {
    /// Sender
    role: Role,
    /// Ordered parts
    content: Vec<Input>,
}

impl Message {
    /// Creates a message with the given role and parts.
    pub fn new(role: Role, content: Vec<Input>) -> Self {
        Self { role, content }
    }

    /// A user turn carrying only text.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self::new(Role::User, vec![Input::Text(text.into())])
    }

    /// A user turn with an instruction followed by a photo.
    pub fn user_with_image(text: impl Into<String>, image: InlineImage) -> Self {
        Self::new(Role::User, vec![Input::Text(text.into()), Input::Image(image)])
    }

    /// True when any part is an image, which calls for a vision model.
    pub fn has_image(&self) -> bool {
        self.content.iter().any(|input| matches!(input, Input::Image(_)))
    }
}
