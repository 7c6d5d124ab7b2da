//! Data transfer objects for OpenAI-compatible chat APIs.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Image reference inside a multimodal message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageUrl {
    /// HTTP URL or `data:` URI
    pub url: String,
}

/// One part of a multimodal message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Text segment
    Text {
        /// The text
        text: String,
    },
    /// Image segment
    ImageUrl {
        /// Where the image lives
        image_url: ImageUrl,
    },
}

/// Message content: plain text, or a list of parts when images are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatContent {
    /// Plain text
    Text(String),
    /// Mixed text and image parts
    Parts(Vec<ContentPart>),
}

/// An outgoing chat turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Lowercase role name
    pub role: String,
    /// Plain text, or parts when the turn carries an image
    pub content: ChatContent,
}

/// Body of `POST {base_url}/chat/completions`.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatRequest {
    /// Text or vision model, chosen per request
    model: String,
    /// Conversation turns in order
    messages: Vec<ChatMessage>,
    /// Token budget; omitted from the body when unset
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

impl ChatRequest {
    /// Creates a new builder for ChatRequest.
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }
}

/// The message inside a response choice. Content may be null.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    /// Role of the author
    #[serde(default)]
    pub role: Option<String>,
    /// Text content
    #[serde(default)]
    pub content: Option<String>,
}

/// One response candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The generated turn
    pub message: ResponseMessage,
    /// e.g. "stop" or "length"
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Chat completion response.
///
/// Only `choices` is read; usage accounting and other provider extras are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Candidates, usually exactly one
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}
