//! Request and response types for text generation.

use crate::Message;
use serde::{Deserialize, Serialize};

/// Provider-neutral chat completion request.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// Conversation messages
    messages: Vec<Message>,
    /// Maximum tokens to generate
    #[builder(default)]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default)]
    temperature: Option<f32>,
}

impl GenerateRequest {
    /// Returns a builder for constructing a GenerateRequest.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// A single user message with default sampling.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self::from_messages(vec![Message::user_text(prompt)])
    }

    /// The given messages with default sampling.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self {
            messages,
            max_tokens: None,
            temperature: None,
        }
    }

    /// Replaces the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Replaces the token limit.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Text of the first candidate a chat provider returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct TextCompletion {
    /// Free-form text content of the first candidate
    text: String,
    /// Reason the provider stopped generating, when reported
    finish_reason: Option<String>,
}

impl TextCompletion {
    /// Creates a completion.
    pub fn new(text: impl Into<String>, finish_reason: Option<String>) -> Self {
        Self {
            text: text.into(),
            finish_reason,
        }
    }
}
