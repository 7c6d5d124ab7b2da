//! Client for OpenAI-compatible chat completion APIs.
//!
//! Text-only requests go to the configured text model; requests carrying an
//! image go to the vision model as multimodal content parts.

mod client;
mod conversions;
mod dto;

pub use client::ChatClient;
pub use conversions::{from_chat_response, to_chat_request};
pub use dto::{
    ChatChoice, ChatContent, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse,
    ContentPart, ImageUrl, ResponseMessage,
};
