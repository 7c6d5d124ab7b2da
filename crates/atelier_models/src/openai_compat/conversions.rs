//! Type conversions between Atelier and the chat wire format.

use crate::openai_compat::{
    ChatContent, ChatMessage, ChatRequest, ChatResponse, ContentPart, ImageUrl,
};
use atelier_core::{GenerateRequest, Input, Message, TextCompletion};
use atelier_error::{MalformedResponseError, ValidationError};

/// Converts a GenerateRequest to chat format.
///
/// The vision model is selected when any message carries an image.
pub fn to_chat_request(
    req: &GenerateRequest,
    text_model: &str,
    vision_model: &str,
) -> Result<ChatRequest, ValidationError> {
    if req.messages().is_empty() {
        return Err(ValidationError::field(
            "chat_request",
            "messages",
            "at least one message is required",
        ));
    }

    let mut messages = Vec::with_capacity(req.messages().len());

    for msg in req.messages() {
        let parts: Vec<ContentPart> = msg
            .content()
            .iter()
            .map(|input| match input {
                Input::Text(text) => ContentPart::Text { text: text.clone() },
                Input::Image(image) => ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: image.to_data_uri(),
                    },
                },
            })
            .collect();

        let content = match parts.as_slice() {
            [ContentPart::Text { text }] => ChatContent::Text(text.clone()),
            _ => ChatContent::Parts(parts),
        };

        messages.push(ChatMessage {
            role: msg.role().to_string(),
            content,
        });
    }

    let model = if req.messages().iter().any(Message::has_image) {
        vision_model
    } else {
        text_model
    };

    let mut builder = ChatRequest::builder();
    builder.model(model.to_string()).messages(messages);

    if let Some(max_tokens) = req.max_tokens() {
        builder.max_tokens(*max_tokens);
    }

    if let Some(temp) = req.temperature() {
        builder.temperature(*temp);
    }

    builder
        .build()
        .map_err(|e| ValidationError::field("chat_request", "$", e.to_string()))
}

/// Extracts the first candidate's text from a chat response.
pub fn from_chat_response(response: &ChatResponse) -> Result<TextCompletion, MalformedResponseError> {
    let choice = response.choices.first().ok_or_else(|| {
        MalformedResponseError::new("choices[0]", "response contained no choices")
    })?;

    let content = choice.message.content.as_ref().ok_or_else(|| {
        MalformedResponseError::new("choices[0].message.content", "content was null or absent")
    })?;

    Ok(TextCompletion::new(
        content.clone(),
        choice.finish_reason.clone(),
    ))
}
