//! Chat client for OpenAI-compatible APIs.

use crate::openai_compat::{ChatResponse, conversions};
use crate::{ChatDriver, ProviderConfig, policy};
use async_trait::async_trait;
use atelier_core::{GenerateRequest, TextCompletion};
use atelier_error::{AtelierResult, ConfigError, MalformedResponseError, TransientError};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Chat completion client for an OpenAI-compatible provider.
///
/// Issues exactly one POST per call. There is no retry, caching or timeout.
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: Client,
    config: ProviderConfig,
}

impl ChatClient {
    /// Creates a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration does not validate,
    /// before any network activity.
    #[instrument(skip(config), fields(base_url = %config.base_url()))]
    pub fn new(config: ProviderConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        debug!(
            text_model = %config.text_model(),
            vision_model = %config.vision_model(),
            "Created chat client"
        );

        Ok(Self {
            client: Client::new(),
            config,
        })
    }

    /// Returns the configuration this client was built from.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

#[async_trait]
impl ChatDriver for ChatClient {
    #[instrument(skip(self, req), fields(messages = req.messages().len()))]
    async fn complete(&self, req: &GenerateRequest) -> AtelierResult<TextCompletion> {
        let chat_request = conversions::to_chat_request(
            req,
            self.config.text_model(),
            self.config.vision_model(),
        )?;
        let url = self.config.chat_completions_url();

        debug!(
            model = %chat_request.model(),
            message_count = chat_request.messages().len(),
            "Sending chat request"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.config.api_key())
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                TransientError::new(format!("Request failed: {}", e)).with_url(url.clone())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");
            return Err(policy::classify_failure(
                status.as_u16(),
                error_text,
                self.config.policy_markers(),
            ));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            MalformedResponseError::new("$", format!("Failed to parse JSON: {}", e))
        })?;

        debug!(choices = chat_response.choices.len(), "Received response");

        Ok(conversions::from_chat_response(&chat_response)?)
    }
}
