//! Image generation client.

use crate::images::{ImageGenerationResponse, conversions};
use crate::{ImageDriver, ProviderConfig, policy};
use async_trait::async_trait;
use atelier_core::{ImageGeneration, ImageRequest};
use atelier_error::{AtelierResult, ConfigError, MalformedResponseError, TransientError};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Image generation client for an OpenAI-style provider.
#[derive(Debug, Clone)]
pub struct ImageClient {
    client: Client,
    config: ProviderConfig,
}

impl ImageClient {
    /// Creates a client from a validated configuration.
    #[instrument(skip(config), fields(base_url = %config.base_url()))]
    pub fn new(config: ProviderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(image_model = %config.image_model(), "Created image client");
        Ok(Self {
            client: Client::new(),
            config,
        })
    }
}

#[async_trait]
impl ImageDriver for ImageClient {
    #[instrument(skip(self, req), fields(model = %self.config.image_model()))]
    async fn generate(&self, req: &ImageRequest) -> AtelierResult<ImageGeneration> {
        let body = conversions::to_generation_request(req, &self.config)?;
        let url = self.config.image_generations_url();

        debug!(size = %body.size(), n = body.n(), "Sending image generation request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.config.api_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                TransientError::new(format!("Request failed: {}", e)).with_url(url.clone())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "Image API error");
            return Err(policy::classify_failure(
                status.as_u16(),
                error_text,
                self.config.policy_markers(),
            ));
        }

        let generation: ImageGenerationResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            MalformedResponseError::new("$", format!("Failed to parse JSON: {}", e))
        })?;

        debug!(images = generation.entry_count(), "Received image references");

        Ok(conversions::from_generation_response(generation))
    }
}
