//! Provider configuration, built once at startup and passed to clients.

use atelier_error::ConfigError;
use derive_getters::Getters;
use serde::Deserialize;
use std::path::Path;

/// Environment variable holding the provider base URL.
pub const ENV_BASE_URL: &str = "SILICONFLOW_API_BASE_URL";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "SILICONFLOW_API_KEY";
/// Environment variable holding the text model identifier.
pub const ENV_TEXT_MODEL: &str = "SILICONFLOW_TEXT_MODEL";
/// Environment variable holding the vision model identifier.
pub const ENV_VISION_MODEL: &str = "SILICONFLOW_VL_MODEL";
/// Environment variable holding the image model identifier.
pub const ENV_IMAGE_MODEL: &str = "SILICONFLOW_IMAGE_MODEL";
/// Environment variable holding the generated image size.
pub const ENV_IMAGE_SIZE: &str = "SILICONFLOW_IMAGE_SIZE";

/// Default provider endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.siliconflow.com/v1";
/// Default text model.
pub const DEFAULT_TEXT_MODEL: &str = "Pro/deepseek-ai/DeepSeek-V3";
/// Default vision model.
pub const DEFAULT_VISION_MODEL: &str = "Qwen/Qwen2.5-VL-72B-Instruct";
/// Default image model.
pub const DEFAULT_IMAGE_MODEL: &str = "Kwai-Kolors/Kolors";
/// Default generated image size.
pub const DEFAULT_IMAGE_SIZE: &str = "1024x1024";
/// Substrings in a provider error body that mark a content-policy rejection.
pub const DEFAULT_POLICY_MARKERS: &[&str] = &[
    "SAFETY_FILTER_TRIGGERED",
    "prompt violates safety policy",
    "content_policy_violation",
];

const PLACEHOLDER_PREFIX: &str = "YOUR_";

fn default_policy_markers() -> Vec<String> {
    DEFAULT_POLICY_MARKERS.iter().map(|m| m.to_string()).collect()
}

/// Connection settings for the text, vision and image models.
///
/// Obtain one through [`ProviderConfig::from_env`], [`ProviderConfig::from_file`]
/// or the builder; each path validates the result, so a `ProviderConfig`
/// never carries a missing or placeholder credential.
///
/// # Examples
///
/// ```
/// use atelier_models::ProviderConfig;
///
/// let config = ProviderConfig::builder().api_key("sk-test").build().unwrap();
/// assert_eq!(config.image_size(), "1024x1024");
/// assert!(!format!("{:?}", config).contains("sk-test"));
///
/// assert!(ProviderConfig::builder().api_key("YOUR_SILICONFLOW_API_KEY").build().is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into), build_fn(private, name = "build_unvalidated"))]
pub struct ProviderConfig {
    /// Base URL, e.g. `https://api.siliconflow.com/v1`
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Bearer credential
    api_key: String,
    /// Model for text-only chat completions
    #[builder(default = "DEFAULT_TEXT_MODEL.to_string()")]
    text_model: String,
    /// Model for chat completions that carry images
    #[builder(default = "DEFAULT_VISION_MODEL.to_string()")]
    vision_model: String,
    /// Model for image generation
    #[builder(default = "DEFAULT_IMAGE_MODEL.to_string()")]
    image_model: String,
    /// Generated image size, `<width>x<height>`
    #[builder(default = "DEFAULT_IMAGE_SIZE.to_string()")]
    image_size: String,
    /// Images requested per generation call
    #[builder(default = "1")]
    image_count: u32,
    /// Completion budget for explorable item generation
    #[builder(default = "1500")]
    explore_max_tokens: u32,
    /// Error-body substrings that mark a policy rejection
    #[builder(default = "default_policy_markers()")]
    policy_markers: Vec<String>,
}

impl ProviderConfigBuilder {
    /// Builds and validates the configuration.
    pub fn build(&self) -> Result<ProviderConfig, ConfigError> {
        let config = self
            .build_unvalidated()
            .map_err(|e| ConfigError::new(format!("Incomplete provider configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

/// On-disk form. Every field is optional and falls back to the environment.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ProviderFile {
    base_url: Option<String>,
    api_key: Option<String>,
    text_model: Option<String>,
    vision_model: Option<String>,
    image_model: Option<String>,
    image_size: Option<String>,
    image_count: Option<u32>,
    explore_max_tokens: Option<u32>,
    policy_markers: Option<Vec<String>>,
}

impl ProviderConfig {
    /// Returns a builder with the documented defaults.
    pub fn builder() -> ProviderConfigBuilder {
        ProviderConfigBuilder::default()
    }

    /// Reads configuration from the process environment.
    ///
    /// Reads:
    /// - `SILICONFLOW_API_KEY` (required)
    /// - `SILICONFLOW_API_BASE_URL` (default: "https://api.siliconflow.com/v1")
    /// - `SILICONFLOW_TEXT_MODEL`, `SILICONFLOW_VL_MODEL`, `SILICONFLOW_IMAGE_MODEL`
    /// - `SILICONFLOW_IMAGE_SIZE` (default: "1024x1024")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::merge(ProviderFile::default(), lookup)
    }

    /// Reads a TOML file, filling absent keys from the process environment.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&content, |name| std::env::var(name).ok())
    }

    /// Parses TOML, filling absent keys through `lookup`.
    pub fn from_toml_str<F>(content: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file: ProviderFile = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        Self::merge(file, lookup)
    }

    fn merge<F>(file: ProviderFile, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = file.api_key.or_else(|| var(ENV_API_KEY)).ok_or_else(|| {
            ConfigError::new(format!("{} is not set and no api_key was configured", ENV_API_KEY))
        })?;

        let mut builder = Self::builder();
        builder.api_key(api_key);
        if let Some(base_url) = file.base_url.or_else(|| var(ENV_BASE_URL)) {
            builder.base_url(base_url);
        }
        if let Some(model) = file.text_model.or_else(|| var(ENV_TEXT_MODEL)) {
            builder.text_model(model);
        }
        if let Some(model) = file.vision_model.or_else(|| var(ENV_VISION_MODEL)) {
            builder.vision_model(model);
        }
        if let Some(model) = file.image_model.or_else(|| var(ENV_IMAGE_MODEL)) {
            builder.image_model(model);
        }
        if let Some(size) = file.image_size.or_else(|| var(ENV_IMAGE_SIZE)) {
            builder.image_size(size);
        }
        if let Some(count) = file.image_count {
            builder.image_count(count);
        }
        if let Some(tokens) = file.explore_max_tokens {
            builder.explore_max_tokens(tokens);
        }
        if let Some(markers) = file.policy_markers {
            builder.policy_markers(markers);
        }
        builder.build()
    }

    /// Rejects missing or placeholder credentials and malformed endpoints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let key = self.api_key.trim();
        if key.is_empty() {
            return Err(ConfigError::new("API key is empty"));
        }
        if key.starts_with(PLACEHOLDER_PREFIX) {
            return Err(ConfigError::new(format!(
                "API key is a placeholder; set {} to a real key",
                ENV_API_KEY
            )));
        }

        let base_url = self.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::new(format!(
                "Base URL must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }

        for (name, model) in [
            ("text_model", &self.text_model),
            ("vision_model", &self.vision_model),
            ("image_model", &self.image_model),
        ] {
            if model.trim().is_empty() {
                return Err(ConfigError::new(format!("{} is empty", name)));
            }
        }

        let size_ok = self
            .image_size
            .split_once('x')
            .is_some_and(|(w, h)| w.parse::<u32>().is_ok() && h.parse::<u32>().is_ok());
        if !size_ok {
            return Err(ConfigError::new(format!(
                "image_size must look like 1024x1024, got {:?}",
                self.image_size
            )));
        }

        if self.image_count == 0 {
            return Err(ConfigError::new("image_count must be at least 1"));
        }
        if self.explore_max_tokens == 0 {
            return Err(ConfigError::new("explore_max_tokens must be at least 1"));
        }
        Ok(())
    }

    /// Chat completions endpoint.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim().trim_end_matches('/'))
    }

    /// Image generation endpoint.
    pub fn image_generations_url(&self) -> String {
        format!("{}/images/generations", self.base_url.trim().trim_end_matches('/'))
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("text_model", &self.text_model)
            .field("vision_model", &self.vision_model)
            .field("image_model", &self.image_model)
            .field("image_size", &self.image_size)
            .field("image_count", &self.image_count)
            .field("explore_max_tokens", &self.explore_max_tokens)
            .field("policy_markers", &self.policy_markers)
            .finish()
    }
}
