//! Tests for provider configuration loading and validation.

use atelier_models::{
    DEFAULT_BASE_URL, DEFAULT_TEXT_MODEL, ENV_API_KEY, ENV_BASE_URL, ENV_IMAGE_SIZE,
    ProviderConfig,
};
use std::collections::HashMap;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn test_env_defaults_apply() {
    let config = ProviderConfig::from_lookup(lookup(&[(ENV_API_KEY, "sk-live")])).unwrap();
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    assert_eq!(config.text_model(), DEFAULT_TEXT_MODEL);
    assert_eq!(config.image_size(), "1024x1024");
    assert_eq!(*config.image_count(), 1);
    assert_eq!(*config.explore_max_tokens(), 1500);
    assert_eq!(config.policy_markers().len(), 3);
}

#[test]
fn test_missing_key_is_configuration_error() {
    let err = ProviderConfig::from_lookup(lookup(&[])).unwrap_err();
    assert!(err.message.contains(ENV_API_KEY));
}

#[test]
fn test_placeholder_and_blank_keys_rejected() {
    for key in ["YOUR_SILICONFLOW_API_KEY", "YOUR_KEY_HERE", "   "] {
        assert!(
            ProviderConfig::from_lookup(lookup(&[(ENV_API_KEY, key)])).is_err(),
            "key {:?}",
            key
        );
    }
}

#[test]
fn test_bad_base_url_rejected() {
    let err = ProviderConfig::from_lookup(lookup(&[
        (ENV_API_KEY, "sk-live"),
        (ENV_BASE_URL, "ftp://example.com"),
    ]))
    .unwrap_err();
    assert!(err.message.contains("http"));
}

#[test]
fn test_bad_image_size_rejected() {
    assert!(
        ProviderConfig::from_lookup(lookup(&[
            (ENV_API_KEY, "sk-live"),
            (ENV_IMAGE_SIZE, "large"),
        ]))
        .is_err()
    );
}

#[test]
fn test_toml_overrides_environment() {
    let toml = r#"
        base_url = "http://localhost:9000/v1/"
        text_model = "local/text"
        image_count = 2
        policy_markers = ["BLOCKED"]
    "#;
    let config = ProviderConfig::from_toml_str(
        toml,
        lookup(&[(ENV_API_KEY, "sk-env"), (ENV_BASE_URL, "https://ignored")]),
    )
    .unwrap();

    assert_eq!(config.api_key(), "sk-env");
    assert_eq!(config.text_model(), "local/text");
    assert_eq!(*config.image_count(), 2);
    assert_eq!(config.policy_markers(), &vec!["BLOCKED".to_string()]);
    assert_eq!(
        config.chat_completions_url(),
        "http://localhost:9000/v1/chat/completions"
    );
    assert_eq!(
        config.image_generations_url(),
        "http://localhost:9000/v1/images/generations"
    );
}

#[test]
fn test_unknown_toml_keys_rejected() {
    let err = ProviderConfig::from_toml_str("api_key = \"sk\"\nmodle = \"x\"", lookup(&[]))
        .unwrap_err();
    assert!(err.message.contains("parse"));
}

#[test]
fn test_debug_redacts_key() {
    let config = ProviderConfig::builder().api_key("sk-secret-123").build().unwrap();
    let debug = format!("{:?}", config);
    assert!(!debug.contains("sk-secret-123"));
    assert!(debug.contains("redacted"));
}
