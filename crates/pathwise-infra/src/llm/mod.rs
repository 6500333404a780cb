//! Completion provider construction.
//!
//! The only backend is [`OpenAiCompatibleProvider`], which talks to a local
//! Ollama server by default and to any OpenAI-style API when configured.
//! [`create_provider`] builds it from the `[provider]` config section and
//! wraps it in a [`TimeoutProvider`]; [`test_provider_connection`] sends a
//! tiny request to verify the endpoint.

pub mod openai_compat;

use std::time::Duration;

use secrecy::SecretString;

use pathwise_core::llm::box_provider::BoxLlmProvider;
use pathwise_core::llm::provider::LlmProvider;
use pathwise_core::llm::timeout::TimeoutProvider;
use pathwise_types::config::ProviderSettings;
use pathwise_types::llm::{CompletionRequest, LlmError, Message};

use self::openai_compat::OpenAiCompatibleProvider;
use self::openai_compat::config::OpenAiCompatConfig;

/// Read the API key named by `api_key_env`, if any.
///
/// A configured variable that is unset or empty is reported as a warning;
/// local servers work without a key, hosted APIs will reject the call.
pub fn resolve_api_key(settings: &ProviderSettings) -> Option<SecretString> {
    let var = settings.api_key_env.as_deref()?;
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Some(SecretString::from(value)),
        _ => {
            tracing::warn!(env = var, "API key variable is not set; continuing without a key");
            None
        }
    }
}

/// Create a [`BoxLlmProvider`] from the `[provider]` settings.
///
/// # Errors
///
/// Returns `LlmError::AuthenticationFailed` when the settings target the
/// hosted OpenAI API but no key is available, and `InvalidRequest` for an
/// empty model name.
pub fn create_provider(
    settings: &ProviderSettings,
    api_key: Option<SecretString>,
) -> Result<BoxLlmProvider, LlmError> {
    if settings.model.trim().is_empty() {
        return Err(LlmError::InvalidRequest("provider model is empty".to_string()));
    }
    if settings.name == "openai" && api_key.is_none() {
        return Err(LlmError::AuthenticationFailed);
    }

    let provider = OpenAiCompatibleProvider::new(OpenAiCompatConfig::from_settings(settings, api_key));
    tracing::debug!(
        provider = %settings.name,
        base_url = %settings.base_url,
        model = %settings.model,
        timeout_secs = settings.timeout_secs,
        "completion provider configured"
    );

    let limit = Duration::from_secs(settings.timeout_secs.max(1));
    Ok(BoxLlmProvider::new(TimeoutProvider::new(provider, limit)))
}

/// Test provider connectivity by sending a minimal completion request.
///
/// # Errors
///
/// Returns the LLM error if the provider fails to respond.
pub async fn test_provider_connection(provider: &BoxLlmProvider) -> Result<(), LlmError> {
    let request = CompletionRequest {
        model: String::new(), // Provider uses its configured default
        messages: vec![Message::user("Hello")],
        system: None,
        max_tokens: 10,
        temperature: Some(0.0),
    };
    provider.complete(&request).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_provider_defaults_to_ollama() {
        let provider = create_provider(&ProviderSettings::default(), None).unwrap();
        assert_eq!(provider.name(), "ollama");
    }

    #[test]
    fn test_create_provider_openai_requires_key() {
        let settings = ProviderSettings {
            name: "openai".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            ..ProviderSettings::default()
        };
        let err = create_provider(&settings, None).err().unwrap();
        assert!(matches!(err, LlmError::AuthenticationFailed));

        let provider = create_provider(&settings, Some(SecretString::from("sk-test"))).unwrap();
        assert_eq!(provider.name(), "openai");
    }

    #[test]
    fn test_create_provider_rejects_empty_model() {
        let settings = ProviderSettings {
            model: "  ".to_string(),
            ..ProviderSettings::default()
        };
        assert!(matches!(
            create_provider(&settings, None),
            Err(LlmError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_resolve_api_key_without_env_setting() {
        assert!(resolve_api_key(&ProviderSettings::default()).is_none());
    }

    #[test]
    fn test_resolve_api_key_reads_named_variable() {
        // SAFETY: test-only env mutation with a variable name unique to this test
        unsafe { std::env::set_var("PATHWISE_TEST_KEY_RESOLVE", "sk-from-env") };
        let settings = ProviderSettings {
            api_key_env: Some("PATHWISE_TEST_KEY_RESOLVE".to_string()),
            ..ProviderSettings::default()
        };
        let key = resolve_api_key(&settings).unwrap();
        unsafe { std::env::remove_var("PATHWISE_TEST_KEY_RESOLVE") };

        use secrecy::ExposeSecret;
        assert_eq!(key.expose_secret(), "sk-from-env");
    }
}
