//! Configuration for OpenAI-compatible providers.
//!
//! Local Ollama servers and hosted OpenAI-style APIs speak the same chat
//! completions protocol; they differ only in base URL, key and limits.

use secrecy::SecretString;

use pathwise_types::config::ProviderSettings;
use pathwise_types::llm::ProviderCapabilities;

/// Key sent to servers that do not check one (Ollama ignores it).
const PLACEHOLDER_API_KEY: &str = "ollama";

/// Configuration for an OpenAI-compatible provider.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`].
pub struct OpenAiCompatConfig {
    /// Human-readable provider name (e.g., "ollama", "openai").
    pub provider_name: String,
    /// Base URL for the API (e.g., "http://localhost:11434/v1").
    pub base_url: String,
    pub api_key: SecretString,
    /// Default model when a request does not name one.
    pub model: String,
    pub capabilities: ProviderCapabilities,
}

impl OpenAiCompatConfig {
    /// Build from the `[provider]` section and an already resolved key.
    pub fn from_settings(settings: &ProviderSettings, api_key: Option<SecretString>) -> Self {
        let capabilities = match settings.name.as_str() {
            "openai" => openai_capabilities(),
            _ => ollama_capabilities(),
        };
        Self {
            provider_name: settings.name.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.unwrap_or_else(|| SecretString::from(PLACEHOLDER_API_KEY)),
            model: settings.model.clone(),
            capabilities,
        }
    }
}

/// Local Ollama server: 128K context (llama3.2), 8K output.
pub fn ollama_capabilities() -> ProviderCapabilities {
    ProviderCapabilities {
        max_context_tokens: 128_000,
        max_output_tokens: 8_192,
    }
}

/// Hosted OpenAI models: 128K context, 16K output.
pub fn openai_capabilities() -> ProviderCapabilities {
    ProviderCapabilities {
        max_context_tokens: 128_000,
        max_output_tokens: 16_384,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_defaults_target_local_ollama() {
        let config = OpenAiCompatConfig::from_settings(&ProviderSettings::default(), None);
        assert_eq!(config.provider_name, "ollama");
        assert_eq!(config.base_url, "http://localhost:11434/v1");
        assert_eq!(config.model, "llama3.2");
        assert_eq!(config.api_key.expose_secret(), "ollama");
        assert_eq!(config.capabilities.max_output_tokens, 8_192);
    }

    #[test]
    fn test_openai_settings_keep_key_and_trim_url() {
        let settings = ProviderSettings {
            name: "openai".to_string(),
            base_url: "https://api.openai.com/v1/".to_string(),
            model: "gpt-4o-mini".to_string(),
            ..ProviderSettings::default()
        };
        let config =
            OpenAiCompatConfig::from_settings(&settings, Some(SecretString::from("sk-test")));
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.api_key.expose_secret(), "sk-test");
        assert_eq!(config.capabilities.max_output_tokens, 16_384);
    }
}
