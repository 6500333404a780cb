//! Global configuration types for Pathwise.
//!
//! `GlobalConfig` represents the top-level `config.toml` that selects the
//! completion provider and tunes the interview, replay and search layers.

use serde::{Deserialize, Serialize};

use crate::llm::RequestSettings;

/// Top-level configuration for Pathwise.
///
/// Loaded from `~/.pathwise/config.toml`. Every section and field has a
/// default, so an empty file is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub provider: ProviderSettings,
    #[serde(default)]
    pub interview: InterviewSettings,
    #[serde(default)]
    pub replay: ReplaySettings,
    #[serde(default)]
    pub search: SearchSettings,
}

/// Which OpenAI-compatible endpoint to talk to and how.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Label used in logs and spans (e.g. "ollama", "openai").
    #[serde(default = "default_provider_name")]
    pub name: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Name of the environment variable holding the API key, if any.
    /// Local servers such as Ollama need none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Upper bound on a single completion call, in seconds.
    #[serde(default = "default_provider_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_provider_name() -> String {
    "ollama".to_string()
}

fn default_base_url() -> String {
    "http://localhost:11434/v1".to_string()
}

fn default_model() -> String {
    "llama3.2".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    2048
}

fn default_provider_timeout_secs() -> u64 {
    120
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            name: default_provider_name(),
            base_url: default_base_url(),
            model: default_model(),
            api_key_env: None,
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_provider_timeout_secs(),
        }
    }
}

impl ProviderSettings {
    /// Per-call settings derived from this provider section.
    pub fn request_settings(&self) -> RequestSettings {
        RequestSettings {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: Some(self.temperature),
        }
    }
}

/// Mock interview tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewSettings {
    /// Cap on answered user turns. `None` keeps the interview open-ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_turns: Option<u32>,
    /// Reject a blank position when starting an interview.
    #[serde(default = "default_true")]
    pub require_position: bool,
}

fn default_true() -> bool {
    true
}

impl Default for InterviewSettings {
    fn default() -> Self {
        Self {
            max_turns: None,
            require_position: true,
        }
    }
}

/// Word-by-word replay pacing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaySettings {
    /// Delay between fragments in milliseconds. Zero disables pacing.
    #[serde(default = "default_pace_ms")]
    pub pace_ms: u64,
}

fn default_pace_ms() -> u64 {
    10
}

impl Default for ReplaySettings {
    fn default() -> Self {
        Self {
            pace_ms: default_pace_ms(),
        }
    }
}

/// Web search grounding for personas that allow it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_search_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_max_results() -> usize {
    5
}

fn default_search_timeout_secs() -> u64 {
    30
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            max_results: default_max_results(),
            timeout_secs: default_search_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert_eq!(config.provider.name, "ollama");
        assert_eq!(config.provider.base_url, "http://localhost:11434/v1");
        assert_eq!(config.provider.model, "llama3.2");
        assert!(config.provider.api_key_env.is_none());
        assert_eq!(config.provider.max_tokens, 2048);
        assert_eq!(config.provider.timeout_secs, 120);
        assert!(config.interview.max_turns.is_none());
        assert!(config.interview.require_position);
        assert_eq!(config.replay.pace_ms, 10);
        assert!(config.search.enabled);
        assert_eq!(config.search.max_results, 5);
    }

    #[test]
    fn test_global_config_deserialize_empty() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config.provider.model, "llama3.2");
        assert_eq!(config.replay.pace_ms, 10);
        assert_eq!(config.search.timeout_secs, 30);
    }

    #[test]
    fn test_global_config_deserialize_partial_sections() {
        let toml_str = r#"
[provider]
name = "openai"
base_url = "https://api.openai.com/v1"
model = "gpt-4o-mini"
api_key_env = "OPENAI_API_KEY"

[interview]
max_turns = 8
require_position = false

[replay]
pace_ms = 0
"#;
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.name, "openai");
        assert_eq!(config.provider.api_key_env.as_deref(), Some("OPENAI_API_KEY"));
        assert!((config.provider.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.interview.max_turns, Some(8));
        assert!(!config.interview.require_position);
        assert_eq!(config.replay.pace_ms, 0);
        assert!(config.search.enabled);
    }

    #[test]
    fn test_request_settings_from_provider() {
        let provider = ProviderSettings {
            max_tokens: 1024,
            temperature: 0.2,
            ..ProviderSettings::default()
        };
        let settings = provider.request_settings();
        assert_eq!(settings.model, "llama3.2");
        assert_eq!(settings.max_tokens, 1024);
        assert_eq!(settings.temperature, Some(0.2));
    }

    #[test]
    fn test_global_config_serde_roundtrip() {
        let mut config = GlobalConfig::default();
        config.interview.max_turns = Some(3);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GlobalConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.interview.max_turns, Some(3));
        assert_eq!(parsed.provider.base_url, config.provider.base_url);
    }
}
