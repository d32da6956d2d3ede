//! Outbound provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Endpoints, credentials, and model selection for the three providers.
///
/// API keys are plain strings here and are wrapped in `Secret` by the
/// adapters that use them. Missing keys default to empty and are not
/// validated; the provider rejects them on first use.
#[derive(Debug, Clone, Deserialize)]
pub struct ProvidersConfig {
    /// Current-weather endpoint
    #[serde(default = "default_weather_url")]
    pub weather_url: String,

    /// Weather API key (`WEATHER_API_KEY`)
    #[serde(default)]
    pub weather_api_key: String,

    /// Random-joke endpoint
    #[serde(default = "default_joke_url")]
    pub joke_url: String,

    /// Chat completions endpoint
    #[serde(default = "default_chat_url")]
    pub chat_url: String,

    /// Chat API key (`MISTRAL_LLM_API_KEY`)
    #[serde(default)]
    pub chat_api_key: String,

    /// Chat model identifier (`LLM_MODEL`)
    #[serde(default)]
    pub chat_model: String,

    /// How unmatched queries are answered
    #[serde(default)]
    pub chat_mode: ChatMode,

    /// Outbound request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Chat/fallback behavior
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    /// Ask the language model
    #[default]
    Llm,
    /// Reply with a fixed help text, no outbound call
    Help,
}

impl ProvidersConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate provider configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_url(&self.weather_url, "weather_url")?;
        check_url(&self.joke_url, "joke_url")?;
        if self.chat_mode == ChatMode::Llm {
            check_url(&self.chat_url, "chat_url")?;
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            weather_url: default_weather_url(),
            weather_api_key: String::new(),
            joke_url: default_joke_url(),
            chat_url: default_chat_url(),
            chat_api_key: String::new(),
            chat_model: String::new(),
            chat_mode: ChatMode::default(),
            timeout_secs: default_timeout(),
        }
    }
}

fn check_url(url: &str, field: &'static str) -> Result<(), ValidationError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ValidationError::InvalidUrl(field))
    }
}

fn default_weather_url() -> String {
    "http://api.openweathermap.org/data/2.5/weather".to_string()
}

fn default_joke_url() -> String {
    "https://official-joke-api.appspot.com/random_joke".to_string()
}

fn default_chat_url() -> String {
    "https://api.mistral.ai/v1/chat/completions".to_string()
}

fn default_timeout() -> u64 {
    30
}
