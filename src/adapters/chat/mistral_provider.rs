//! Mistral Provider - Implementation of ChatProvider for Mistral's chat API.
//!
//! The endpoint speaks the OpenAI-compatible chat completions format, so any
//! compatible server can be targeted by changing the URL.
//!
//! # Configuration
//!
//! ```ignore
//! let config = MistralConfig::new(api_key)
//!     .with_model("mistral-small-latest")
//!     .with_url("https://api.mistral.ai/v1/chat/completions");
//!
//! let provider = MistralProvider::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::adapters::outbound::{build_client, decode_error, send_error};
use crate::ports::{
    ChatCompletion, ChatProvider, ChatRequest, MessageRole, ProviderError, ProviderInfo,
};

const PROVIDER: &str = "mistral";

/// Configuration for the Mistral provider.
#[derive(Debug, Clone)]
pub struct MistralConfig {
    /// API key for bearer authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "mistral-small-latest").
    pub model: String,
    /// Chat completions endpoint.
    pub url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl MistralConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: String::new(),
            url: "https://api.mistral.ai/v1/chat/completions".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the endpoint URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Mistral API provider implementation.
pub struct MistralProvider {
    config: MistralConfig,
    client: Client,
}

impl MistralProvider {
    /// Creates a new Mistral provider with the given configuration.
    pub fn new(config: MistralConfig) -> Result<Self, ProviderError> {
        let client = build_client(PROVIDER, config.timeout)?;
        Ok(Self { config, client })
    }

    /// Converts our request to the wire format.
    fn to_wire_request(&self, request: &ChatRequest) -> WireRequest {
        let messages = request
            .messages
            .iter()
            .map(|msg| WireMessage {
                role: match msg.role {
                    MessageRole::System => "system",
                    MessageRole::User => "user",
                    MessageRole::Assistant => "assistant",
                }
                .to_string(),
                content: msg.content.clone(),
            })
            .collect();

        WireRequest {
            model: self.config.model.clone(),
            messages,
        }
    }
}

#[async_trait]
impl ChatProvider for MistralProvider {
    async fn complete(&self, request: ChatRequest) -> Result<ChatCompletion, ProviderError> {
        let wire_request = self.to_wire_request(&request);

        let response = self
            .client
            .post(&self.config.url)
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| send_error(PROVIDER, self.config.timeout, e))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %error_body, "Chat API returned an error");
            return Err(ProviderError::status(PROVIDER, status.as_u16()));
        }

        let wire_response: WireResponse = response
            .json()
            .await
            .map_err(|e| decode_error(PROVIDER, self.config.timeout, e))?;

        let choice = wire_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::contract(PROVIDER, "No choices in response"))?;

        let model = wire_response
            .model
            .unwrap_or_else(|| self.config.model.clone());

        Ok(ChatCompletion::new(choice.message.content, model))
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new(PROVIDER, &self.config.model)
    }
}

// ----- Wire Types -----

#[derive(Debug, Serialize)]
struct WireRequest {
    model: String,
    messages: Vec<WireMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    model: Option<String>,
    choices: Vec<WireChoice>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireMessage,
}
