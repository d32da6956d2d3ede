//! Official Joke API Provider - Implementation of JokeProvider.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use crate::adapters::outbound::{build_client, decode_error, send_error};
use crate::ports::{Joke, JokeProvider, ProviderError};

const PROVIDER: &str = "official-joke-api";

/// Configuration for the joke provider.
#[derive(Debug, Clone)]
pub struct OfficialJokeConfig {
    /// Random-joke endpoint.
    pub url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OfficialJokeConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for OfficialJokeConfig {
    fn default() -> Self {
        Self::new("https://official-joke-api.appspot.com/random_joke")
    }
}

/// Official Joke API provider implementation.
pub struct OfficialJokeProvider {
    config: OfficialJokeConfig,
    client: Client,
}

impl OfficialJokeProvider {
    pub fn new(config: OfficialJokeConfig) -> Result<Self, ProviderError> {
        let client = build_client(PROVIDER, config.timeout)?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl JokeProvider for OfficialJokeProvider {
    async fn random_joke(&self) -> Result<Joke, ProviderError> {
        let response = self
            .client
            .get(&self.config.url)
            .send()
            .await
            .map_err(|e| send_error(PROVIDER, self.config.timeout, e))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Joke API responded");
        if status != StatusCode::OK {
            return Err(ProviderError::status(PROVIDER, status.as_u16()));
        }

        let body: JokeResponse = response
            .json()
            .await
            .map_err(|e| decode_error(PROVIDER, self.config.timeout, e))?;

        Ok(Joke::new(body.setup, body.punchline))
    }
}

#[derive(Debug, Deserialize)]
struct JokeResponse {
    setup: String,
    punchline: String,
}
