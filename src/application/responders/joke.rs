//! Joke responder.

use std::sync::Arc;

use crate::domain::query::JOKE_APOLOGY;
use crate::ports::{JokeProvider, ProviderError};

pub struct JokeResponder {
    provider: Arc<dyn JokeProvider>,
}

impl JokeResponder {
    pub fn new(provider: Arc<dyn JokeProvider>) -> Self {
        Self { provider }
    }

    /// Fetches a joke; a status error becomes [`JOKE_APOLOGY`].
    pub async fn respond(&self) -> Result<String, ProviderError> {
        match self.provider.random_joke().await {
            Ok(joke) => Ok(joke.render()),
            Err(ProviderError::Status { status, .. }) => {
                tracing::warn!(status, "Joke lookup failed, sending apology");
                Ok(JOKE_APOLOGY.to_string())
            }
            Err(err) => Err(err),
        }
    }
}
