//! Joke Provider Port - a random two-part joke.

use async_trait::async_trait;

use super::ProviderError;

/// A setup/punchline joke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joke {
    pub setup: String,
    pub punchline: String,
}

impl Joke {
    pub fn new(setup: impl Into<String>, punchline: impl Into<String>) -> Self {
        Self {
            setup: setup.into(),
            punchline: punchline.into(),
        }
    }

    /// Setup and punchline joined by a single space.
    pub fn render(&self) -> String {
        format!("{} {}", self.setup, self.punchline)
    }
}

/// Port for fetching a random joke.
#[async_trait]
pub trait JokeProvider: Send + Sync {
    /// # Errors
    ///
    /// `ProviderError::Status` for any response other than 200.
    async fn random_joke(&self) -> Result<Joke, ProviderError>;
}
