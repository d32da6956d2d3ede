//! Mock Joke Provider for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{Joke, JokeProvider, ProviderError};

/// Mock joke provider; queued responses are consumed in order.
#[derive(Debug, Clone, Default)]
pub struct MockJokeProvider {
    responses: Arc<Mutex<VecDeque<Result<Joke, ProviderError>>>>,
    calls: Arc<Mutex<usize>>,
}

impl MockJokeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a joke.
    pub fn with_joke(self, setup: impl Into<String>, punchline: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(Joke::new(setup, punchline)));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: ProviderError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl JokeProvider for MockJokeProvider {
    async fn random_joke(&self) -> Result<Joke, ProviderError> {
        *self.calls.lock().unwrap() += 1;
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Joke::new("Why did the mock joke?", "It was told to.")))
    }
}
