//! Mock Chat Provider for testing.
//!
//! Provides a configurable mock implementation of the ChatProvider port,
//! allowing tests to run without calling a real language model.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockChatProvider::new().with_response("Hello, I'm the assistant!");
//!
//! let completion = provider.complete(ChatRequest::from_user("hi")).await?;
//! assert_eq!(completion.content, "Hello, I'm the assistant!");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{ChatCompletion, ChatProvider, ChatRequest, ProviderError, ProviderInfo};

/// Mock chat provider for testing.
///
/// Configurable to return specific responses or inject errors. Every request
/// is recorded for verification.
#[derive(Debug, Clone)]
pub struct MockChatProvider {
    /// Consumed front to back; empty means "Mock response".
    responses: Arc<Mutex<VecDeque<Result<String, ProviderError>>>>,
    info: ProviderInfo,
    /// Every request received, in order.
    calls: Arc<Mutex<Vec<ChatRequest>>>,
}

impl Default for MockChatProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockChatProvider {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1"),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a completion with this content.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(content.into()));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: ProviderError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn get_calls(&self) -> Vec<ChatRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(&self, request: ChatRequest) -> Result<ChatCompletion, ProviderError> {
        self.calls.lock().unwrap().push(request);

        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("Mock response".to_string()));

        next.map(|content| ChatCompletion::new(content, &self.info.model))
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}
