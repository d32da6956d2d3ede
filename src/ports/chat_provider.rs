//! Chat Provider Port - Interface for language-model completion providers.
//!
//! This port abstracts the chat/fallback path so the request handler can ask
//! for a completion without coupling to a specific vendor API.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EchoProvider;
//!
//! #[async_trait]
//! impl ChatProvider for EchoProvider {
//!     async fn complete(&self, request: ChatRequest) -> Result<ChatCompletion, ProviderError> {
//!         Ok(ChatCompletion::new(request.messages[0].content.clone(), "echo"))
//!     }
//!
//!     fn provider_info(&self) -> ProviderInfo {
//!         ProviderInfo::new("echo", "echo-1")
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ProviderError;

/// Port for chat completions.
///
/// Implementations translate between the vendor API and these types.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Generate a single, non-streaming completion.
    ///
    /// # Errors
    ///
    /// Any non-success status, transport failure, or unexpected body.
    async fn complete(&self, request: ChatRequest) -> Result<ChatCompletion, ProviderError>;

    /// Get provider information (name, model).
    fn provider_info(&self) -> ProviderInfo;
}

/// Request for a chat completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatRequest {
    /// Conversation messages. The router always sends exactly one.
    pub messages: Vec<Message>,
}

impl ChatRequest {
    /// Creates a request holding a single user message.
    pub fn from_user(content: impl Into<String>) -> Self {
        Self::default().with_message(MessageRole::User, content)
    }

    /// Appends a message.
    pub fn with_message(mut self, role: MessageRole, content: impl Into<String>) -> Self {
        self.messages.push(Message::new(role, content));
        self
    }
}

/// One chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    /// User input.
    User,
    Assistant,
}

/// A completed chat response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatCompletion {
    /// Generated content.
    pub content: String,
    /// Model name reported by the provider.
    pub model: String,
}

impl ChatCompletion {
    pub fn new(content: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            model: model.into(),
        }
    }
}

/// Provider information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (e.g., "mistral", "static-help").
    pub name: String,
    /// Model identifier.
    pub model: String,
    /// Whether completions involve an outbound call.
    pub remote: bool,
}

impl ProviderInfo {
    /// Creates info for a remote provider.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            remote: true,
        }
    }

    /// Marks the provider as local (no outbound call).
    pub fn local(mut self) -> Self {
        self.remote = false;
        self
    }
}
