//! Chat/fallback responder.

use std::sync::Arc;

use crate::domain::query::{Query, HELP_TEXT};
use crate::ports::{ChatProvider, ChatRequest, ProviderError};

pub struct ChatResponder {
    provider: Arc<dyn ChatProvider>,
}

impl ChatResponder {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    /// Sends the query as a single user message.
    ///
    /// Every provider error propagates, status errors included. A blank
    /// completion is replaced by [`HELP_TEXT`] so the reply is never empty.
    pub async fn respond(&self, query: &Query) -> Result<String, ProviderError> {
        let completion = self
            .provider
            .complete(ChatRequest::from_user(query.as_str()))
            .await
            .map_err(|err| {
                tracing::warn!(
                    provider = err.provider(),
                    status = ?err.status_code(),
                    "Chat completion failed"
                );
                err
            })?;

        if completion.content.trim().is_empty() {
            tracing::warn!(model = %completion.model, "Chat provider returned an empty completion");
            return Ok(HELP_TEXT.to_string());
        }
        Ok(completion.content)
    }
}
