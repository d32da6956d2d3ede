//! Static help "provider": answers every chat query with the help text.

use async_trait::async_trait;

use crate::domain::query::HELP_TEXT;
use crate::ports::{ChatCompletion, ChatProvider, ChatRequest, ProviderError, ProviderInfo};

/// Chat provider used when no language model is wanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticHelpProvider;

impl StaticHelpProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChatProvider for StaticHelpProvider {
    async fn complete(&self, _request: ChatRequest) -> Result<ChatCompletion, ProviderError> {
        Ok(ChatCompletion::new(HELP_TEXT, "static-help"))
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("static-help", "static-help").local()
    }
}
