//! Startup wiring: turns an [`AppConfig`] into a ready [`RouteQueryHandler`].
//!
//! Clients are built once here and shared read-only by every request.

use std::sync::Arc;

use crate::adapters::audit::{InMemoryAuditLog, PostgresAuditLog};
use crate::adapters::chat::{MistralConfig, MistralProvider, StaticHelpProvider};
use crate::adapters::joke::{OfficialJokeConfig, OfficialJokeProvider};
use crate::adapters::weather::{OpenWeatherConfig, OpenWeatherProvider};
use crate::application::handlers::{AuditWritePolicy, RouteQueryHandler};
use crate::config::{AppConfig, AuditBackend, AuditConfig, ChatMode, ProvidersConfig};
use crate::ports::{AuditLog, AuditLogError, ChatProvider, ProviderError};

/// Errors raised while wiring the application
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Failed to build provider client: {0}")]
    Provider(#[from] ProviderError),

    #[error("Failed to initialize audit log: {0}")]
    Audit(#[from] AuditLogError),
}

/// Builds the request handler and all of its collaborators.
pub async fn build_handler(config: &AppConfig) -> Result<RouteQueryHandler, BootstrapError> {
    let providers = &config.providers;
    warn_on_missing_keys(providers);

    let weather = OpenWeatherProvider::new(
        OpenWeatherConfig::new(&providers.weather_api_key)
            .with_base_url(&providers.weather_url)
            .with_timeout(providers.timeout()),
    )?;
    let joke = OfficialJokeProvider::new(
        OfficialJokeConfig::new(&providers.joke_url).with_timeout(providers.timeout()),
    )?;
    let chat = build_chat_provider(providers)?;
    let audit_log = build_audit_log(&config.audit).await?;

    let policy = if config.audit.fail_on_write_error {
        AuditWritePolicy::FailRequest
    } else {
        AuditWritePolicy::LogAndContinue
    };

    let info = chat.provider_info();
    tracing::info!(
        chat_provider = %info.name,
        chat_model = %info.model,
        audit_backend = ?config.audit.backend,
        audit_policy = ?policy,
        "Query router wired"
    );

    Ok(RouteQueryHandler::new(Arc::new(weather), Arc::new(joke), chat, audit_log)
        .with_audit_policy(policy))
}

fn build_chat_provider(
    providers: &ProvidersConfig,
) -> Result<Arc<dyn ChatProvider>, ProviderError> {
    match providers.chat_mode {
        ChatMode::Llm => {
            let config = MistralConfig::new(&providers.chat_api_key)
                .with_model(&providers.chat_model)
                .with_url(&providers.chat_url)
                .with_timeout(providers.timeout());
            Ok(Arc::new(MistralProvider::new(config)?))
        }
        ChatMode::Help => Ok(Arc::new(StaticHelpProvider::new())),
    }
}

async fn build_audit_log(config: &AuditConfig) -> Result<Arc<dyn AuditLog>, AuditLogError> {
    match config.backend {
        AuditBackend::Memory => {
            tracing::warn!("Using in-memory audit log; records are lost on restart");
            Ok(Arc::new(InMemoryAuditLog::new()))
        }
        AuditBackend::Postgres => {
            let log = PostgresAuditLog::connect(config).await?;
            if config.create_table {
                log.ensure_table().await?;
            }
            Ok(Arc::new(log))
        }
    }
}

fn warn_on_missing_keys(providers: &ProvidersConfig) {
    if providers.weather_api_key.is_empty() {
        tracing::warn!("WEATHER_API_KEY is not set; weather lookups will be refused upstream");
    }
    if providers.chat_mode == ChatMode::Llm && providers.chat_api_key.is_empty() {
        tracing::warn!("MISTRAL_LLM_API_KEY is not set; chat completions will be refused upstream");
    }
}
