//! Configuration for the query router
//!
//! Values come from the process environment (and `.env` during development)
//! through the `config` and `dotenvy` crates. Configuration is loaded with the
//! `QUERY_ROUTER` prefix and nested values use double underscores as separators.
//!
//! The four flat variables understood by earlier deployments are still honored
//! and take precedence over their nested equivalents:
//!
//! | Variable              | Nested key                |
//! |-----------------------|---------------------------|
//! | `WEATHER_API_KEY`     | `providers.weather_api_key` |
//! | `DYNAMODB_TABLE`      | `audit.table`             |
//! | `MISTRAL_LLM_API_KEY` | `providers.chat_api_key`  |
//! | `LLM_MODEL`           | `providers.chat_model`    |
//!
//! # Example
//!
//! ```no_run
//! use query_router::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! config.validate()?;
//!
//! println!("Server running on {}", config.server.socket_addr()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod audit;
mod error;
mod providers;
mod server;

pub use audit::{is_safe_table_name, AuditBackend, AuditConfig};
pub use error::{ConfigError, ValidationError};
pub use providers::{ChatMode, ProvidersConfig};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;
use std::env;

/// Flat environment variables and the nested keys they override.
const LEGACY_OVERRIDES: [(&str, &str); 4] = [
    ("WEATHER_API_KEY", "providers.weather_api_key"),
    ("DYNAMODB_TABLE", "audit.table"),
    ("MISTRAL_LLM_API_KEY", "providers.chat_api_key"),
    ("LLM_MODEL", "providers.chat_model"),
];

/// Everything the binary needs at startup
///
/// Every section has defaults, so an empty environment yields a runnable
/// development configuration with an in-memory audit log.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP listener
    #[serde(default)]
    pub server: ServerConfig,

    /// Weather, joke and chat provider configuration
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// Audit log configuration
    #[serde(default)]
    pub audit: AuditConfig,
}

impl AppConfig {
    /// Load configuration from `.env` (if present) and environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `QUERY_ROUTER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `QUERY_ROUTER__AUDIT__BACKEND=postgres` -> `audit.backend = postgres`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is normal outside development
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Load configuration from the process environment only
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder().add_source(
            config::Environment::default()
                .prefix("QUERY_ROUTER")
                .separator("__"),
        );

        for (variable, key) in LEGACY_OVERRIDES {
            builder = builder.set_override_option(key, env::var(variable).ok())?;
        }

        let config = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Check every section for structural problems
    ///
    /// Checks structure only (ports, timeouts, URL schemes, table name).
    /// API keys are not required. A provider call must time out before the
    /// inbound request does.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.providers.validate()?;
        self.audit.validate()?;
        if self.providers.timeout_secs >= self.server.request_timeout_secs {
            return Err(ValidationError::ProviderTimeoutTooLong {
                provider_secs: self.providers.timeout_secs,
                request_secs: self.server.request_timeout_secs,
            });
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
