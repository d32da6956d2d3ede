//! Configuration errors

use thiserror::Error;

/// Raised while reading configuration from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("configuration is invalid: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Structural problems found by `validate()`
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{0} must be set")]
    MissingRequired(&'static str),

    #[error("server port must be non-zero")]
    InvalidPort,

    #[error("bind address {0} is not an IP socket address")]
    InvalidBindAddress(String),

    #[error("timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("{0} must be an http:// or https:// URL")]
    InvalidUrl(&'static str),

    #[error("audit database URL must use the postgres:// or postgresql:// scheme")]
    InvalidDatabaseUrl,

    #[error("audit table name {0:?} is not a safe SQL identifier")]
    InvalidTableName(String),

    #[error("audit pool size must be between 1 and 100")]
    InvalidPoolSize,

    #[error("provider timeout ({provider_secs}s) must be shorter than the request timeout ({request_secs}s)")]
    ProviderTimeoutTooLong {
        provider_secs: u64,
        request_secs: u64,
    },
}
