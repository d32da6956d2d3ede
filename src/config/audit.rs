//! Audit log configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Postgres caps identifiers at 63 bytes.
const MAX_TABLE_NAME_LEN: usize = 63;

/// Audit log configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuditConfig {
    /// Storage backend
    #[serde(default)]
    pub backend: AuditBackend,

    /// Table name (`DYNAMODB_TABLE`)
    #[serde(default)]
    pub table: String,

    /// PostgreSQL connection URL (postgres backend only)
    #[serde(default)]
    pub database_url: String,

    /// Maximum pool connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// Create the table on startup if it does not exist
    #[serde(default)]
    pub create_table: bool,

    /// Fail the request when the audit write fails
    #[serde(default = "default_fail_on_write_error")]
    pub fail_on_write_error: bool,
}

/// Audit storage backend
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuditBackend {
    /// In-process store, lost on restart
    #[default]
    Memory,
    /// PostgreSQL table
    Postgres,
}

impl AuditConfig {
    /// Get acquire timeout as Duration
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Validate audit configuration
    ///
    /// An empty table name passes: it fails on the first write instead.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.table.is_empty() && !is_safe_table_name(&self.table) {
            return Err(ValidationError::InvalidTableName(self.table.clone()));
        }
        if self.backend == AuditBackend::Postgres {
            if self.database_url.is_empty() {
                return Err(ValidationError::MissingRequired("AUDIT__DATABASE_URL"));
            }
            if !self.database_url.starts_with("postgres://")
                && !self.database_url.starts_with("postgresql://")
            {
                return Err(ValidationError::InvalidDatabaseUrl);
            }
            if self.max_connections == 0 || self.max_connections > 100 {
                return Err(ValidationError::InvalidPoolSize);
            }
        }
        Ok(())
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            backend: AuditBackend::default(),
            table: String::new(),
            database_url: String::new(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            create_table: false,
            fail_on_write_error: default_fail_on_write_error(),
        }
    }
}

/// Letters, digits, `_`, `-` and `.`; the name is always double-quoted in SQL.
pub fn is_safe_table_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_TABLE_NAME_LEN
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout() -> u64 {
    5
}

fn default_fail_on_write_error() -> bool {
    true
}
