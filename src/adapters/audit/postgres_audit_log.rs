//! PostgreSQL implementation of AuditLog.
//!
//! Inserts one row per record into the configured table. The table name
//! comes from configuration and is validated as a safe identifier before it
//! reaches this adapter; it is always double-quoted in SQL.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::{is_safe_table_name, AuditConfig};
use crate::domain::audit::AuditRecord;
use crate::ports::{AuditLog, AuditLogError};

/// PostgreSQL implementation of AuditLog.
#[derive(Clone)]
pub struct PostgresAuditLog {
    pool: PgPool,
    table: String,
}

impl PostgresAuditLog {
    /// Creates a new PostgresAuditLog over an existing pool.
    pub fn new(pool: PgPool, table: impl Into<String>) -> Self {
        Self {
            pool,
            table: table.into(),
        }
    }

    /// Connects a pool using the audit configuration.
    pub async fn connect(config: &AuditConfig) -> Result<Self, AuditLogError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect(&config.database_url)
            .await
            .map_err(|e| {
                AuditLogError::DatabaseError(format!("Failed to connect to audit database: {}", e))
            })?;

        Ok(Self::new(pool, config.table.clone()))
    }

    /// Creates the audit table if it does not already exist.
    pub async fn ensure_table(&self) -> Result<(), AuditLogError> {
        let table = self.quoted_table()?;
        let sql = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {table} (
                "id" UUID PRIMARY KEY,
                "query" TEXT NOT NULL,
                "response" TEXT NOT NULL,
                "timestamp" TIMESTAMPTZ NOT NULL
            )
            "#
        );

        sqlx::query(&sql).execute(&self.pool).await.map_err(|e| {
            AuditLogError::DatabaseError(format!("Failed to create audit table: {}", e))
        })?;

        tracing::info!(table = %self.table, "Audit table ready");
        Ok(())
    }

    fn quoted_table(&self) -> Result<String, AuditLogError> {
        if self.table.is_empty() {
            return Err(AuditLogError::NotConfigured(
                "audit table name is empty".to_string(),
            ));
        }
        if !is_safe_table_name(&self.table) {
            return Err(AuditLogError::NotConfigured(format!(
                "audit table name is not a safe identifier: {}",
                self.table
            )));
        }
        Ok(format!("\"{}\"", self.table))
    }

    fn insert_sql(&self) -> Result<String, AuditLogError> {
        let table = self.quoted_table()?;
        Ok(format!(
            r#"INSERT INTO {table} ("id", "query", "response", "timestamp") VALUES ($1, $2, $3, $4)"#
        ))
    }
}

#[async_trait]
impl AuditLog for PostgresAuditLog {
    async fn record(&self, record: &AuditRecord) -> Result<(), AuditLogError> {
        let sql = self.insert_sql()?;
        let id = *record.id().as_uuid();
        let timestamp = *record.timestamp().as_datetime();

        sqlx::query(&sql)
            .bind(id)
            .bind(record.query())
            .bind(record.response())
            .bind(timestamp)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AuditLogError::DatabaseError(format!("Failed to insert audit record: {}", e))
            })?;

        tracing::debug!(
            audit_id = %record.id(),
            table = %self.table,
            timestamp = %record.timestamp().to_iso8601(),
            "Audit record written"
        );
        Ok(())
    }
}
