//! Audit Log Port - persistence of per-invocation audit records.

use async_trait::async_trait;

use crate::domain::audit::AuditRecord;

/// Errors that can occur while writing an audit record
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuditLogError {
    #[error("Audit log is not configured: {0}")]
    NotConfigured(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Audit store unavailable: {0}")]
    Unavailable(String),
}

/// Port for writing audit records
///
/// Writes are single-record inserts. The request path never reads records
/// back; adapters may offer reads for tests and tooling.
#[async_trait]
pub trait AuditLog: Send + Sync {
    /// Persist one record
    ///
    /// # Errors
    /// Returns `AuditLogError` if the record could not be stored
    async fn record(&self, record: &AuditRecord) -> Result<(), AuditLogError>;
}
