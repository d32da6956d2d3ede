//! In-Memory Audit Log Adapter
//!
//! Keeps records in memory. Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::audit::AuditRecord;
use crate::ports::{AuditLog, AuditLogError};

/// In-memory audit log
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuditLog {
    records: Arc<RwLock<Vec<AuditRecord>>>,
    failure: Option<String>,
}

impl InMemoryAuditLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log whose every write fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            records: Arc::default(),
            failure: Some(message.into()),
        }
    }

    /// All records written so far, oldest first
    pub async fn records(&self) -> Vec<AuditRecord> {
        self.records.read().await.clone()
    }

    /// Number of stored records
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    /// Clear all stored records (useful for tests)
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}

#[async_trait]
impl AuditLog for InMemoryAuditLog {
    async fn record(&self, record: &AuditRecord) -> Result<(), AuditLogError> {
        if let Some(message) = &self.failure {
            return Err(AuditLogError::Unavailable(message.clone()));
        }
        self.records.write().await.push(record.clone());
        tracing::debug!(
            audit_id = %record.id(),
            timestamp = %record.timestamp().to_iso8601(),
            "Audit record kept in memory"
        );
        Ok(())
    }
}
