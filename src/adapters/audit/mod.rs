//! Audit Log Adapters.
//!
//! - `PostgresAuditLog` - One row per record in a configured table
//! - `InMemoryAuditLog` - Process-local store with read-back, for tests and development

mod in_memory_audit_log;
mod postgres_audit_log;

pub use in_memory_audit_log::InMemoryAuditLog;
pub use postgres_audit_log::PostgresAuditLog;
