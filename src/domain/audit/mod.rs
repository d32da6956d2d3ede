//! Audit module - the per-invocation interaction record.

mod record;

pub use record::AuditRecord;
