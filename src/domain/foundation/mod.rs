//! Foundation module - Shared domain primitives.

mod ids;
mod timestamp;

pub use ids::AuditRecordId;
pub use timestamp::Timestamp;
