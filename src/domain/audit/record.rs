//! AuditRecord - one persisted entry per routed query.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuditRecordId, Timestamp};
use crate::domain::query::Query;

/// The persisted log entry for one invocation.
///
/// Created right after the response text is known and written exactly once.
/// Nothing on the request path reads it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    id: AuditRecordId,
    query: String,
    response: String,
    timestamp: Timestamp,
}

impl AuditRecord {
    /// Creates a record with a fresh id, stamped now.
    pub fn new(query: &Query, response: impl Into<String>) -> Self {
        Self::reconstitute(AuditRecordId::new(), query.as_str(), response, Timestamp::now())
    }

    /// Rebuilds a record from stored fields.
    pub fn reconstitute(
        id: AuditRecordId,
        query: impl Into<String>,
        response: impl Into<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id,
            query: query.into(),
            response: response.into(),
            timestamp,
        }
    }

    pub fn id(&self) -> AuditRecordId {
        self.id
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}
