//! Application layer - Commands, Handlers, and Responders.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Responders each own one provider port; the handler classifies, dispatches,
//! and writes the audit record.

pub mod handlers;
pub mod responders;

pub use handlers::{
    AuditWritePolicy, FailureKind, RouteQueryCommand, RouteQueryError, RouteQueryHandler,
    RouteQueryResult,
};
pub use responders::{ChatResponder, JokeResponder, WeatherResponder};
