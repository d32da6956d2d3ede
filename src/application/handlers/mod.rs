//! Application handlers.
//!
//! Command handlers that orchestrate domain operations over the ports.

pub mod route_query;

pub use route_query::{
    AuditWritePolicy, FailureKind, RouteQueryCommand, RouteQueryError, RouteQueryHandler,
    RouteQueryResult,
};
