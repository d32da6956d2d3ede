//! HTTP adapter for the query endpoint.
//!
//! Exposes the route handler over POST, answers CORS preflight requests, and
//! provides a liveness check.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, HealthResponse, QueryResponse};
pub use handlers::{
    health, method_not_allowed, not_found, preflight, route_query, status_for, QueryAppState,
};
pub use routes::query_routes;
