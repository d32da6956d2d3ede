//! HTTP adapters - REST API implementations.
//!
//! `build_router` assembles the query routes with the cross-cutting layers:
//! fixed headers (outermost), request ids, tracing, and a request timeout
//! whose cut-offs are answered with a JSON 504.

pub mod middleware;
pub mod query;

use std::time::Duration;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

pub use middleware::{fixed_headers, timeout_envelope};
pub use query::{query_routes, QueryAppState};

/// Builds the application router.
pub fn build_router(state: QueryAppState, request_timeout: Duration) -> Router {
    query_routes().with_state(state).layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(fixed_headers))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(axum::middleware::from_fn(timeout_envelope))
            .layer(TimeoutLayer::new(request_timeout)),
    )
}
