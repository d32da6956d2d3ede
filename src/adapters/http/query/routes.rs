//! Axum routes for the query endpoint.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    health, method_not_allowed, not_found, preflight, route_query, QueryAppState,
};

/// Create the query router.
///
/// # Routes
/// - `POST /api/query` - Answer a query
/// - `OPTIONS /api/query` - CORS preflight
/// - `GET /health` - Liveness check
///
/// Other methods on these paths get a JSON 405, other paths a JSON 404.
pub fn query_routes() -> Router<QueryAppState> {
    Router::new()
        .route(
            "/api/query",
            post(route_query)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route("/health", get(health).fallback(method_not_allowed))
        .fallback(not_found)
}
