//! HTTP handlers for the query endpoint.
//!
//! The body is taken as raw bytes so that malformed JSON is reported with the
//! same error shape as every other failure instead of axum's own rejection.
//! Unknown paths and unsupported methods get that shape too.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::handlers::{
    FailureKind, RouteQueryCommand, RouteQueryError, RouteQueryHandler,
};

use super::dto::{ErrorResponse, HealthResponse, QueryResponse};

/// Shared state for the query routes.
#[derive(Clone)]
pub struct QueryAppState {
    pub handler: Arc<RouteQueryHandler>,
}

impl QueryAppState {
    pub fn new(handler: RouteQueryHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }
}

/// POST /api/query - Classify and answer a query
pub async fn route_query(
    State(state): State<QueryAppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!(status = %rejection.status(), "Could not read request body");
            return (
                rejection.status(),
                Json(ErrorResponse::new(
                    FailureKind::MalformedInput.code(),
                    rejection.body_text(),
                )),
            )
                .into_response();
        }
    };

    let outcome = match RouteQueryCommand::from_json(&body) {
        Ok(cmd) => state.handler.handle(cmd).await,
        Err(err) => Err(err),
    };

    match outcome {
        Ok(result) => (
            StatusCode::OK,
            Json(QueryResponse {
                response: result.response,
            }),
        )
            .into_response(),
        Err(err) => error_response(&err),
    }
}

/// OPTIONS /api/query - CORS preflight
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// GET /health - Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Fallback for paths with no route
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("NOT_FOUND", "No such endpoint")),
    )
}

/// Fallback for a known path hit with an unsupported method
pub async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new(
            "METHOD_NOT_ALLOWED",
            "Method not allowed for this endpoint",
        )),
    )
}

/// Maps a failure kind to its HTTP status.
pub fn status_for(kind: FailureKind) -> StatusCode {
    match kind {
        FailureKind::MalformedInput => StatusCode::BAD_REQUEST,
        FailureKind::Upstream => StatusCode::BAD_GATEWAY,
        FailureKind::AuditWrite | FailureKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(err: &RouteQueryError) -> Response {
    let kind = err.kind();
    match kind {
        FailureKind::MalformedInput => tracing::warn!(error = %err, "Rejected request body"),
        FailureKind::Upstream => tracing::warn!(error = %err, "Upstream provider failed"),
        FailureKind::AuditWrite | FailureKind::Internal => {
            tracing::error!(error = %err, "Request failed")
        }
    }

    (
        status_for(kind),
        Json(ErrorResponse::new(kind.code(), err.to_string())),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_failure_kind() {
        assert_eq!(
            status_for(FailureKind::MalformedInput),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_for(FailureKind::Upstream), StatusCode::BAD_GATEWAY);
        assert_eq!(
            status_for(FailureKind::AuditWrite),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(FailureKind::Internal),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
