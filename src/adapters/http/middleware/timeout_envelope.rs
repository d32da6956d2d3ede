//! Error body for requests cut off by the request timeout.
//!
//! `tower_http`'s `TimeoutLayer` answers with an empty 408. Sitting just
//! outside it, this middleware swaps that for a 504 carrying the usual
//! `{error, code}` body.

use axum::{
    extract::{Json, Request},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::adapters::http::query::ErrorResponse;
use crate::application::handlers::FailureKind;

pub async fn timeout_envelope(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }

    tracing::warn!("Request exceeded the server timeout");
    timed_out_response()
}

/// The 504 sent in place of a timed-out request.
pub fn timed_out_response() -> Response {
    (
        StatusCode::GATEWAY_TIMEOUT,
        Json(ErrorResponse::new(
            FailureKind::Upstream.code(),
            "Request timed out",
        )),
    )
        .into_response()
}
