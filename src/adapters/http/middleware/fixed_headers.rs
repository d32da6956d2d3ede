//! Fixed response headers.
//!
//! Every response, success or failure, carries the same content type and
//! CORS headers. Applying them as the outermost middleware also covers
//! responses produced by other layers (timeouts, unknown routes, 405s).
//!
//! # Example
//!
//! ```ignore
//! use axum::{middleware, routing::post, Router};
//!
//! let app = Router::new()
//!     .route("/api/query", post(handler))
//!     .layer(middleware::from_fn(fixed_headers));
//! ```

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

/// Headers set on every response, overwriting any existing value.
pub const FIXED_HEADERS: [(&str, &str); 4] = [
    ("content-type", "application/json"),
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "OPTIONS, POST, GET"),
    ("access-control-allow-headers", "Content-Type"),
];

/// Middleware that applies [`FIXED_HEADERS`] to the inner response.
pub async fn fixed_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    apply_fixed_headers(response.headers_mut());
    response
}

pub fn apply_fixed_headers(headers: &mut HeaderMap) {
    for (name, value) in FIXED_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
}
