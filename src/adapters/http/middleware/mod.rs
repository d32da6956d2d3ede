//! HTTP middleware for axum.
//!
//! - `fixed_headers` - Stamps the content type and CORS headers on every response
//! - `timeout_envelope` - Gives timed-out requests a JSON error body

pub mod fixed_headers;
pub mod timeout_envelope;

pub use fixed_headers::{apply_fixed_headers, fixed_headers, FIXED_HEADERS};
pub use timeout_envelope::{timed_out_response, timeout_envelope};
