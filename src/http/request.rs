//! Request identification.
//!
//! Every request gets an `x-request-id` as early as possible so the access
//! span and the body dump can be correlated. A client-supplied id is kept;
//! otherwise tower-http's `MakeRequestUuid` assigns a UUID v4.

use axum::http::{HeaderMap, HeaderName};

/// Header carrying the request id in both directions.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Read the request id from a header map, falling back to "-".
pub fn request_id_of(headers: &HeaderMap) -> &str {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
}
