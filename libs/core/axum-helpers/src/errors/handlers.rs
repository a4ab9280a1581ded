use axum::{http::StatusCode, response::Response};

use super::{NOT_FOUND_BODY, plain_text};

/// Handler for 404 Not Found errors.
///
/// Used as the router fallback so unrouted paths answer exactly like a
/// missing record.
pub async fn not_found() -> Response {
    plain_text(StatusCode::NOT_FOUND, NOT_FOUND_BODY.to_string())
}
