//! Application error type and its HTTP rendering.
//!
//! Errors are answered with a plain-text body terminated by a newline.
//! Clients match on these bodies, so the format is part of the wire contract.

pub mod handlers;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Body sent with every 404, routed or not.
pub const NOT_FOUND_BODY: &str = "404 page not found";

/// Application error type that can be converted to HTTP responses.
///
/// Only two outcomes exist on the wire: a request body that failed to decode
/// (400, raw decoder message) and a missing resource (404).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("{0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("{0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedJson(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::MalformedJson(e) => {
                tracing::info!("Malformed request body: {}", e);
                e.to_string()
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                msg
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                NOT_FOUND_BODY.to_string()
            }
        };

        plain_text(status, body)
    }
}

/// Plain-text response; a trailing newline is appended to `body`.
pub(crate) fn plain_text(status: StatusCode, mut body: String) -> Response {
    body.push('\n');
    (
        status,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        ],
        body,
    )
        .into_response()
}
