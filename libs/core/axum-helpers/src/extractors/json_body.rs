//! JSON body extractor with decoder-style error reporting.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON request body extractor.
///
/// Unlike `axum::Json` this does not require a `Content-Type` header, decodes
/// only the first JSON value in the body (trailing bytes are ignored) and
/// rejects with [`AppError::MalformedJson`], which renders as a 400 carrying
/// the raw decoder message.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::any};
/// use axum_helpers::extractors::JsonBody;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct NewNote {
///     text: String,
/// }
///
/// async fn add(JsonBody(note): JsonBody<NewNote>) -> String {
///     note.text
/// }
///
/// let app: Router = Router::new().route("/add-note", any(add));
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        decode_json(&bytes).map(JsonBody)
    }
}

/// Decode the first JSON value in `bytes`.
///
/// An empty body fails with an end-of-input error.
pub fn decode_json<T>(bytes: &[u8]) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let value: T = serde::Deserialize::deserialize(&mut deserializer)?;
    Ok(value)
}
