//! Custom extractors for Axum handlers.
//!
//! Input handling is lenient: a bad `id` query value never fails a request,
//! and a request body is decoded as JSON regardless of its declared content
//! type.

pub mod json_body;
pub mod query_id;

pub use json_body::{JsonBody, decode_json};
pub use query_id::{QueryId, scan_decimal};
