//! JSON request body parsing.
//!
//! Routes take the raw body instead of axum's `Json` extractor so that a
//! missing `Content-Type` is accepted and every rejection renders through
//! [`AppError`](super::AppError) with the usual error body.

use serde::de::DeserializeOwned;

use super::error::RequestError;

/// Deserializes a request body, mapping any failure to `MalformedBody`.
pub fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, RequestError> {
    serde_json::from_slice(bytes).map_err(|e| RequestError::MalformedBody(e.to_string()))
}
