//! API error types mapped to HTTP status codes.
//!
//! Lookup misses are reported two ways: `GET /api/persons/:id` answers with
//! a bare 404, while `PUT` misses carry a JSON error body. Both shapes are
//! part of the API contract.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type that implements `IntoResponse`.
///
/// Each variant maps to an HTTP status code:
/// - `NotFound` → 404 with an empty body
/// - `NotFoundMessage` → 404 with `{"error": message}`
/// - `BadRequest` → 400 with `{"error": message}`
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found, empty body (404).
    NotFound,
    /// Resource not found, reported with a JSON error body (404).
    NotFoundMessage(String),
    /// Invalid request payload (400).
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::NotFoundMessage(msg) => {
                let body = axum::Json(json!({ "error": msg }));
                (StatusCode::NOT_FOUND, body).into_response()
            }
            ApiError::BadRequest(msg) => {
                let body = axum::Json(json!({ "error": msg }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}
