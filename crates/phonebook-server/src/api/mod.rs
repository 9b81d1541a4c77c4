//! REST API layer built on Axum.
//!
//! Provides HTTP handlers for the contact routes, a static-asset fallback,
//! and request/response logging middleware.

/// API error types mapped to HTTP status codes.
pub mod errors;
/// HTTP request handlers and application state.
pub mod handlers;
/// Request data transfer objects.
pub mod models;

use axum::body::Body;
use axum::extract::Request;
use axum::http::{header, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use handlers::AppState;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Logs every request before dispatch (method, path, body) and emits a
/// completion line after the response (method, uri, status, response
/// content-length, latency, request body).
///
/// Buffering the body here is what makes it loggable; the request is
/// rebuilt from the same bytes before it reaches the handler.
async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let (parts, body) = req.into_parts();
    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };
    let body_text = String::from_utf8_lossy(&bytes).into_owned();

    tracing::info!(method = %method, path = %uri.path(), body = %body_text, "request received");

    let req = Request::from_parts(parts, Body::from(bytes));
    let start = Instant::now();
    let response = next.run(req).await;

    let content_length = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    tracing::info!(
        method = %method,
        uri = %uri,
        status = response.status().as_u16(),
        content_length = %content_length,
        elapsed_ms = start.elapsed().as_millis() as u64,
        body = %body_text,
        "request completed"
    );
    response
}

/// Builds the Axum router with all routes and middleware layers.
///
/// Unmatched paths fall back to static files under `static_dir`, so API
/// routes always take priority over assets.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/info", get(handlers::info))
        .route(
            "/api/persons",
            get(handlers::list_persons).post(handlers::create_person),
        )
        .route(
            "/api/persons/:id",
            get(handlers::get_person)
                .put(handlers::update_person)
                .delete(handlers::delete_person),
        )
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
