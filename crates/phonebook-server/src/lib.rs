//! phonebook-server — HTTP server for the phonebook.
//!
//! Provides the JSON API over the contact registry plus a static-asset
//! fallback. Registry logic lives in `phonebook-core`.

/// REST API layer: axum router, HTTP handlers, models, request logging.
pub mod api;
