//! Compile-time defaults for the phonebook service.
//!
//! Runtime configuration (port, static directory) is handled via CLI
//! arguments and environment variables in the server's `main.rs`.

/// Default HTTP server port. Overridable with the `PORT` environment variable.
pub const DEFAULT_PORT: u16 = 3001;

/// Default directory of static assets served for unmatched paths.
pub const DEFAULT_STATIC_DIR: &str = "./dist";

/// Exclusive upper bound for generated contact ids.
///
/// New contacts draw a pseudo-random id in `[0, GENERATED_ID_BOUND)`.
pub const GENERATED_ID_BOUND: u32 = 10_000;
