//! # phonebook-core
//!
//! In-memory contact registry backing the phonebook HTTP API.
//!
//! The registry keeps an ordered collection of [`contact::Person`] records
//! behind a clonable [`registry::Phonebook`] handle, so the HTTP layer can
//! share one collection across request handlers without ambient global state.

/// Compile-time defaults: listening port, static asset directory, id range.
pub mod config;
/// The `Person` record type.
pub mod contact;
/// The `Phonebook` registry: ordered contact collection with interior locking.
pub mod registry;
