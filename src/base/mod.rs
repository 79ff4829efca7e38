//! Base types and error handling.
//!
//! Provides the error surface shared by the wire-format helpers and the
//! storage layer:
//! - [`error::StorageError`]: everything a storage or host backend can fail with

pub mod error;
