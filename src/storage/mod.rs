//! Storage instances and host cookie stores.
//!
//! The layer above the wire format:
//!
//! - **Instances**: [`store::CookieStorage`], one JSON object per named cookie
//! - **Options**: [`options::StorageOptions`] and the tagged option accessors
//! - **Backends**: the [`backend::CookieBackend`] seam plus the in-memory
//!   ([`backend::MemoryBackend`]) and file-backed ([`file::FileBackend`])
//!   host stores

pub mod backend;
pub mod file;
pub mod options;
pub mod store;
