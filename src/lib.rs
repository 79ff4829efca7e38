//! # cookiestash
//!
//! Use a browser cookie as a small JSON object store.
//!
//! `cookiestash` keeps one JSON object per named cookie. Mutate the mapping
//! in memory, persist it with an explicit save, and read it back from the
//! same instance or a fresh one through the standard cookie header wire
//! format: percent-encoded `name=value` pairs with a `Set-Cookie` style
//! attribute suffix.
//!
//! ## Features
//!
//! - **One cookie, one object**: the whole mapping rides in a single cookie
//! - **Browser-compatible wire format**: `encodeURIComponent` escaping plus
//!   `path`, `domain`, `max-age`, `expires`, and `secure` attributes
//! - **Pluggable hosts**: the cookie store is an injected
//!   [`CookieBackend`](storage::backend::CookieBackend), with in-memory and
//!   file-backed implementations included
//! - **Explicit persistence**: memory and host state diverge until `save`,
//!   and a `fetch` discards unsaved edits
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use cookiestash::storage::backend::MemoryBackend;
//! use cookiestash::storage::store::CookieStorage;
//!
//! let backend = Arc::new(MemoryBackend::new());
//!
//! let mut prefs = CookieStorage::new("prefs", backend.clone())?;
//! prefs.set("theme", "dark").set("volume", 11);
//! prefs.save()?;
//!
//! // A second instance over the same host store sees the saved state.
//! let again = CookieStorage::new("prefs", backend)?;
//! assert_eq!(again.get("theme"), Some(&"dark".into()));
//! # Ok::<(), cookiestash::base::error::StorageError>(())
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error types
//! - [`cookies`] - Wire format: encoding, header pairs, attribute suffix
//! - [`storage`] - Storage instances, options, and host backends

pub mod base;
pub mod cookies;
pub mod storage;
