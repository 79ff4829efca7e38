//! Host cookie-store backends.
//!
//! [`CookieBackend`] is the seam between storage instances and the host
//! cookie store. It mirrors the two directions of a browser's
//! `document.cookie` accessor: reads return the full `;`-separated pair
//! header, writes submit one `name=value;attributes` line. Backends use
//! interior mutability so a single host store can be shared across storages
//! through an `Arc`.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use crate::base::error::StorageError;

/// Largest accepted `name=value` pair in bytes, the minimum per-cookie
/// capacity RFC 6265 requires of user agents. Oversized writes are rejected,
/// never truncated.
pub const MAX_PAIR_BYTES: usize = 4096;

/// A host cookie store.
pub trait CookieBackend: Send + Sync {
    /// The full cookie header: every stored cookie as `name=value`, joined
    /// with `"; "`. An empty store reads as an empty string.
    fn read(&self) -> Result<String, StorageError>;

    /// Set or update one cookie from a `name=value;attributes` line.
    ///
    /// Only the named cookie changes. Attributes after the first `;` are
    /// accepted and ignored, the way a cookie jar ignores attributes it does
    /// not model.
    fn write(&self, line: &str) -> Result<(), StorageError>;
}

/// Split a written cookie line into its `(name, value)` pair.
///
/// The pair is everything before the first `;`, split on its first `=`.
/// Lines with no `=` or an empty name are invalid, and pairs larger than
/// [`MAX_PAIR_BYTES`] are rejected with the quota error. Both provided
/// backends funnel writes through this.
pub fn split_cookie_line(line: &str) -> Result<(&str, &str), StorageError> {
    let pair = line.split_once(';').map_or(line, |(pair, _)| pair);
    let (name, value) = pair
        .split_once('=')
        .ok_or(StorageError::InvalidCookieLine)?;
    if name.is_empty() {
        return Err(StorageError::InvalidCookieLine);
    }
    if pair.len() > MAX_PAIR_BYTES {
        return Err(StorageError::QuotaExceeded {
            size: pair.len(),
            limit: MAX_PAIR_BYTES,
        });
    }
    Ok((name, value))
}

#[derive(Debug)]
struct StoredPair {
    /// Creation sequence number; read order sorts on this.
    created: u64,
    value: String,
}

/// Deterministic in-memory host store.
///
/// Cookies read back in creation order, the way browser jars order
/// same-path cookies by creation time, and updating a cookie keeps its
/// original position. Share one store between storages with an `Arc` to
/// model a single host profile.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    cookies: DashMap<String, StoredPair>,
    sequence: AtomicU64,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw (still percent-encoded) value stored under `name`.
    pub fn get(&self, name: &str) -> Option<String> {
        self.cookies.get(name).map(|pair| pair.value.clone())
    }

    /// Number of cookies in the store.
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    /// True when no cookie is stored.
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

impl CookieBackend for MemoryBackend {
    fn read(&self) -> Result<String, StorageError> {
        let mut pairs: Vec<(u64, String)> = self
            .cookies
            .iter()
            .map(|entry| {
                (
                    entry.value().created,
                    format!("{}={}", entry.key(), entry.value().value),
                )
            })
            .collect();
        pairs.sort_by_key(|(created, _)| *created);

        let header = pairs
            .into_iter()
            .map(|(_, pair)| pair)
            .collect::<Vec<_>>()
            .join("; ");
        Ok(header)
    }

    fn write(&self, line: &str) -> Result<(), StorageError> {
        let (name, value) = split_cookie_line(line)?;
        if let Some(mut existing) = self.cookies.get_mut(name) {
            existing.value = value.to_string();
        } else {
            self.cookies.insert(
                name.to_string(),
                StoredPair {
                    created: self.sequence.fetch_add(1, Ordering::Relaxed),
                    value: value.to_string(),
                },
            );
        }
        Ok(())
    }
}
