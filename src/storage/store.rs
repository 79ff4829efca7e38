//! Cookie-backed object storage.
//!
//! [`CookieStorage`] keeps one JSON object in memory, mirrored into a single
//! named cookie of a [`CookieBackend`] host store. All reads and mutations
//! are served from memory; nothing reaches the host until an explicit
//! [`save`](CookieStorage::save), and nothing leaves it again until the next
//! [`fetch`](CookieStorage::fetch).

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use time::OffsetDateTime;

use crate::base::error::StorageError;
use crate::cookies::{attributes, pairs};
use crate::storage::backend::CookieBackend;
use crate::storage::options::{OptionKey, OptionValue, StorageOptions};

/// What [`CookieStorage::fetch`] found in the host store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The named cookie existed and held a JSON object.
    Loaded,
    /// No cookie with this storage's name; the mapping is now empty.
    Missing,
    /// The cookie existed but its payload was not a JSON object; the mapping
    /// is now empty.
    Corrupt,
}

/// A JSON object stored in one named cookie.
///
/// Mutators return `&mut Self` so edits chain:
///
/// ```rust
/// use std::sync::Arc;
///
/// use cookiestash::storage::backend::MemoryBackend;
/// use cookiestash::storage::store::CookieStorage;
///
/// let mut prefs = CookieStorage::new("prefs", Arc::new(MemoryBackend::new()))?;
/// prefs.set("theme", "dark").set("volume", 11).remove("stale");
/// prefs.save()?;
/// # Ok::<(), cookiestash::base::error::StorageError>(())
/// ```
pub struct CookieStorage {
    name: String,
    options: StorageOptions,
    data: Map<String, Value>,
    backend: Arc<dyn CookieBackend>,
}

impl CookieStorage {
    /// Create a storage with default options and fetch its current state.
    ///
    /// Fails with [`StorageError::InvalidName`] on an empty name, or with the
    /// host error if the initial read fails. An absent or unparsable stored
    /// payload is not an error; the mapping simply starts empty.
    pub fn new(
        name: impl Into<String>,
        backend: Arc<dyn CookieBackend>,
    ) -> Result<Self, StorageError> {
        Self::with_options(name, StorageOptions::default(), backend)
    }

    /// Create a storage with explicit options and fetch its current state.
    pub fn with_options(
        name: impl Into<String>,
        options: StorageOptions,
        backend: Arc<dyn CookieBackend>,
    ) -> Result<Self, StorageError> {
        let name = name.into();
        if name.is_empty() {
            return Err(StorageError::InvalidName);
        }
        let mut storage = Self {
            name,
            options,
            data: Map::new(),
            backend,
        };
        storage.fetch()?;
        Ok(storage)
    }

    /// The cookie name this storage reads and writes.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All options.
    pub fn options(&self) -> &StorageOptions {
        &self.options
    }

    /// One option, as its tagged value.
    pub fn option(&self, key: OptionKey) -> OptionValue {
        self.options.get(key)
    }

    /// Set one option. Takes effect from the next save. Chainable.
    pub fn set_option(&mut self, value: OptionValue) -> &mut Self {
        self.options.set(value);
        self
    }

    /// Merge several options, leaving unnamed ones untouched. Chainable.
    pub fn set_options(&mut self, values: impl IntoIterator<Item = OptionValue>) -> &mut Self {
        self.options.merge(values);
        self
    }

    /// Re-read the mapping from the host store, replacing it wholesale.
    ///
    /// Unsaved local edits are discarded. Only a host read failure is an
    /// error; a missing cookie or an unusable payload resets the mapping to
    /// empty and reports through the returned [`FetchOutcome`].
    pub fn fetch(&mut self) -> Result<FetchOutcome, StorageError> {
        let header = self.backend.read()?;
        let outcome = match pairs::find_value(&header, &self.name) {
            None => {
                self.data = Map::new();
                FetchOutcome::Missing
            }
            Some(payload) => match serde_json::from_str::<Value>(&payload) {
                Ok(Value::Object(data)) => {
                    tracing::debug!(name = %self.name, keys = data.len(), "loaded stored mapping");
                    self.data = data;
                    FetchOutcome::Loaded
                }
                Ok(_) => {
                    tracing::warn!(name = %self.name, "stored payload is not a JSON object, resetting");
                    self.data = Map::new();
                    FetchOutcome::Corrupt
                }
                Err(error) => {
                    tracing::warn!(name = %self.name, %error, "stored payload is not valid JSON, resetting");
                    self.data = Map::new();
                    FetchOutcome::Corrupt
                }
            },
        };
        Ok(outcome)
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Value stored under `key`, deserialized into `T`.
    ///
    /// `None` when the key is absent or the value does not fit `T`.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        serde_json::from_value(self.data.get(key)?.clone()).ok()
    }

    /// The whole mapping, in insertion order.
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Mutable access to the whole mapping.
    ///
    /// Edits are visible to every later read and save, and discarded by the
    /// next fetch like any other unsaved edit.
    pub fn data_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.data
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Stored keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.data.keys().map(String::as_str)
    }

    /// Store `value` under `key`, overwriting any existing value. Chainable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Store every pair in iteration order, overwriting existing keys.
    /// Chainable.
    pub fn set_all<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        for (key, value) in entries {
            self.data.insert(key.into(), value.into());
        }
        self
    }

    /// Delete `key`, keeping every other pair in its relative order. An
    /// empty or absent key is a no-op. Chainable.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        if key.is_empty() {
            return self;
        }
        self.data.shift_remove(key);
        self
    }

    /// Reset the mapping to empty. Chainable, so persisting the cleared
    /// state is `storage.clear().save()`.
    pub fn clear(&mut self) -> &mut Self {
        self.data.clear();
        self
    }

    /// Write the mapping to the host store as one cookie line.
    ///
    /// Only this storage's named cookie is set; other cookies in the host
    /// store are untouched. Instances sharing a name clobber each other
    /// wholesale, last write wins.
    pub fn save(&self) -> Result<(), StorageError> {
        let payload = serde_json::to_string(&self.data)?;
        let suffix = attributes::suffix(
            self.options.path.as_deref(),
            self.options.domain.as_deref(),
            self.options.lifetime,
            self.options.secure,
            OffsetDateTime::now_utc(),
        )?;
        let line = attributes::cookie_line(&self.name, &payload, &suffix);
        tracing::debug!(name = %self.name, bytes = line.len(), "saving mapping");
        self.backend.write(&line)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::storage::backend::MemoryBackend;

    #[test]
    fn test_empty_name_rejected() {
        let result = CookieStorage::new("", Arc::new(MemoryBackend::new()));
        assert!(matches!(result, Err(StorageError::InvalidName)));
    }

    #[test]
    fn test_new_storage_starts_empty() {
        let storage = CookieStorage::new("prefs", Arc::new(MemoryBackend::new())).unwrap();
        assert_eq!(storage.name(), "prefs");
        assert!(storage.is_empty());
        assert_eq!(storage.len(), 0);
    }

    #[test]
    fn test_chained_mutators() {
        let mut storage = CookieStorage::new("prefs", Arc::new(MemoryBackend::new())).unwrap();
        storage
            .set("a", 1)
            .set("b", "two")
            .set_all([("c", json!(3)), ("d", json!(4))])
            .remove("b");
        assert_eq!(storage.keys().collect::<Vec<_>>(), vec!["a", "c", "d"]);
        assert_eq!(storage.get("a"), Some(&json!(1)));
        assert_eq!(storage.get("b"), None);
    }

    #[test]
    fn test_remove_empty_key_is_noop() {
        let mut storage = CookieStorage::new("prefs", Arc::new(MemoryBackend::new())).unwrap();
        storage.set("", "kept").remove("");
        assert_eq!(storage.get(""), Some(&json!("kept")));
        storage.remove("never-there");
        assert_eq!(storage.len(), 1);
    }
}
