//! File-backed host cookie store.
//!
//! Persists the cookie pairs as pretty-printed JSON at a fixed path, the
//! closest stand-in for a browser profile's cookie database. Storages over a
//! [`FileBackend`] survive process restarts.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::base::error::StorageError;
use crate::storage::backend::{split_cookie_line, CookieBackend};

/// One persisted cookie pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredCookie {
    name: String,
    value: String,
}

/// Host cookie store persisted to a JSON file.
///
/// Every read and write goes through the file, so separate processes sharing
/// the path see the same last-write-wins behavior as storages sharing a
/// [`MemoryBackend`](crate::storage::backend::MemoryBackend). A missing file
/// is an empty store; an unparsable one is treated as empty and replaced by
/// the next write.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Use (or later create) the store file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<StoredCookie>, StorageError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(StorageError::Io(error)),
        };
        match serde_json::from_str(&json) {
            Ok(cookies) => Ok(cookies),
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %error,
                    "cookie file unreadable, starting empty"
                );
                Ok(Vec::new())
            }
        }
    }

    fn persist(&self, cookies: &[StoredCookie]) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(cookies)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl CookieBackend for FileBackend {
    fn read(&self) -> Result<String, StorageError> {
        let cookies = self.load()?;
        let header = cookies
            .iter()
            .map(|cookie| format!("{}={}", cookie.name, cookie.value))
            .collect::<Vec<_>>()
            .join("; ");
        Ok(header)
    }

    fn write(&self, line: &str) -> Result<(), StorageError> {
        let (name, value) = split_cookie_line(line)?;
        let mut cookies = self.load()?;
        match cookies.iter_mut().find(|cookie| cookie.name == name) {
            Some(existing) => existing.value = value.to_string(),
            None => cookies.push(StoredCookie {
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
        self.persist(&cookies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("cookies.json"));
        assert_eq!(backend.read().unwrap(), "");
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.json");

        let backend = FileBackend::new(&path);
        backend.write("prefs=%7B%7D;secure").unwrap();
        backend.write("session=abc;").unwrap();

        // A fresh backend over the same file sees the same store.
        let reopened = FileBackend::new(&path);
        assert_eq!(reopened.read().unwrap(), "prefs=%7B%7D; session=abc");
    }

    #[test]
    fn test_update_keeps_file_position() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("cookies.json"));
        backend.write("one=1;").unwrap();
        backend.write("two=2;").unwrap();
        backend.write("one=updated;").unwrap();
        assert_eq!(backend.read().unwrap(), "one=updated; two=2");
    }

    #[test]
    fn test_corrupt_file_recovers_on_next_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.json");
        fs::write(&path, "not json at all").unwrap();

        let backend = FileBackend::new(&path);
        assert_eq!(backend.read().unwrap(), "");

        backend.write("prefs=ok;").unwrap();
        assert_eq!(backend.read().unwrap(), "prefs=ok");
    }
}
