//! Storage error types.

use thiserror::Error;

/// Errors surfaced by storage construction, saving, and host-store I/O.
///
/// An absent or unparsable stored payload is deliberately not an error:
/// fetch recovers by resetting the mapping and reports what happened through
/// [`FetchOutcome`](crate::storage::store::FetchOutcome).
#[derive(Debug, Error)]
pub enum StorageError {
    /// Construction was given an empty storage name.
    #[error("Invalid storage name: must be a non-empty string")]
    InvalidName,

    /// A cookie line handed to a backend did not start with a `name=value`
    /// pair.
    #[error("Invalid cookie line: expected a leading name=value pair")]
    InvalidCookieLine,

    /// A written `name=value` pair was larger than the host store accepts.
    #[error("Cookie pair of {size} bytes exceeds the {limit} byte limit")]
    QuotaExceeded { size: usize, limit: usize },

    /// The host cookie store failed to read or write.
    #[error("Cookie store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The mapping could not be serialized to JSON.
    #[error("Payload serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// An `expires` timestamp could not be formatted.
    #[error("Cookie date formatting failed: {0}")]
    DateFormat(#[from] time::error::Format),
}
