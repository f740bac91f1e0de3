//! Key-value persistence port.
//!
//! The session layer depends only on [`KeyValueStore`]; adapters decide where
//! the values live. Values are opaque strings, keys are short identifiers.

mod error;
mod file_store;
mod memory_store;

pub use error::{Result as StorageResult, StorageError};
pub use file_store::FileKeyValueStore;
pub use memory_store::MemoryKeyValueStore;

use async_trait::async_trait;

/// Async string key-value store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value. A missing key is `Ok(None)`.
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one.
    async fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete a value. Deleting a missing key succeeds.
    async fn remove_item(&self, key: &str) -> StorageResult<()>;
}

/// Keys are non-empty ASCII alphanumerics plus `.`, `_` and `-`, and may not
/// start with a dot.
#[track_caller]
pub(crate) fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));

    if valid {
        Ok(())
    } else {
        Err(StorageError::invalid_key(key))
    }
}
