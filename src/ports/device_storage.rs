//! Device storage port - the on-device key/value store.
//!
//! Models the browser's localStorage: string values under string keys,
//! single writer, no transactions. Injected into the session and sign-up
//! flows so tests can substitute an in-memory fake.

use async_trait::async_trait;

/// Errors that can occur during device storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(String),
}

/// Port for reading and writing on-device key/value storage.
///
/// A missing key is not an error: `get` yields `None`, which callers treat
/// as "nothing stored" (e.g. not logged in).
#[async_trait]
pub trait DeviceStorage: Send + Sync {
    /// Reads the value stored under a key, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes a value under a key, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;

    /// Removes the value under a key. Removing an absent key is a no-op.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
