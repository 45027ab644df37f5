//! In-memory device storage adapter.
//!
//! The test fake for the localStorage analog. Also used as the default
//! backend for one-shot demo runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{DeviceStorage, StorageError};

/// In-memory key/value storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDeviceStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryDeviceStorage {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every stored entry (useful for tests).
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// True when nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl DeviceStorage for InMemoryDeviceStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get_returns_the_value() {
        let storage = InMemoryDeviceStorage::new();
        storage
            .set("simwork-user", "{\"id\":\"demo-user\"}".to_string())
            .await
            .unwrap();

        let value = storage.get("simwork-user").await.unwrap();
        assert_eq!(value.as_deref(), Some("{\"id\":\"demo-user\"}"));
    }

    #[tokio::test]
    async fn get_of_missing_key_is_none() {
        let storage = InMemoryDeviceStorage::new();
        assert_eq!(storage.get("simwork-user").await.unwrap(), None);
    }

    #[tokio::test]
    async fn remove_deletes_the_key_and_tolerates_absence() {
        let storage = InMemoryDeviceStorage::new();
        storage.set("k", "v".to_string()).await.unwrap();
        storage.remove("k").await.unwrap();
        storage.remove("k").await.unwrap();
        assert!(storage.is_empty().await);
    }
}
