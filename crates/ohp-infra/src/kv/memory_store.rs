use std::collections::HashMap;

use async_trait::async_trait;
use ohp_core::ports::{KeyValueStorePort, StorageError};
use tokio::sync::RwLock;

/// Volatile store. Values are lost when the process exits.
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    items: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStorePort for InMemoryKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
