//! Durable key-value storage port.
//!
//! String values addressed by string keys, surviving application restarts.
//! Each call is treated as atomic and isolated by the callers.

use async_trait::async_trait;

use crate::ports::errors::StorageError;

/// Key under which the signed-in phone number is stored.
pub const PHONE_NUMBER_KEY: &str = "phoneNumber";

#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Read a value. `Ok(None)` when the key was never written.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
