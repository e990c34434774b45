//! Key-value storage adapters for [`ohp_core::ports::KeyValueStorePort`].

mod file_store;
mod memory_store;

pub use file_store::{FileKeyValueStore, DEFAULT_STORAGE_FILE};
pub use memory_store::InMemoryKeyValueStore;
