use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use ohp_core::ports::{KeyValueStorePort, StorageError};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;

pub const DEFAULT_STORAGE_FILE: &str = "storage.json";

/// Durable key-value store backed by a single JSON object file.
///
/// Writes go to a sibling temp file which is synced and then renamed over
/// the target, so readers see either the old or the new map.
pub struct FileKeyValueStore {
    storage_file_path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Create store with custom file path
    pub fn new(storage_file_path: PathBuf) -> Self {
        Self {
            storage_file_path,
            write_lock: Mutex::new(()),
        }
    }

    /// Create store with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_STORAGE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.storage_file_path
    }

    async fn ensure_parent_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.storage_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    async fn read_items(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let content = match fs::read_to_string(&self.storage_file_path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(err) => return Err(err.into()),
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content)
            .map_err(|e| StorageError::Corrupt(format!("Failed to parse storage file: {e}")))
    }

    async fn write_items(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(items)
            .map_err(|e| StorageError::Corrupt(format!("Failed to serialize storage: {e}")))?;

        let tmp_path = self.storage_file_path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp_path).await?;
        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&tmp_path, &self.storage_file_path).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.read_items().await?;
        Ok(items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut items = self.read_items().await?;
        items.insert(key.to_string(), value.to_string());
        self.write_items(&items).await?;

        debug!(key, path = %self.storage_file_path.display(), "storage item written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn get_item_returns_none_when_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().join("missing.json"));

        assert_eq!(store.get_item("phoneNumber").await.unwrap(), None);
    }

    #[tokio::test]
    async fn value_survives_a_new_store_instance() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");

        FileKeyValueStore::new(path.clone())
            .set_item("phoneNumber", "098 123 4567")
            .await
            .unwrap();
        let reopened = FileKeyValueStore::new(path);

        assert_eq!(
            reopened.get_item("phoneNumber").await.unwrap().as_deref(),
            Some("098 123 4567")
        );
    }

    #[tokio::test]
    async fn set_item_keeps_other_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().join("storage.json"));

        store.set_item("other", "value").await.unwrap();
        store.set_item("phoneNumber", "123 4567").await.unwrap();

        assert_eq!(store.get_item("other").await.unwrap().as_deref(), Some("value"));
        assert!(!temp_dir.path().join("storage.json.tmp").exists());
    }

    #[tokio::test]
    async fn set_item_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().join("nested/dir/storage.json"));

        store.set_item("phoneNumber", "4567").await.unwrap();

        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn empty_file_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let storage_file = temp_dir.path().join("empty.json");
        fs::write(&storage_file, "").await.unwrap();

        let store = FileKeyValueStore::new(storage_file);

        assert_eq!(store.get_item("phoneNumber").await.unwrap(), None);
    }

    #[tokio::test]
    async fn invalid_json_returns_corrupt_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage_file = temp_dir.path().join("invalid.json");
        fs::write(&storage_file, "{invalid json").await.unwrap();

        let store = FileKeyValueStore::new(storage_file);
        let result = store.get_item("phoneNumber").await;

        assert!(matches!(result, Err(StorageError::Corrupt(_))));
        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }

    #[tokio::test]
    async fn unwritable_location_returns_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").await.unwrap();

        let store = FileKeyValueStore::new(blocker.join("storage.json"));
        let result = store.set_item("phoneNumber", "4567").await;

        assert!(matches!(result, Err(StorageError::Io(_))));
    }

    #[tokio::test]
    async fn with_defaults_uses_expected_path() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::with_defaults(temp_dir.path().to_path_buf());

        assert_eq!(store.path(), temp_dir.path().join(DEFAULT_STORAGE_FILE));
    }
}
