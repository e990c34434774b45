//! Dependency wiring: concrete adapters plugged into the use cases.

use std::sync::Arc;

use anyhow::bail;
use ohp_app::{LoadSignedInPhone, PersistPhoneNumber, SignInOrchestrator};
use ohp_core::config::AppConfig;
use ohp_core::ports::{AlertPort, KeyValueStorePort};
use ohp_infra::{FileKeyValueStore, InMemoryKeyValueStore};
use tracing::info;

use crate::shell::{Console, ConsoleAlert, Session, StackNavigator};

/// Fully wired application.
pub struct AppRuntime {
    pub session: Session,
    pub navigator: Arc<StackNavigator>,
    pub store: Arc<dyn KeyValueStorePort>,
}

/// Build the key-value store selected by the configuration.
pub fn build_store(config: &AppConfig) -> anyhow::Result<Arc<dyn KeyValueStorePort>> {
    if config.in_memory_storage {
        info!("using in-memory storage");
        return Ok(Arc::new(InMemoryKeyValueStore::new()));
    }
    if config.storage_path.as_os_str().is_empty() {
        bail!("storage path is empty and in-memory storage is disabled");
    }
    info!(path = %config.storage_path.display(), "using file storage");
    Ok(Arc::new(FileKeyValueStore::new(config.storage_path.clone())))
}

pub fn build_runtime(config: &AppConfig, console: Arc<Console>) -> anyhow::Result<AppRuntime> {
    let store = build_store(config)?;
    let navigator = Arc::new(StackNavigator::default());
    let alerts: Arc<dyn AlertPort> = Arc::new(ConsoleAlert::new(console.clone()));

    let sign_in = Arc::new(SignInOrchestrator::new(
        Arc::new(PersistPhoneNumber::new(store.clone())),
        navigator.clone(),
        alerts,
    ));
    let load_signed_in_phone = Arc::new(LoadSignedInPhone::new(store.clone()));

    let session = Session::new(sign_in, load_signed_in_phone, navigator.clone(), console);

    Ok(AppRuntime {
        session,
        navigator,
        store,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn empty_storage_path_is_rejected() {
        let result = build_store(&AppConfig::empty());

        assert!(result.is_err());
    }

    #[test]
    fn in_memory_flag_wins_over_empty_path() {
        let config = AppConfig {
            in_memory_storage: true,
            ..AppConfig::empty()
        };

        assert!(build_store(&config).is_ok());
    }

    #[test]
    fn file_store_uses_configured_path() {
        let config = AppConfig {
            storage_path: PathBuf::from("/tmp/ohp-wiring/storage.json"),
            ..AppConfig::empty()
        };

        assert!(build_store(&config).is_ok());
    }
}
