//! Where the sign-in app keeps its data on this machine.
//!
//! The root holds `storage.json`, an optional `config.toml` and the `logs/`
//! directory. `OHP_DATA_DIR` moves the whole root, which is how a second
//! install or a test run keeps its signed-in number apart.

use std::ffi::OsString;
use std::path::PathBuf;

use ohp_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

/// Environment variable that replaces the platform data root.
pub const DATA_DIR_ENV: &str = "OHP_DATA_DIR";

const APP_DIR_NAME: &str = "onehousing-pro";

#[derive(Debug, Clone, Default)]
pub struct PlatformAppDirs {
    data_root: Option<PathBuf>,
}

impl PlatformAppDirs {
    /// Reads `OHP_DATA_DIR` once; unset or empty means the platform default.
    pub fn from_env() -> Self {
        Self::from_override(std::env::var_os(DATA_DIR_ENV))
    }

    /// Uses `root` as the app data root, without appending the app name.
    pub fn with_data_root(root: PathBuf) -> Self {
        Self {
            data_root: Some(root),
        }
    }

    fn from_override(value: Option<OsString>) -> Self {
        Self {
            data_root: value.filter(|v| !v.is_empty()).map(PathBuf::from),
        }
    }
}

impl AppDirsPort for PlatformAppDirs {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let app_data_root = match &self.data_root {
            Some(root) => root.clone(),
            None => dirs::data_local_dir()
                .ok_or(AppDirsError::DataLocalDirUnavailable)?
                .join(APP_DIR_NAME),
        };
        Ok(AppDirs { app_data_root })
    }
}
