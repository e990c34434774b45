use std::path::PathBuf;

use ohp_core::app_dirs::AppDirs;
use ohp_core::config::AppConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub storage_path: PathBuf,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            storage_path: dirs.app_data_root.join("storage.json"),
            config_path: dirs.app_data_root.join("config.toml"),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }

    /// Config used when no file is found, and the source of paths a loaded
    /// file leaves empty.
    pub fn default_config(&self) -> AppConfig {
        AppConfig {
            storage_path: self.storage_path.clone(),
            logs_dir: self.logs_dir.clone(),
            in_memory_storage: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ohp_core::app_dirs::AppDirs;
    use std::path::PathBuf;

    #[test]
    fn app_paths_derives_concrete_locations_from_app_data_root() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/tmp/onehousing"),
        };

        let paths = AppPaths::from_app_dirs(&dirs);

        assert_eq!(paths.storage_path, PathBuf::from("/tmp/onehousing/storage.json"));
        assert_eq!(paths.config_path, PathBuf::from("/tmp/onehousing/config.toml"));
        assert_eq!(paths.logs_dir, PathBuf::from("/tmp/onehousing/logs"));
    }

    #[test]
    fn default_config_points_at_derived_storage_and_logs() {
        let paths = AppPaths::from_app_dirs(&AppDirs {
            app_data_root: PathBuf::from("/tmp/onehousing"),
        });

        let config = paths.default_config();

        assert_eq!(config.storage_path, paths.storage_path);
        assert_eq!(config.logs_dir, paths.logs_dir);
        assert!(!config.in_memory_storage);
    }
}
