//! # Configuration Loader
//!
//! `load_config` is pure data loading: read the TOML file and map it onto the
//! `AppConfig` DTO, accepting whatever the file contains. `resolve_config`
//! decides which file to read and fills empty paths from the app data dir.

use std::path::{Path, PathBuf};

use anyhow::Context;
use ohp_app::app_paths::AppPaths;
use ohp_core::config::AppConfig;
use ohp_core::ports::AppDirsPort;
use tracing::debug;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "OHP_CONFIG";

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Resolve the effective configuration.
///
/// Order: `explicit` (the binary passes `$OHP_CONFIG`), then
/// `<app data>/config.toml` if present, then paths under the app data root.
/// Empty paths in a loaded file fall back to those defaults.
pub fn resolve_config(
    app_dirs: &dyn AppDirsPort,
    explicit: Option<PathBuf>,
) -> anyhow::Result<AppConfig> {
    let dirs = app_dirs
        .get_app_dirs()
        .context("Failed to resolve application directories")?;
    let paths = AppPaths::from_app_dirs(&dirs);
    let defaults = paths.default_config();

    let config_path = match explicit {
        Some(path) => Some(path),
        None if paths.config_path.exists() => Some(paths.config_path),
        None => None,
    };

    let Some(config_path) = config_path else {
        debug!(root = %dirs.app_data_root.display(), "no config file, using defaults");
        return Ok(defaults);
    };

    debug!(path = %config_path.display(), "loading config file");
    let loaded = load_config(&config_path)?;
    Ok(fill_empty_paths(loaded, defaults))
}

fn fill_empty_paths(mut config: AppConfig, defaults: AppConfig) -> AppConfig {
    if config.storage_path.as_os_str().is_empty() {
        config.storage_path = defaults.storage_path;
    }
    if config.logs_dir.as_os_str().is_empty() {
        config.logs_dir = defaults.logs_dir;
    }
    config
}
