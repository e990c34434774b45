use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Key-value storage file path (path info only, no existence check)
    pub storage_path: PathBuf,

    /// Directory for rolling log files
    pub logs_dir: PathBuf,

    /// Keep storage in memory only; nothing survives a restart
    pub in_memory_storage: bool,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// Missing sections produce empty values; nothing is validated here.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            storage_path: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("path"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            logs_dir: PathBuf::from(
                toml_value
                    .get("logging")
                    .and_then(|l| l.get("dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            in_memory_storage: toml_value
                .get("storage")
                .and_then(|s| s.get("in_memory"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            storage_path: PathBuf::new(),
            logs_dir: PathBuf::new(),
            in_memory_storage: false,
        }
    }
}
