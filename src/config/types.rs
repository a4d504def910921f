use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::list_store::DEFAULT_STORAGE_KEY;
use crate::storage::FileStore;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the item list is saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Store document path (default: `<data_dir>/ticklist/store.json`).
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    /// Key the item list is saved under (default: "items").
    #[serde(default = "default_storage_key")]
    pub key: String,
}

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Log output settings. `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "ticklist=debug" (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path (default: `<cache_dir>/ticklist/ticklist.log`).
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl StorageConfig {
    pub fn data_file(&self) -> PathBuf {
        self.data_file.clone().unwrap_or_else(FileStore::default_path)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl LoggingConfig {
    pub fn log_file(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
            cache_dir.join("ticklist").join("ticklist.log")
        })
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            key: default_storage_key(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
