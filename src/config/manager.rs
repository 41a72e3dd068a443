//! Configuration manager for loading and saving application settings
//!
//! Settings live in `$ARTICLE_PARAMS_HOME/config.json` (falling back to
//! `./.article-params`) and are written atomically to prevent corruption.

use crate::config::models::AppConfig;
use crate::error::{PanelError, Result, StringError};
use std::path::PathBuf;
use tracing::{info, warn};

/// Environment variable overriding the configuration directory
pub const HOME_ENV: &str = "ARTICLE_PARAMS_HOME";

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Get the configuration directory
    pub fn get_config_dir() -> PathBuf {
        std::env::var_os(HOME_ENV)
            .map_or_else(|| PathBuf::from(".article-params"), PathBuf::from)
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join("config.json")
    }

    /// Ensure the configuration directory exists
    pub fn ensure_config_dir() -> Result<PathBuf> {
        let config_path = Self::get_config_path();
        let config_dir = config_path
            .parent()
            .ok_or_else(|| PanelError::ConfigError(StringError::new("Invalid config path")))?;

        std::fs::create_dir_all(config_dir)?;
        Ok(config_dir.to_path_buf())
    }

    /// Load configuration from disk
    ///
    /// If the configuration file doesn't exist or is corrupt, returns default configuration.
    pub fn load() -> Result<AppConfig> {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            info!("Configuration file not found, using defaults");
            return Ok(AppConfig::default());
        }

        let json = std::fs::read_to_string(&config_path)?;

        match serde_json::from_str(&json) {
            Ok(config) => {
                info!("Configuration loaded from {}", config_path.display());
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                Ok(AppConfig::default())
            }
        }
    }

    /// Save configuration to disk with atomic write
    ///
    /// Uses a temporary file and rename to ensure atomic write operation.
    pub fn save(config: &AppConfig) -> Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        // Atomic write: write to temp file, then rename
        let temp_path = config_dir.join("config.json.tmp");
        let json = serde_json::to_string_pretty(config)?;
        std::fs::write(&temp_path, json)?;
        std::fs::rename(temp_path, &config_path)?;

        info!("Configuration saved to {}", config_path.display());
        Ok(())
    }
}
