//! Logging system initialization
//!
//! Sets up tracing-based logging either on stderr or in `panel.log` inside the
//! configuration directory. File logs are rotated on startup, keeping 9
//! historical files.

use crate::config::{ConfigManager, UserPreferences};
use crate::error::{PanelError, Result, StringError};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Maximum number of historical log files to keep (panel.log.1 through panel.log.9)
const MAX_LOG_FILES: u8 = 9;

/// Initialize the logging system
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `preferences.log_level`.
pub fn init_logging(preferences: &UserPreferences) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&preferences.log_level))
        .map_err(|e| PanelError::ConfigError(Box::new(e)))?;

    if preferences.log_to_file {
        let log_dir = ConfigManager::ensure_config_dir()?;
        rotate_logs_on_startup(&log_dir.join("panel.log"))?;

        // Rotation is handled above on startup, not by the appender
        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix("panel")
            .filename_suffix("log")
            .build(&log_dir)
            .map_err(|e| PanelError::ConfigError(Box::new(e)))?;

        let subscriber = fmt()
            .with_writer(file_appender)
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| PanelError::ConfigError(Box::new(e)))?;
    } else {
        let subscriber = fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| PanelError::ConfigError(Box::new(e)))?;
    }

    tracing::info!("article-params v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

/// Rotate log files on application startup
///
/// - panel.log.9 is deleted (oldest log)
/// - panel.log.N -> panel.log.N+1 for N in 8..=1
/// - panel.log -> panel.log.1
/// - A fresh panel.log will be created by the logger
fn rotate_logs_on_startup(log_path: &Path) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let log_dir = log_path
        .parent()
        .ok_or_else(|| PanelError::ConfigError(StringError::new("Invalid log path")))?;

    let log_name = log_path
        .file_name()
        .ok_or_else(|| PanelError::ConfigError(StringError::new("Invalid log filename")))?
        .to_string_lossy();

    let oldest_log = log_dir.join(format!("{log_name}.{MAX_LOG_FILES}"));
    if oldest_log.exists() {
        std::fs::remove_file(&oldest_log)?;
    }

    for i in (1..MAX_LOG_FILES).rev() {
        let current_log = log_dir.join(format!("{log_name}.{i}"));
        let next_log = log_dir.join(format!("{log_name}.{}", i + 1));

        if current_log.exists() {
            std::fs::rename(&current_log, &next_log)?;
        }
    }

    std::fs::rename(log_path, log_dir.join(format!("{log_name}.1")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_dir;
    use std::fs;

    #[test]
    fn test_rotate_logs_on_startup_basic() {
        let temp_dir = create_test_dir();
        let log_path = temp_dir.path().join("panel.log");
        fs::write(&log_path, "Session 1").unwrap();

        rotate_logs_on_startup(&log_path).unwrap();

        let log_1 = temp_dir.path().join("panel.log.1");
        assert!(log_1.exists(), "panel.log.1 should exist after rotation");
        assert!(!log_path.exists(), "panel.log is recreated by the logger");
        assert_eq!(fs::read_to_string(&log_1).unwrap(), "Session 1");
    }

    #[test]
    fn test_rotate_logs_on_startup_respects_max_files() {
        let temp_dir = create_test_dir();
        let log_path = temp_dir.path().join("panel.log");

        for i in 1..=12 {
            fs::write(&log_path, format!("Session {i}")).unwrap();
            rotate_logs_on_startup(&log_path).unwrap();
        }

        for i in 1..=MAX_LOG_FILES {
            assert!(temp_dir.path().join(format!("panel.log.{i}")).exists());
        }
        assert!(!temp_dir.path().join("panel.log.10").exists());

        // Sessions 1-3 were dropped; 4 is the oldest kept
        let oldest = fs::read_to_string(temp_dir.path().join("panel.log.9")).unwrap();
        assert_eq!(oldest, "Session 4");
        let newest = fs::read_to_string(temp_dir.path().join("panel.log.1")).unwrap();
        assert_eq!(newest, "Session 12");
    }

    #[test]
    fn test_rotate_logs_on_startup_no_existing_log() {
        let temp_dir = create_test_dir();
        let log_path = temp_dir.path().join("panel.log");

        assert!(rotate_logs_on_startup(&log_path).is_ok());
        assert!(!temp_dir.path().join("panel.log.1").exists());
    }
}
