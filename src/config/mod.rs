//! Configuration management module
//!
//! This module handles loading, saving, and managing application settings
//! (logging and panel layout). Settings are stored in
//! `$ARTICLE_PARAMS_HOME/config.json` with atomic writes to prevent corruption.

pub mod manager;
pub mod models;

pub use manager::{ConfigManager, HOME_ENV};
pub use models::{AppConfig, PanelLayout, UserPreferences};
