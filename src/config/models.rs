//! Configuration data models
//!
//! Application settings only. The article configuration chosen in the panel is
//! never written here.

use crate::input::Rect;
use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// User preferences
    pub preferences: UserPreferences,
    /// Where the panel is drawn on the host surface
    pub layout: PanelLayout,
}

/// User preferences and settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    /// Default log filter when `RUST_LOG` is not set (e.g. "info", "debug")
    pub log_level: String,
    /// Write logs to `panel.log` in the config directory instead of stderr
    pub log_to_file: bool,
}

/// Panel rectangle on the host surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelLayout {
    /// X position
    pub x: i32,
    /// Y position
    pub y: i32,
    /// Panel width
    pub width: u32,
    /// Panel height
    pub height: u32,
}

impl PanelLayout {
    /// Layout as a hit-testing rectangle
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl From<Rect> for PanelLayout {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 616,
            height: 1080,
        }
    }
}
