//! `article-params` - Dismissible side panel for article style parameters
//!
//! A toggleable panel holding a draft of five style fields (font family, font size,
//! font color, background color, content width). The draft reaches the host only
//! when the user submits or resets. While open, the panel closes itself on a
//! pointer press outside its region or on Escape.
//!
//! # Architecture
//!
//! - `PanelController` owns visibility, the draft, and the dismissal watcher
//! - `DismissalWatcher` holds the pointer-down/key-down subscriptions while open
//! - `InputSurface` is the ambient event registry with RAII `Subscription` guards
//! - `host::Session` drives a panel from console commands

// Module declarations
pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod input;
pub mod params;
pub mod utils;
pub mod watcher;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use controller::{ApplyTarget, PanelController, PanelState};
pub use error::{PanelError, Result};
pub use params::{ArticleParams, FieldChange, FieldKey};
