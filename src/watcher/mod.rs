//! Dismissal watcher module
//!
//! Implements the "close on outside interaction" protocol for the panel.
//!
//! # Overview
//!
//! While the panel is open a [`DismissalWatcher`] listens on the ambient
//! [`InputSurface`](crate::input::InputSurface) for:
//! - **Pointer-down** outside the panel region → request close
//! - **Key-down** of Escape → request close, wherever the pointer is
//!
//! # State Machine
//!
//! ```text
//!            panel opens: DismissalWatcher::activate
//!   INACTIVE ─────────────────────────────────────────▶ ACTIVE
//!       ▲                                                 │
//!       └──────────── panel closes: watcher dropped ──────┘
//! ```
//!
//! INACTIVE has no representation other than the absence of a watcher, so an event
//! arriving while the panel is closed has no listener to reach. Each activation
//! captures the panel region fresh, so a listener from an earlier open cycle can
//! never test against a stale region.

pub mod dismissal_watcher;

pub use dismissal_watcher::{DismissReason, DismissalWatcher};
