//! Panel controller module
//!
//! Coordinates the panel's visibility, its configuration draft, the dismissal
//! watcher, and the host's apply callback.
//!
//! # Overview
//!
//! The panel controller:
//! - **Toggles visibility** on request from the toggle trigger
//! - **Activates and releases** the dismissal watcher in lockstep with visibility
//! - **Edits the draft** one field at a time on behalf of field controls
//! - **Applies** a snapshot of the draft to the host on submit
//! - **Resets** the draft to defaults and applies the defaults in the same step
//!
//! # Architecture
//!
//! - `PanelController`: owns visibility, draft, and the optional watcher
//! - `PanelState`: snapshot handed to renderers and the toggle button
//! - `ApplyTarget`: host callback (closures, or `ChannelTarget` for an mpsc channel)
//! - `RegionSource`: yields the panel rectangle, read once per open cycle
//!
//! # Event Flow
//!
//! ```text
//! toggle() ──▶ open = true ──▶ DismissalWatcher::activate(region)
//!                                     │
//! InputSurface::dispatch ──▶ listener ┘──▶ close: watcher dropped, open = false
//!
//! set_field() ──▶ draft            submit() ──▶ ApplyTarget::apply(draft)
//! reset_to_default() ──▶ draft = default ──▶ ApplyTarget::apply(default)
//! ```
//!
//! # Locking
//!
//! Controller state lives behind one `parking_lot::Mutex`. The watcher is dropped in
//! the same critical section that clears the open flag, so no observer can see a
//! closed panel with live listeners. Lock order is controller state, then input
//! registry. Host callbacks run outside the state lock.

pub mod panel_controller;

pub use panel_controller::{
    ApplyTarget, ChannelTarget, CloseCause, PanelController, PanelState, RegionSource,
};
