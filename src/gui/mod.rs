//! GUI module
//!
//! Text presentation of the panel for the console host: the toggle button's
//! chevron and the form with its field controls.

pub mod panel_view;

pub use panel_view::render;
