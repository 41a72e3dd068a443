//! Console host
//!
//! A line-oriented stand-in for the application that embeds the panel. Each line
//! of input is a [`HostCommand`]: toggle the panel, click somewhere, press a key,
//! pick an option, submit, or reset. A [`Session`] executes commands against a
//! [`PanelController`](crate::controller::PanelController) and reports what the
//! host would display.

pub mod command;
pub mod session;

pub use command::{COMMANDS, HostCommand, help_text};
pub use session::{Response, Session};
