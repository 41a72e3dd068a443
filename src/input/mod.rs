//! Ambient input surface
//!
//! The host feeds global pointer and key events into an [`InputSurface`]; components
//! that need to observe them register listeners and receive a [`Subscription`]
//! guard whose lifetime is the registration's lifetime.

pub mod event;
pub mod surface;

pub use event::{EventKind, InputEvent, Key, Position, Rect};
pub use surface::{InputSurface, Listener, Subscription, SubscriptionId};
