//! Input event types delivered by the ambient input surface

use crate::error::{PanelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A point on the host surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate
    pub x: i32,
    /// Vertical coordinate
    pub y: i32,
}

impl Position {
    /// Create a position
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle; the panel's rendered region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width
    pub width: u32,
    /// Height
    pub height: u32,
}

impl Rect {
    /// Create a rectangle
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether `pos` lies inside the rectangle (right and bottom edges exclusive)
    pub fn contains(&self, pos: Position) -> bool {
        let (px, py) = (i64::from(pos.x), i64::from(pos.y));
        let (left, top) = (i64::from(self.x), i64::from(self.y));
        px >= left
            && py >= top
            && px < left + i64::from(self.width)
            && py < top + i64::from(self.height)
    }
}

/// Keyboard key, reduced to what the panel cares about
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape
    Escape,
    /// Enter / Return
    Enter,
    /// Tab
    Tab,
    /// A printable character
    Char(char),
    /// Any other named key
    Named(String),
}

impl Key {
    /// Whether the key carries the "escape" meaning
    pub fn is_escape(&self) -> bool {
        matches!(self, Key::Escape)
    }
}

impl FromStr for Key {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        if name.is_empty() {
            return Err(PanelError::InvalidCommand("empty key name".to_string()));
        }

        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(Key::Char(c));
        }

        Ok(match name.to_ascii_lowercase().as_str() {
            "escape" | "esc" => Key::Escape,
            "enter" | "return" => Key::Enter,
            "tab" => Key::Tab,
            "space" => Key::Char(' '),
            _ => Key::Named(name.to_string()),
        })
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Escape => f.write_str("Escape"),
            Key::Enter => f.write_str("Enter"),
            Key::Tab => f.write_str("Tab"),
            Key::Char(c) => write!(f, "{c}"),
            Key::Named(name) => f.write_str(name),
        }
    }
}

/// Class of input event a listener subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Pointer button pressed
    PointerDown,
    /// Key pressed
    KeyDown,
}

/// A global input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer button pressed at `position`
    PointerDown {
        /// Where the press landed
        position: Position,
    },
    /// Key pressed
    KeyDown {
        /// Which key
        key: Key,
    },
}

impl InputEvent {
    /// Pointer-down at `(x, y)`
    pub const fn pointer_down(x: i32, y: i32) -> Self {
        InputEvent::PointerDown {
            position: Position::new(x, y),
        }
    }

    /// Key-down of `key`
    pub const fn key_down(key: Key) -> Self {
        InputEvent::KeyDown { key }
    }

    /// The event class used for subscription matching
    pub fn kind(&self) -> EventKind {
        match self {
            InputEvent::PointerDown { .. } => EventKind::PointerDown,
            InputEvent::KeyDown { .. } => EventKind::KeyDown,
        }
    }
}
