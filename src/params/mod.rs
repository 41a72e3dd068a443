//! Article style parameters
//!
//! Defines the configuration draft edited by the panel ([`ArticleParams`]), the five
//! field option sets, and the typed single-field edit ([`FieldChange`]) emitted by
//! field controls.

pub mod draft;
pub mod options;

pub use draft::{ArticleParams, ControlKind, FieldChange, FieldKey};
pub use options::{
    BackgroundColor, ContentWidth, FontColor, FontFamily, FontSize, OptionInfo, ParamOption,
};
