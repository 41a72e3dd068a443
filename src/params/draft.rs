//! The configuration draft and its field-level edits

use crate::error::{PanelError, Result};
use crate::params::options::{
    BackgroundColor, ContentWidth, FontColor, FontFamily, FontSize, OptionInfo, ParamOption,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Article style parameters held by the panel and handed to the host
///
/// Every field is typed by its option set, so a value can never fall outside it.
/// The type is `Copy`: whatever the host receives is a snapshot that later edits
/// cannot reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ArticleParams {
    /// Font family
    pub font_family: FontFamily,
    /// Font size
    pub font_size: FontSize,
    /// Text color
    pub font_color: FontColor,
    /// Background color
    pub background_color: BackgroundColor,
    /// Content width
    pub content_width: ContentWidth,
}

impl ArticleParams {
    /// Replace the single field named by `change`
    pub fn apply_change(&mut self, change: FieldChange) {
        match change {
            FieldChange::FontFamily(v) => self.font_family = v,
            FieldChange::FontSize(v) => self.font_size = v,
            FieldChange::FontColor(v) => self.font_color = v,
            FieldChange::BackgroundColor(v) => self.background_color = v,
            FieldChange::ContentWidth(v) => self.content_width = v,
        }
    }

    /// Copy of `self` with one field replaced
    #[must_use]
    pub fn with_change(mut self, change: FieldChange) -> Self {
        self.apply_change(change);
        self
    }

    /// Current selection of a field
    pub fn selected(&self, key: FieldKey) -> OptionInfo {
        match key {
            FieldKey::FontFamily => self.font_family.info(),
            FieldKey::FontSize => self.font_size.info(),
            FieldKey::FontColor => self.font_color.info(),
            FieldKey::BackgroundColor => self.background_color.info(),
            FieldKey::ContentWidth => self.content_width.info(),
        }
    }
}

/// How a field's option set is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Drop-down select
    Select,
    /// Inline radio group
    RadioGroup,
}

/// The five recognized panel fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    /// Font family
    FontFamily,
    /// Font size
    FontSize,
    /// Text color
    FontColor,
    /// Background color
    BackgroundColor,
    /// Content width
    ContentWidth,
}

impl FieldKey {
    /// All fields in panel order
    pub const ALL: [FieldKey; 5] = [
        FieldKey::FontFamily,
        FieldKey::FontSize,
        FieldKey::FontColor,
        FieldKey::BackgroundColor,
        FieldKey::ContentWidth,
    ];

    /// Stable identifier, matching the JSON field name
    pub fn key(self) -> &'static str {
        match self {
            FieldKey::FontFamily => "font-family",
            FieldKey::FontSize => "font-size",
            FieldKey::FontColor => "font-color",
            FieldKey::BackgroundColor => "background-color",
            FieldKey::ContentWidth => "content-width",
        }
    }

    /// Control caption
    pub fn title(self) -> &'static str {
        match self {
            FieldKey::FontFamily => "Font",
            FieldKey::FontSize => "Font size",
            FieldKey::FontColor => "Font color",
            FieldKey::BackgroundColor => "Background color",
            FieldKey::ContentWidth => "Content width",
        }
    }

    /// Font size is a radio group; everything else is a select
    pub fn control(self) -> ControlKind {
        match self {
            FieldKey::FontSize => ControlKind::RadioGroup,
            _ => ControlKind::Select,
        }
    }

    /// The field's option set in display order
    pub fn options(self) -> Vec<OptionInfo> {
        fn infos<T: ParamOption>() -> Vec<OptionInfo> {
            T::ALL.iter().map(|o| o.info()).collect()
        }

        match self {
            FieldKey::FontFamily => infos::<FontFamily>(),
            FieldKey::FontSize => infos::<FontSize>(),
            FieldKey::FontColor => infos::<FontColor>(),
            FieldKey::BackgroundColor => infos::<BackgroundColor>(),
            FieldKey::ContentWidth => infos::<ContentWidth>(),
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldKey {
    type Err = PanelError;

    /// Accepts the kebab-case key, the camelCase form, or snake_case
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "fontfamily" | "font" => Ok(FieldKey::FontFamily),
            "fontsize" | "size" => Ok(FieldKey::FontSize),
            "fontcolor" | "color" => Ok(FieldKey::FontColor),
            "backgroundcolor" | "background" => Ok(FieldKey::BackgroundColor),
            "contentwidth" | "width" => Ok(FieldKey::ContentWidth),
            _ => Err(PanelError::UnknownField(s.trim().to_string())),
        }
    }
}

/// A single-field edit: the field key paired with a value from its option set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldChange {
    /// New font family
    FontFamily(FontFamily),
    /// New font size
    FontSize(FontSize),
    /// New text color
    FontColor(FontColor),
    /// New background color
    BackgroundColor(BackgroundColor),
    /// New content width
    ContentWidth(ContentWidth),
}

impl FieldChange {
    /// Field this change targets
    pub fn key(self) -> FieldKey {
        match self {
            FieldChange::FontFamily(_) => FieldKey::FontFamily,
            FieldChange::FontSize(_) => FieldKey::FontSize,
            FieldChange::FontColor(_) => FieldKey::FontColor,
            FieldChange::BackgroundColor(_) => FieldKey::BackgroundColor,
            FieldChange::ContentWidth(_) => FieldKey::ContentWidth,
        }
    }

    /// Selected option
    pub fn option(self) -> OptionInfo {
        match self {
            FieldChange::FontFamily(v) => v.info(),
            FieldChange::FontSize(v) => v.info(),
            FieldChange::FontColor(v) => v.info(),
            FieldChange::BackgroundColor(v) => v.info(),
            FieldChange::ContentWidth(v) => v.info(),
        }
    }

    /// Build a change from a field key and option text
    pub fn parse(field: FieldKey, option: &str) -> Result<Self> {
        Ok(match field {
            FieldKey::FontFamily => FieldChange::FontFamily(FontFamily::parse(option)?),
            FieldKey::FontSize => FieldChange::FontSize(FontSize::parse(option)?),
            FieldKey::FontColor => FieldChange::FontColor(FontColor::parse(option)?),
            FieldKey::BackgroundColor => {
                FieldChange::BackgroundColor(BackgroundColor::parse(option)?)
            }
            FieldKey::ContentWidth => FieldChange::ContentWidth(ContentWidth::parse(option)?),
        })
    }
}

impl From<FontFamily> for FieldChange {
    fn from(v: FontFamily) -> Self {
        FieldChange::FontFamily(v)
    }
}

impl From<FontSize> for FieldChange {
    fn from(v: FontSize) -> Self {
        FieldChange::FontSize(v)
    }
}

impl From<FontColor> for FieldChange {
    fn from(v: FontColor) -> Self {
        FieldChange::FontColor(v)
    }
}

impl From<BackgroundColor> for FieldChange {
    fn from(v: BackgroundColor) -> Self {
        FieldChange::BackgroundColor(v)
    }
}

impl From<ContentWidth> for FieldChange {
    fn from(v: ContentWidth) -> Self {
        FieldChange::ContentWidth(v)
    }
}
