//! Option sets for each panel field
//!
//! Every field of [`ArticleParams`](super::ArticleParams) is an enum whose variants
//! are exactly that field's option set. Each option carries a stable key (used in
//! JSON and console commands), a display title, and the style value the host applies.

use crate::error::{PanelError, Result};
use crate::params::FieldKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Static description of a single option, used by rendering collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionInfo {
    /// Stable identifier (kebab-case)
    pub key: &'static str,
    /// Human readable label
    pub title: &'static str,
    /// Style value applied by the host (font stack, size, color, width)
    pub value: &'static str,
}

/// A value drawn from one field's fixed option set
pub trait ParamOption: Copy + Eq + fmt::Debug + 'static {
    /// Field this option set belongs to
    const FIELD: FieldKey;
    /// Every option in display order
    const ALL: &'static [Self];

    /// Stable identifier (kebab-case)
    fn key(self) -> &'static str;
    /// Human readable label
    fn title(self) -> &'static str;
    /// Style value applied by the host
    fn value(self) -> &'static str;

    /// Describe this option for renderers
    fn info(self) -> OptionInfo {
        OptionInfo {
            key: self.key(),
            title: self.title(),
            value: self.value(),
        }
    }

    /// Look up an option by key, title or style value (ASCII case-insensitive)
    fn parse(text: &str) -> Result<Self> {
        let needle = text.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|option| {
                option.key().eq_ignore_ascii_case(needle)
                    || option.title().eq_ignore_ascii_case(needle)
                    || option.value().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| PanelError::UnknownOption {
                field: Self::FIELD.key(),
                value: needle.to_string(),
            })
    }
}

macro_rules! param_option {
    (
        $(#[$meta:meta])*
        $name:ident for $field:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => ($key:literal, $title:literal, $value:literal)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl ParamOption for $name {
            const FIELD: FieldKey = FieldKey::$field;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }

            fn title(self) -> &'static str {
                match self {
                    $(Self::$variant => $title,)+
                }
            }

            fn value(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.title())
            }
        }

        impl std::str::FromStr for $name {
            type Err = PanelError;

            fn from_str(s: &str) -> Result<Self> {
                <Self as ParamOption>::parse(s)
            }
        }
    };
}

param_option! {
    /// Article font family
    FontFamily for FontFamily {
        /// Open Sans
        #[default]
        OpenSans => ("open-sans", "Open Sans", "'Open Sans', sans-serif"),
        /// Ubuntu
        Ubuntu => ("ubuntu", "Ubuntu", "'Ubuntu', sans-serif"),
        /// Cormorant Garamond
        CormorantGaramond => ("cormorant-garamond", "Cormorant Garamond", "'Cormorant Garamond', serif"),
        /// Days One
        DaysOne => ("days-one", "Days One", "'Days One', sans-serif"),
        /// Merriweather
        Merriweather => ("merriweather", "Merriweather", "'Merriweather', serif"),
    }
}

param_option! {
    /// Article font size
    FontSize for FontSize {
        /// 18px
        #[default]
        Small => ("small", "18px", "18px"),
        /// 25px
        Medium => ("medium", "25px", "25px"),
        /// 38px
        Large => ("large", "38px", "38px"),
    }
}

param_option! {
    /// Article text color
    FontColor for FontColor {
        /// Black
        #[default]
        Black => ("black", "Black", "#000000"),
        /// White
        White => ("white", "White", "#FFFFFF"),
        /// Gray
        Gray => ("gray", "Gray", "#C4C4C4"),
        /// Pink
        Pink => ("pink", "Pink", "#FEAFE8"),
        /// Yellow
        Yellow => ("yellow", "Yellow", "#FFC802"),
        /// Green
        Green => ("green", "Green", "#80D994"),
        /// Purple
        Purple => ("purple", "Purple", "#D7A8FF"),
    }
}

param_option! {
    /// Article background color
    BackgroundColor for BackgroundColor {
        /// White
        #[default]
        White => ("white", "White", "#FFFFFF"),
        /// Black
        Black => ("black", "Black", "#000000"),
        /// Gray
        Gray => ("gray", "Gray", "#C4C4C4"),
        /// Pink
        Pink => ("pink", "Pink", "#FEAFE8"),
        /// Yellow
        Yellow => ("yellow", "Yellow", "#FFC802"),
        /// Green
        Green => ("green", "Green", "#80D994"),
        /// Purple
        Purple => ("purple", "Purple", "#D7A8FF"),
    }
}

param_option! {
    /// Maximum width of the article body
    ContentWidth for ContentWidth {
        /// Wide layout
        #[default]
        Wide => ("wide", "Wide", "1394px"),
        /// Narrow layout
        Narrow => ("narrow", "Narrow", "948px"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_key_title_and_value() {
        assert_eq!(FontSize::parse("large").unwrap(), FontSize::Large);
        assert_eq!(FontSize::parse("38px").unwrap(), FontSize::Large);
        assert_eq!(
            FontFamily::parse("Cormorant Garamond").unwrap(),
            FontFamily::CormorantGaramond
        );
        assert_eq!(FontColor::parse("#ffc802").unwrap(), FontColor::Yellow);
        assert_eq!(ContentWidth::parse("  NARROW ").unwrap(), ContentWidth::Narrow);
    }

    #[test]
    fn test_parse_rejects_unknown_option() {
        let err = FontSize::parse("huge").unwrap_err();
        match err {
            PanelError::UnknownOption { field, value } => {
                assert_eq!(field, "font-size");
                assert_eq!(value, "huge");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_keys_are_unique_within_each_set() {
        fn assert_unique<T: ParamOption>() {
            let mut keys: Vec<&str> = T::ALL.iter().map(|o| o.key()).collect();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), T::ALL.len(), "duplicate key in {:?}", T::FIELD);
        }

        assert_unique::<FontFamily>();
        assert_unique::<FontSize>();
        assert_unique::<FontColor>();
        assert_unique::<BackgroundColor>();
        assert_unique::<ContentWidth>();
    }

    #[test]
    fn test_serde_uses_option_key() {
        let json = serde_json::to_string(&FontFamily::DaysOne).unwrap();
        assert_eq!(json, "\"days-one\"");
        let parsed: BackgroundColor = serde_json::from_str("\"purple\"").unwrap();
        assert_eq!(parsed, BackgroundColor::Purple);
    }

    #[test]
    fn test_display_uses_title() {
        assert_eq!(FontSize::Medium.to_string(), "25px");
        assert_eq!(FontFamily::OpenSans.to_string(), "Open Sans");
    }
}
