//! Text rendering of the panel and its toggle button
//!
//! Stateless: everything drawn comes from a `PanelState` snapshot.

use article_params::controller::PanelState;
use article_params::params::{ControlKind, FieldKey, OptionInfo};

/// Direction of the toggle button's chevron
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    /// Panel closed; pressing opens it
    Right,
    /// Panel open; pressing closes it
    Left,
}

impl ArrowDirection {
    /// Chevron for the given visibility
    pub fn for_visibility(open: bool) -> Self {
        if open {
            ArrowDirection::Left
        } else {
            ArrowDirection::Right
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            ArrowDirection::Right => "[>]",
            ArrowDirection::Left => "[<]",
        }
    }
}

/// Draw the toggle button, and the panel form when it is open
pub fn render(state: &PanelState) -> String {
    let arrow = ArrowDirection::for_visibility(state.open).glyph();
    if !state.open {
        return format!("{arrow} (panel closed)");
    }

    let mut lines = vec![format!("{arrow} SET PARAMETERS")];
    for key in FieldKey::ALL {
        lines.push(String::new());
        lines.extend(field_lines(key, state.draft.selected(key)));
        // The form separates text styling from page styling
        if key == FieldKey::FontColor {
            lines.push(String::new());
            lines.push("  ----------------".to_string());
        }
    }
    lines.push(String::new());
    lines.push("  [ Reset ]  [ Apply ]".to_string());
    lines.join("\n")
}

fn field_lines(key: FieldKey, selected: OptionInfo) -> [String; 2] {
    let options = key.options();
    match key.control() {
        ControlKind::Select => {
            let titles: Vec<&str> = options.iter().map(|o| o.title).collect();
            [
                format!("  {}: [{} v]", key.title(), selected.title),
                format!("    options: {}", titles.join(", ")),
            ]
        }
        ControlKind::RadioGroup => {
            let radios: Vec<String> = options
                .iter()
                .map(|o| {
                    let mark = if o.key == selected.key { "(*)" } else { "( )" };
                    format!("{mark} {}", o.title)
                })
                .collect();
            [
                format!("  {}:", key.title()),
                format!("    {}", radios.join("  ")),
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use article_params::params::{ArticleParams, FieldChange, FontSize};

    fn state(open: bool) -> PanelState {
        PanelState {
            open,
            draft: ArticleParams::default(),
            dismissals: 0,
        }
    }

    #[test]
    fn test_arrow_follows_visibility() {
        assert_eq!(ArrowDirection::for_visibility(false), ArrowDirection::Right);
        assert_eq!(ArrowDirection::for_visibility(true), ArrowDirection::Left);
    }

    #[test]
    fn test_closed_panel_shows_only_button() {
        let text = render(&state(false));
        assert!(text.starts_with("[>]"));
        assert!(!text.contains("Apply"));
    }

    #[test]
    fn test_open_panel_lists_every_field() {
        let text = render(&state(true));
        assert!(text.starts_with("[<]"));
        for key in FieldKey::ALL {
            assert!(text.contains(key.title()), "missing {}", key.title());
        }
        assert!(text.contains("[ Reset ]  [ Apply ]"));
    }

    #[test]
    fn test_form_layout_order() {
        let text = render(&state(true));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "[<] SET PARAMETERS");
        assert_eq!(lines.last(), Some(&"  [ Reset ]  [ Apply ]"));

        let separator = text.find("----").unwrap();
        assert!(text.find("Font color").unwrap() < separator);
        assert!(separator < text.find("Background color").unwrap());
    }

    #[test]
    fn test_radio_marks_selected_size() {
        let mut open = state(true);
        open.draft.apply_change(FieldChange::FontSize(FontSize::Medium));
        let text = render(&open);
        assert!(text.contains("(*) 25px"));
        assert!(text.contains("( ) 18px"));
    }
}
