//! Console host command parsing

use crate::error::{PanelError, Result};
use crate::input::{Key, Position, Rect};
use crate::params::{FieldChange, FieldKey};
use std::str::FromStr;

/// Command summary printed by `help`
pub const COMMANDS: &str = "\
Commands:
  toggle                   open or close the panel
  click <x> <y>            pointer press at (x, y)
  key <name>               key press (Escape, Enter, Tab, a single character, ...)
  set <field> <option>     change one field of the draft
  submit                   apply the draft
  reset                    restore and apply the defaults
  show                     draw the panel
  move <x> <y> <w> <h>     move the panel (takes effect when it next opens)
  help                     show this text
  quit                     exit";

/// Usage text printed by `help`: the commands, then every field with its options
pub fn help_text() -> String {
    let mut lines = vec![COMMANDS.to_string(), String::new(), "Fields:".to_string()];
    for key in FieldKey::ALL {
        let options: Vec<&str> = key.options().iter().map(|o| o.key).collect();
        lines.push(format!("  {:<24} {}", key.key(), options.join(", ")));
    }
    lines.join("\n")
}

/// One line of console input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// Press the toggle button
    Toggle,
    /// Pointer press
    Click(Position),
    /// Key press
    Key(Key),
    /// Field control selection
    Set(FieldChange),
    /// Press "Apply"
    Submit,
    /// Press "Reset"
    Reset,
    /// Render the panel
    Show,
    /// Relayout the panel
    Move(Rect),
    /// Print usage
    Help,
    /// Leave the session
    Quit,
}

impl FromStr for HostCommand {
    type Err = PanelError;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(PanelError::InvalidCommand("empty command".to_string()));
        };
        let args: Vec<&str> = words.collect();

        let command = match verb.to_ascii_lowercase().as_str() {
            "toggle" | "t" => HostCommand::Toggle,
            "click" => {
                let [x, y] = numbers::<i32, 2>(verb, &args)?;
                HostCommand::Click(Position::new(x, y))
            }
            "key" => {
                if args.len() != 1 {
                    return Err(PanelError::InvalidCommand(
                        "key takes exactly one key name".to_string(),
                    ));
                }
                HostCommand::Key(args[0].parse()?)
            }
            "set" => {
                let Some((field, option)) = args.split_first() else {
                    return Err(PanelError::InvalidCommand(
                        "usage: set <field> <option>".to_string(),
                    ));
                };
                if option.is_empty() {
                    return Err(PanelError::InvalidCommand(format!(
                        "missing option for {field}"
                    )));
                }
                let field: FieldKey = field.parse()?;
                // Option titles may contain spaces ("Open Sans")
                HostCommand::Set(FieldChange::parse(field, &option.join(" "))?)
            }
            "submit" | "apply" => HostCommand::Submit,
            "reset" => HostCommand::Reset,
            "show" | "draw" => HostCommand::Show,
            "move" => {
                if args.len() != 4 {
                    return Err(PanelError::InvalidCommand(
                        "usage: move <x> <y> <w> <h>".to_string(),
                    ));
                }
                let [x, y] = numbers::<i32, 2>(verb, &args[..2])?;
                let [width, height] = numbers::<u32, 2>(verb, &args[2..])?;
                HostCommand::Move(Rect::new(x, y, width, height))
            }
            "help" | "?" => HostCommand::Help,
            "quit" | "exit" | "q" => HostCommand::Quit,
            other => {
                return Err(PanelError::InvalidCommand(format!(
                    "unknown command '{other}'"
                )));
            }
        };

        Ok(command)
    }
}

fn numbers<T: FromStr, const N: usize>(verb: &str, args: &[&str]) -> Result<[T; N]> {
    let parsed: Vec<T> = args
        .iter()
        .map(|arg| {
            arg.parse::<T>().map_err(|_| {
                PanelError::InvalidCommand(format!("{verb}: '{arg}' is not a valid number"))
            })
        })
        .collect::<Result<_>>()?;

    parsed
        .try_into()
        .map_err(|_| PanelError::InvalidCommand(format!("{verb}: wrong number of arguments")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{FontFamily, FontSize};

    #[test]
    fn test_simple_commands() {
        assert_eq!("toggle".parse::<HostCommand>().unwrap(), HostCommand::Toggle);
        assert_eq!("SUBMIT".parse::<HostCommand>().unwrap(), HostCommand::Submit);
        assert_eq!("reset".parse::<HostCommand>().unwrap(), HostCommand::Reset);
        assert_eq!("q".parse::<HostCommand>().unwrap(), HostCommand::Quit);
    }

    #[test]
    fn test_click_and_key() {
        assert_eq!(
            "click 10 -4".parse::<HostCommand>().unwrap(),
            HostCommand::Click(Position::new(10, -4))
        );
        assert_eq!(
            "key esc".parse::<HostCommand>().unwrap(),
            HostCommand::Key(Key::Escape)
        );
        assert!("click 10".parse::<HostCommand>().is_err());
        assert!("click ten 4".parse::<HostCommand>().is_err());
        assert!("key".parse::<HostCommand>().is_err());
    }

    #[test]
    fn test_set_with_multiword_option() {
        assert_eq!(
            "set font-family Open Sans".parse::<HostCommand>().unwrap(),
            HostCommand::Set(FieldChange::FontFamily(FontFamily::OpenSans))
        );
        assert_eq!(
            "set fontSize 38px".parse::<HostCommand>().unwrap(),
            HostCommand::Set(FieldChange::FontSize(FontSize::Large))
        );
    }

    #[test]
    fn test_set_errors() {
        assert!(matches!(
            "set".parse::<HostCommand>(),
            Err(PanelError::InvalidCommand(_))
        ));
        assert!(matches!(
            "set font-size".parse::<HostCommand>(),
            Err(PanelError::InvalidCommand(_))
        ));
        assert!(matches!(
            "set weight bold".parse::<HostCommand>(),
            Err(PanelError::UnknownField(_))
        ));
        assert!(matches!(
            "set font-size giant".parse::<HostCommand>(),
            Err(PanelError::UnknownOption { .. })
        ));
    }

    #[test]
    fn test_move() {
        assert_eq!(
            "move 10 20 300 400".parse::<HostCommand>().unwrap(),
            HostCommand::Move(Rect::new(10, 20, 300, 400))
        );
        assert!("move 10 20 -300 400".parse::<HostCommand>().is_err());
        assert!("move 10 20 300".parse::<HostCommand>().is_err());
        assert!("move 1".parse::<HostCommand>().is_err());
    }

    #[test]
    fn test_help_lists_every_option() {
        let help = help_text();
        assert!(help.starts_with(COMMANDS));
        for key in FieldKey::ALL {
            assert!(help.contains(key.key()), "missing field {key}");
            for option in key.options() {
                assert!(help.contains(option.key), "missing option {}", option.key);
            }
        }
    }

    #[test]
    fn test_unknown_and_empty() {
        assert!(matches!(
            "dance".parse::<HostCommand>(),
            Err(PanelError::InvalidCommand(msg)) if msg.contains("dance")
        ));
        assert!("   ".parse::<HostCommand>().is_err());
    }
}
