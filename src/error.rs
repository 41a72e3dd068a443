//! Error types for the article parameters panel
//!
//! The panel core (toggle, field edits, submit, reset) cannot fail. These errors
//! cover the boundaries around it: parsing field and option names from text,
//! console host commands, and loading or saving application settings.
//!
//! Error variants use `#[source]` to preserve error chains.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for the panel crate
#[derive(Debug, Error)]
pub enum PanelError {
    /// A field name did not match any of the five panel fields
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// An option name is not part of the field's option set
    #[error("Unknown option '{value}' for field {field}")]
    UnknownOption {
        /// Field the option was given for
        field: &'static str,
        /// Rejected option text
        value: String,
    },

    /// A console host command could not be parsed
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for panel operations
pub type Result<T> = std::result::Result<T, PanelError>;

/// Convert an error to a user-friendly message for the console host
pub fn get_user_friendly_error(error: &PanelError) -> String {
    match error {
        PanelError::UnknownField(name) => {
            format!(
                "There is no field called '{name}'.\n\
                 Known fields: font-family, font-size, font-color, background-color, content-width"
            )
        }
        PanelError::UnknownOption { field, value } => {
            format!("'{value}' is not an option for {field}.\nType 'help' to list the options.")
        }
        PanelError::InvalidCommand(reason) => {
            format!("Could not understand that command: {reason}\nType 'help' for usage.")
        }
        PanelError::ConfigError(_) => "Failed to load or save settings.\n\
             Defaults will be used for this session.\n\
             Check that ARTICLE_PARAMS_HOME points to a writable directory."
            .to_string(),
        PanelError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        PanelError::JsonError(e) => {
            format!(
                "Settings file is corrupted:\n\n{e}\n\n\
                 The application will use default settings."
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = PanelError::UnknownField("font-weight".to_string());
        assert_eq!(error.to_string(), "Unknown field: font-weight");
    }

    #[test]
    fn test_unknown_option_display() {
        let error = PanelError::UnknownOption {
            field: "font-size",
            value: "huge".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unknown option 'huge' for field font-size"
        );
    }

    #[test]
    fn test_user_friendly_messages() {
        let error = PanelError::UnknownField("font-weight".to_string());
        let message = get_user_friendly_error(&error);
        assert!(message.contains("font-weight"));
        assert!(message.contains("content-width"));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: PanelError = io_error.into();
        assert!(matches!(error, PanelError::IoError(_)));
    }

    #[test]
    fn test_config_error_keeps_source() {
        use std::error::Error as _;

        let error = PanelError::ConfigError(StringError::new("bad path"));
        assert_eq!(error.to_string(), "Configuration error: bad path");
        assert_eq!(
            error.source().map(ToString::to_string).as_deref(),
            Some("bad path")
        );
    }

    #[test]
    fn test_invalid_command_user_friendly() {
        let error = PanelError::InvalidCommand("expected two numbers".to_string());
        let message = get_user_friendly_error(&error);
        assert!(message.contains("expected two numbers"));
        assert!(message.contains("help"));
    }
}
