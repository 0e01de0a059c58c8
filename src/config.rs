//! Runtime configuration for the shell.
//!
//! A [`ShellConfig`] can be built in code or loaded from a small JSON
//! document, for example one kept in flash next to other device settings:
//!
//! ```rust
//! use minishell::config::{InputFilter, ShellConfig};
//!
//! let config = ShellConfig::from_json(br#"{"echo":false,"input_filter":"alphanumeric"}"#).unwrap();
//! assert!(!config.echo);
//! assert!(config.echo_line);
//! assert_eq!(config.input_filter, InputFilter::Alphanumeric);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// ASCII space character (0x20).
pub const ASCII_SPACE: u8 = 0x20;

/// Which characters the line editor accepts as line content.
///
/// Triggers are always restricted to ASCII letters and digits, whatever
/// filter is selected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFilter {
    /// ASCII letters and digits only. Arguments cannot be typed.
    Alphanumeric,
    /// ASCII letters, digits and the space character.
    #[default]
    AlphanumericSpace,
}

impl InputFilter {
    /// Whether `byte` may be stored in the line buffer.
    pub fn accepts(self, byte: u8) -> bool {
        match self {
            InputFilter::Alphanumeric => byte.is_ascii_alphanumeric(),
            InputFilter::AlphanumericSpace => byte.is_ascii_alphanumeric() || byte == ASCII_SPACE,
        }
    }
}

/// Shell behavior switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Echo accepted characters, erase sequences and the newline on
    /// line completion.
    pub echo: bool,
    /// Echo the submitted line back as `":<line>\r\n"` before dispatching.
    pub echo_line: bool,
    /// Character set accepted as line content.
    pub input_filter: InputFilter,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            echo: true,
            echo_line: true,
            input_filter: InputFilter::default(),
        }
    }
}

impl ShellConfig {
    /// Parse a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &[u8]) -> Result<Self, ConfigError> {
        serde_json_core::from_slice::<ShellConfig>(json)
            .map(|(config, _)| config)
            .map_err(|_| ConfigError::Parse)
    }

    /// Serialize the configuration as JSON into `buf`, returning the
    /// number of bytes written.
    pub fn to_json(&self, buf: &mut [u8]) -> Result<usize, ConfigError> {
        serde_json_core::to_slice(self, buf).map_err(|_| ConfigError::Parse)
    }
}
