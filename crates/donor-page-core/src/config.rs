//! Validation limits for element editors.
//!
//! [`EditorLimits`] carries the length bounds and reserved characters used by
//! text options and swag group names. The defaults reproduce the built-in
//! rules; a TOML file may override any subset of them.
//!
//! ```toml
//! max_option_length = 80
//! reserved_characters = [":", ";", "|"]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::options::OptionError;

/// Default maximum length of a single text option, in characters.
pub const DEFAULT_MAX_OPTION_LENGTH: usize = 100;

/// Default maximum length of a swag group name, in characters.
pub const DEFAULT_MAX_SWAG_NAME_LENGTH: usize = 50;

/// Characters reserved as separators by the persisted encoding.
pub const DEFAULT_RESERVED_CHARACTERS: [char; 2] = [':', ';'];

/// Length and character constraints applied to free-text editor input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorLimits {
    /// Maximum characters in one swag option.
    pub max_option_length: usize,
    /// Maximum characters in a swag group name.
    pub max_swag_name_length: usize,
    /// Characters that may not appear in names or options.
    pub reserved_characters: Vec<char>,
}

impl Default for EditorLimits {
    fn default() -> Self {
        Self {
            max_option_length: DEFAULT_MAX_OPTION_LENGTH,
            max_swag_name_length: DEFAULT_MAX_SWAG_NAME_LENGTH,
            reserved_characters: DEFAULT_RESERVED_CHARACTERS.to_vec(),
        }
    }
}

impl EditorLimits {
    /// Parses limits from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let limits: Self = toml::from_str(source)
            .map_err(|e| Error::config(format!("Failed to parse editor limits: {e}")))?;
        limits.validate()?;
        Ok(limits)
    }

    /// Reads and parses a TOML limits file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Loading editor limits");
        Self::from_toml_str(&source)
    }

    /// Serializes the limits as a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    fn validate(&self) -> Result<()> {
        if self.max_option_length == 0 {
            return Err(Error::config("max_option_length must be positive"));
        }
        if self.max_swag_name_length == 0 {
            return Err(Error::config("max_swag_name_length must be positive"));
        }
        if let Some(c) = self.reserved_characters.iter().find(|c| c.is_whitespace()) {
            return Err(Error::config(format!(
                "reserved_characters may not contain whitespace ({c:?})"
            )));
        }
        Ok(())
    }

    /// Checks a free-text label against the length bound and reserved
    /// characters, returning the trimmed value.
    ///
    /// Rejections are checked in order: empty, too long, reserved character.
    pub fn check_label<'a>(
        &self,
        value: &'a str,
        max: usize,
    ) -> std::result::Result<&'a str, OptionError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(OptionError::Empty);
        }
        if trimmed.chars().count() > max {
            return Err(OptionError::TooLong { max });
        }
        if let Some(c) = trimmed.chars().find(|c| self.reserved_characters.contains(c)) {
            return Err(OptionError::ReservedCharacter(c));
        }
        Ok(trimmed)
    }
}
