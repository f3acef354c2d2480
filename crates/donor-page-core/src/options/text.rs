//! Deduplicated free-text choices for a swag group.

use serde::{Deserialize, Serialize};

use super::OptionError;
use crate::config::EditorLimits;

/// The options of one swag group, in insertion order.
///
/// No two entries compare equal after trimming and lowercasing. There is no
/// minimum count here; the editor decides when an empty list blocks saving.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextOptionSet {
    options: Vec<String>,
}

fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}

impl TextOptionSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a stored list without validating it.
    pub fn from_options(options: Vec<String>) -> Self {
        Self { options }
    }

    /// Returns the options in insertion order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Iterates over the options.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.options.iter().map(String::as_str)
    }

    /// Returns the number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` if there are no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Returns `true` if an entry matches `value` ignoring case and
    /// surrounding whitespace.
    pub fn contains_folded(&self, value: &str) -> bool {
        let folded = fold(value);
        self.options.iter().any(|option| fold(option) == folded)
    }

    /// Appends `value` using the default limits.
    pub fn add(&self, value: &str) -> Result<Self, OptionError> {
        self.add_with(value, &EditorLimits::default())
    }

    /// Appends the trimmed `value`.
    ///
    /// Blank input yields [`OptionError::Empty`], which callers treat as a
    /// silent no-op.
    pub fn add_with(&self, value: &str, limits: &EditorLimits) -> Result<Self, OptionError> {
        let trimmed = limits.check_label(value, limits.max_option_length)?;
        if self.contains_folded(trimmed) {
            return Err(OptionError::DuplicateOption);
        }
        let mut options = self.options.clone();
        options.push(trimmed.to_string());
        Ok(Self { options })
    }

    /// Removes the entry exactly equal to `value`.
    pub fn remove(&self, value: &str) -> Result<Self, OptionError> {
        let position = self
            .options
            .iter()
            .position(|option| option == value)
            .ok_or(OptionError::OptionNotFound)?;
        let mut options = self.options.clone();
        options.remove(position);
        Ok(Self { options })
    }
}

impl<S: Into<String>> FromIterator<S> for TextOptionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_options(iter.into_iter().map(Into::into).collect())
    }
}
