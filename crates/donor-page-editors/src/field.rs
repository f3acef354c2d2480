//! Field-scoped validation messages.

use std::collections::BTreeMap;
use std::fmt;

use donor_page_core::Interval;

/// An editor control that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// The amount list and "new amount" input of an interval.
    Amounts(Interval),
    /// The default selector of an interval.
    DefaultAmount(Interval),
    /// The swag threshold input.
    Threshold,
    /// The swag group name input.
    SwagName,
    /// The "new option" input of the swag group.
    NewOption,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Amounts(interval) => write!(f, "amounts.{interval}"),
            Field::DefaultAmount(interval) => write!(f, "default.{interval}"),
            Field::Threshold => f.write_str("swag_threshold"),
            Field::SwagName => f.write_str("swag_name"),
            Field::NewOption => f.write_str("new_option"),
        }
    }
}

/// The current message per field. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
}

impl FieldErrors {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message for `field`.
    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Clears the message for `field`.
    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    /// Returns the message for `field`.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Returns `true` if `field` has a message.
    pub fn has(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Returns `true` if no field has a message.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with a message.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates over fields and messages in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }
}
