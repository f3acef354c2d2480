//! Rejections produced by option-set operations.

/// Why an option-set operation was refused.
///
/// These are recoverable, field-scoped conditions. The `Display` text is the
/// message shown next to the offending control.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum OptionError {
    /// Not a positive number with at most two decimal places.
    #[error("Must be a positive number with at most two decimal places")]
    InvalidAmount,

    /// The amount is already in the list.
    #[error("This amount has already been added")]
    DuplicateAmount,

    /// Removing would leave no fixed amount.
    #[error("At least one amount is required")]
    LastAmount,

    /// The amount is not in the list.
    #[error("Amount is not one of the options")]
    AmountNotFound,

    /// The input was blank after trimming.
    #[error("Value is empty")]
    Empty,

    /// The input exceeds the length limit.
    #[error("Must be {max} characters or fewer")]
    TooLong {
        /// Maximum allowed characters
        max: usize,
    },

    /// The input contains a separator reserved by the persisted encoding.
    #[error("Cannot contain the reserved character '{0}'")]
    ReservedCharacter(char),

    /// A case-insensitive duplicate is already in the list.
    #[error("This option has already been added")]
    DuplicateOption,

    /// The option is not in the list.
    #[error("Option is not in the list")]
    OptionNotFound,
}

impl OptionError {
    /// Returns `true` if the rejection should not be surfaced to the user.
    ///
    /// Blank input is ignored rather than reported.
    pub fn is_silent(&self) -> bool {
        matches!(self, OptionError::Empty)
    }
}
