//! Option sets edited by the element editors.
//!
//! Both sets are values: every operation borrows the current set and returns
//! a new one, or an [`OptionError`] describing why the input was refused.

mod error;
mod numeric;
mod proptests;
mod text;

pub use error::OptionError;
pub use numeric::NumericOptionSet;
pub use text::TextOptionSet;
