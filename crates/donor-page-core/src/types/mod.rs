//! Core value types for element configuration.

mod amount;
mod interval;
mod proptests;

pub use amount::{Amount, AmountOption};
pub use interval::Interval;
