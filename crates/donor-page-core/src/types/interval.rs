//! Contribution intervals.

use serde::{Deserialize, Serialize};

/// A contribution cadence.
///
/// Declaration order is the display order (one-time, monthly, yearly) and is
/// also the key order of per-interval maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Interval {
    /// A single contribution.
    #[serde(rename = "one_time", alias = "one-time")]
    OneTime,

    /// A recurring monthly contribution.
    #[serde(rename = "month", alias = "monthly")]
    Monthly,

    /// A recurring yearly contribution.
    #[serde(rename = "year", alias = "yearly")]
    Yearly,
}

impl Interval {
    /// All intervals in display order.
    pub const ALL: [Interval; 3] = [Interval::OneTime, Interval::Monthly, Interval::Yearly];

    /// Returns the persisted key for this interval.
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::OneTime => "one_time",
            Interval::Monthly => "month",
            Interval::Yearly => "year",
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
