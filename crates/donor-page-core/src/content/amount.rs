//! Content of an "Amount" page element.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::options::NumericOptionSet;
use crate::types::{Amount, Interval};

/// Amount choices and default selections per contribution interval.
///
/// Defaults are not self-enforced: a stored default may point at an amount
/// that is no longer offered. [`repair_defaults`](Self::repair_defaults)
/// brings them back in line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountConfiguration {
    #[serde(default)]
    options: BTreeMap<Interval, NumericOptionSet>,

    #[serde(default)]
    defaults: BTreeMap<Interval, Amount>,

    /// Legacy flag. Only [`crate::migration`] reads or clears it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) allow_other: Option<bool>,
}

impl AmountConfiguration {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with `options` for `interval`.
    pub fn with_options(&self, interval: Interval, options: NumericOptionSet) -> Self {
        let mut next = self.clone();
        next.options.insert(interval, options);
        next
    }

    /// Returns a copy with the default for `interval` set or cleared.
    pub fn with_default(&self, interval: Interval, amount: Option<Amount>) -> Self {
        let mut next = self.clone();
        match amount {
            Some(amount) => next.defaults.insert(interval, amount),
            None => next.defaults.remove(&interval),
        };
        next
    }

    /// Returns the options for `interval`.
    pub fn options(&self, interval: Interval) -> Option<&NumericOptionSet> {
        self.options.get(&interval)
    }

    /// Returns the intervals that have an option list.
    pub fn intervals(&self) -> impl Iterator<Item = Interval> + '_ {
        self.options.keys().copied()
    }

    /// Returns the default amount for `interval`.
    pub fn default_for(&self, interval: Interval) -> Option<Amount> {
        self.defaults.get(&interval).copied()
    }

    /// Returns `true` while the legacy `allowOther` field is present.
    pub fn has_legacy_fields(&self) -> bool {
        self.allow_other.is_some()
    }

    /// Returns `true` if the default for `interval` refers to an offered
    /// amount, or if there is nothing to default to.
    pub fn default_is_valid(&self, interval: Interval) -> bool {
        let Some(options) = self.options(interval) else {
            return self.default_for(interval).is_none();
        };
        match (self.default_for(interval), options.first_amount()) {
            (Some(default), _) => options.contains(default),
            (None, first) => first.is_none(),
        }
    }

    /// Returns the intervals among `intervals` whose default needs repair.
    pub fn stale_defaults(&self, intervals: &[Interval]) -> Vec<Interval> {
        intervals
            .iter()
            .copied()
            .filter(|interval| !self.default_is_valid(*interval))
            .collect()
    }

    /// Returns a copy in which every interval in `intervals` defaults to an
    /// offered amount.
    ///
    /// A missing or stale default becomes the interval's first fixed amount.
    /// An interval without fixed amounts loses its default.
    pub fn repair_defaults(&self, intervals: &[Interval]) -> Self {
        let mut next = self.clone();
        for interval in self.stale_defaults(intervals) {
            let replacement = self.options(interval).and_then(NumericOptionSet::first_amount);
            tracing::warn!(
                interval = %interval,
                stale = ?self.default_for(interval).map(|a| a.to_string()),
                replacement = ?replacement.map(|a| a.to_string()),
                "Repairing amount default"
            );
            next = next.with_default(interval, replacement);
        }
        next
    }
}
