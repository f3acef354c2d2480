//! Sorted, deduplicated amount choices for one contribution interval.

use serde::{Deserialize, Serialize};

use super::OptionError;
use crate::types::{Amount, AmountOption};

/// The amount choices offered for one contribution interval.
///
/// After any successful [`add`](Self::add) or [`remove`](Self::remove) the
/// list is ascending, free of duplicates, and holds the `"other"` sentinel
/// (if present) in last position. Stored data is accepted as-is on load and
/// normalized by the first mutation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumericOptionSet {
    options: Vec<AmountOption>,
}

impl NumericOptionSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a normalized set from fixed amounts.
    pub fn from_amounts(amounts: impl IntoIterator<Item = Amount>) -> Self {
        Self::from_options(amounts.into_iter().map(AmountOption::Value).collect()).normalized()
    }

    /// Wraps a stored list without reordering it.
    pub fn from_options(options: Vec<AmountOption>) -> Self {
        Self { options }
    }

    /// Returns a sorted, deduplicated copy.
    pub fn normalized(&self) -> Self {
        let mut options = self.options.clone();
        options.sort();
        options.dedup();
        Self { options }
    }

    /// Returns `true` if the list is ascending, duplicate-free, and ends with
    /// the sentinel when present.
    pub fn is_normalized(&self) -> bool {
        self.options.windows(2).all(|pair| pair[0] < pair[1])
    }

    /// Returns the options in display order.
    pub fn options(&self) -> &[AmountOption] {
        &self.options
    }

    /// Iterates over the fixed amounts, skipping the sentinel.
    pub fn amounts(&self) -> impl Iterator<Item = Amount> + '_ {
        self.options.iter().filter_map(AmountOption::as_amount)
    }

    /// Returns the number of fixed amounts.
    pub fn amount_count(&self) -> usize {
        self.amounts().count()
    }

    /// Returns the number of options, including the sentinel.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` if there are no options at all.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Returns `true` if `amount` is one of the options.
    pub fn contains(&self, amount: Amount) -> bool {
        self.options.contains(&AmountOption::Value(amount))
    }

    /// Returns `true` if the `"other"` sentinel is present.
    pub fn includes_other(&self) -> bool {
        self.options.contains(&AmountOption::Other)
    }

    /// Returns the first fixed amount in display order.
    pub fn first_amount(&self) -> Option<Amount> {
        self.amounts().next()
    }

    /// Returns `true` if an amount may be removed without emptying the list.
    ///
    /// Stored duplicates count once.
    pub fn can_remove(&self) -> bool {
        self.normalized().amount_count() > 1
    }

    /// Inserts `amount` in ascending position.
    pub fn add(&self, amount: Amount) -> Result<Self, OptionError> {
        if self.contains(amount) {
            return Err(OptionError::DuplicateAmount);
        }
        let mut options = self.normalized().options;
        let value = AmountOption::Value(amount);
        let at = options.partition_point(|option| *option < value);
        options.insert(at, value);
        Ok(Self { options })
    }

    /// Parses `text` as an amount and inserts it.
    pub fn add_text(&self, text: &str) -> Result<Self, OptionError> {
        self.add(text.parse()?)
    }

    /// Removes `amount`. The last remaining fixed amount cannot be removed,
    /// even when the sentinel is present.
    pub fn remove(&self, amount: Amount) -> Result<Self, OptionError> {
        if !self.contains(amount) {
            return Err(OptionError::AmountNotFound);
        }
        let normalized = self.normalized();
        if normalized.amount_count() <= 1 {
            return Err(OptionError::LastAmount);
        }
        let value = AmountOption::Value(amount);
        let mut options = normalized.options;
        options.retain(|option| *option != value);
        Ok(Self { options })
    }

    /// Adds or removes the `"other"` sentinel.
    pub fn with_other(&self, include: bool) -> Self {
        let mut options = self.normalized().options;
        match (include, self.includes_other()) {
            (true, false) => options.push(AmountOption::Other),
            (false, true) => options.retain(|option| !option.is_other()),
            _ => {}
        }
        Self { options }
    }
}

impl FromIterator<Amount> for NumericOptionSet {
    fn from_iter<I: IntoIterator<Item = Amount>>(iter: I) -> Self {
        Self::from_amounts(iter)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn amt(units: u64) -> Amount {
        Amount::from_units(units).unwrap()
    }

    fn set(units: &[u64]) -> NumericOptionSet {
        units.iter().copied().map(amt).collect()
    }

    fn values(set: &NumericOptionSet) -> Vec<String> {
        set.options().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_add_keeps_ascending_order() {
        let options = set(&[100, 200, 300]).add(amt(150)).unwrap();
        assert_eq!(values(&options), ["100", "150", "200", "300"]);
    }

    #[test]
    fn test_add_before_other() {
        let options = set(&[10, 20]).with_other(true).add(amt(50)).unwrap();
        assert_eq!(values(&options), ["10", "20", "50", "other"]);
    }

    #[test]
    fn test_add_duplicate_rejected() {
        let options = set(&[10, 20]);
        assert_eq!(options.add(amt(20)), Err(OptionError::DuplicateAmount));
    }

    #[test]
    fn test_add_text_validates() {
        let options = set(&[10]);
        assert_eq!(options.add_text("0"), Err(OptionError::InvalidAmount));
        assert_eq!(options.add_text("-4"), Err(OptionError::InvalidAmount));
        assert_eq!(options.add_text("1.234"), Err(OptionError::InvalidAmount));
        assert_eq!(options.add_text("10.00"), Err(OptionError::DuplicateAmount));
        assert_eq!(values(&options.add_text("12.5").unwrap()), ["10", "12.5"]);
    }

    #[test]
    fn test_add_does_not_mutate_input() {
        let original = set(&[1, 2]);
        let _ = original.add(amt(3)).unwrap();
        assert_eq!(values(&original), ["1", "2"]);
    }

    #[test]
    fn test_add_normalizes_stored_data() {
        let stored = NumericOptionSet::from_options(vec![
            AmountOption::Other,
            AmountOption::Value(amt(30)),
            AmountOption::Value(amt(10)),
            AmountOption::Value(amt(10)),
        ]);
        assert!(!stored.is_normalized());
        let options = stored.add(amt(20)).unwrap();
        assert!(options.is_normalized());
        assert_eq!(values(&options), ["10", "20", "30", "other"]);
    }

    #[test]
    fn test_remove() {
        let options = set(&[100, 150, 200, 300]).remove(amt(200)).unwrap();
        assert_eq!(values(&options), ["100", "150", "300"]);
    }

    #[test]
    fn test_remove_last_amount_refused() {
        let options = set(&[100]);
        assert!(!options.can_remove());
        assert_eq!(options.remove(amt(100)), Err(OptionError::LastAmount));
    }

    #[test]
    fn test_remove_last_amount_refused_with_other() {
        let options = set(&[100]).with_other(true);
        assert_eq!(options.len(), 2);
        assert_eq!(options.remove(amt(100)), Err(OptionError::LastAmount));
    }

    #[test]
    fn test_remove_stored_duplicates_of_last_amount_refused() {
        let stored = NumericOptionSet::from_options(vec![
            AmountOption::Value(amt(100)),
            AmountOption::Value(amt(100)),
            AmountOption::Other,
        ]);
        assert!(!stored.can_remove());
        assert_eq!(stored.remove(amt(100)), Err(OptionError::LastAmount));
    }

    #[test]
    fn test_remove_stored_duplicate_drops_every_copy() {
        let stored = NumericOptionSet::from_options(vec![
            AmountOption::Value(amt(20)),
            AmountOption::Value(amt(10)),
            AmountOption::Value(amt(20)),
        ]);
        assert!(stored.can_remove());
        let options = stored.remove(amt(20)).unwrap();
        assert_eq!(values(&options), ["10"]);
    }

    #[test]
    fn test_remove_missing() {
        assert_eq!(
            set(&[1, 2]).remove(amt(3)),
            Err(OptionError::AmountNotFound)
        );
    }

    #[test]
    fn test_with_other_toggles() {
        let options = set(&[5, 1]).with_other(true);
        assert!(options.includes_other());
        assert_eq!(values(&options), ["1", "5", "other"]);
        assert_eq!(options.with_other(true), options);

        let without = options.with_other(false);
        assert!(!without.includes_other());
        assert_eq!(values(&without), ["1", "5"]);
    }

    #[test]
    fn test_first_amount_skips_other() {
        let stored = NumericOptionSet::from_options(vec![
            AmountOption::Other,
            AmountOption::Value(amt(7)),
        ]);
        assert_eq!(stored.first_amount(), Some(amt(7)));
        assert_eq!(NumericOptionSet::new().first_amount(), None);
    }

    #[test]
    fn test_serde_transparent() {
        let options: NumericOptionSet = serde_json::from_str(r#"[1, 2, "other"]"#).unwrap();
        assert_eq!(options.amount_count(), 2);
        assert!(options.includes_other());
        assert_eq!(serde_json::to_string(&options).unwrap(), r#"[1,2,"other"]"#);
    }
}
