//! Fixed-point contribution amounts and the `"other"` amount sentinel.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::options::OptionError;

const CENTS_PER_UNIT: u64 = 100;

/// Largest accepted amount, in cents (one trillion whole units).
const MAX_CENTS: u64 = 1_000_000_000_000 * CENTS_PER_UNIT;

const OTHER: &str = "other";

/// A positive contribution amount with at most two decimal places.
///
/// Stored as whole cents so that equality, ordering, and duplicate
/// detection are exact. Serialized as a JSON number (`100`, `150.5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u64);

impl Amount {
    /// Creates an amount from cents. Returns `None` for zero or out-of-range values.
    pub fn from_cents(cents: u64) -> Option<Self> {
        (cents > 0 && cents <= MAX_CENTS).then_some(Self(cents))
    }

    /// Creates an amount from whole currency units.
    pub fn from_units(units: u64) -> Option<Self> {
        units.checked_mul(CENTS_PER_UNIT).and_then(Self::from_cents)
    }

    /// Converts a float, rejecting non-positive values and values with more
    /// than two decimal places.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || value <= 0.0 {
            return None;
        }
        let scaled = value * CENTS_PER_UNIT as f64;
        let cents = scaled.round();
        if (scaled - cents).abs() > 1e-6 || cents > MAX_CENTS as f64 {
            return None;
        }
        Self::from_cents(cents as u64)
    }

    /// Returns the amount in cents.
    pub fn cents(self) -> u64 {
        self.0
    }

    /// Returns the amount as a float in currency units.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / CENTS_PER_UNIT as f64
    }

    /// Returns `true` if the amount has no fractional part.
    pub fn is_whole(self) -> bool {
        self.0 % CENTS_PER_UNIT == 0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.0 / CENTS_PER_UNIT;
        let cents = self.0 % CENTS_PER_UNIT;
        match cents {
            0 => write!(f, "{units}"),
            c if c % 10 == 0 => write!(f, "{units}.{}", c / 10),
            c => write!(f, "{units}.{c:02}"),
        }
    }
}

impl FromStr for Amount {
    type Err = OptionError;

    /// Parses `digits[.d[d]]`. Signs, exponents, and a trailing bare `.` are
    /// rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (whole, fraction) = s.split_once('.').unwrap_or((s, ""));
        if s.contains('.') && !(1..=2).contains(&fraction.len()) {
            return Err(OptionError::InvalidAmount);
        }
        if whole.is_empty() && fraction.is_empty() {
            return Err(OptionError::InvalidAmount);
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            return Err(OptionError::InvalidAmount);
        }

        let units = if whole.is_empty() {
            0
        } else {
            whole.parse::<u64>().map_err(|_| OptionError::InvalidAmount)?
        };
        let fraction_cents = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| OptionError::InvalidAmount)? * 10,
            _ => fraction.parse::<u64>().map_err(|_| OptionError::InvalidAmount)?,
        };

        units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|c| c.checked_add(fraction_cents))
            .and_then(Self::from_cents)
            .ok_or(OptionError::InvalidAmount)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_whole() {
            serializer.serialize_u64(self.0 / CENTS_PER_UNIT)
        } else {
            serializer.serialize_f64(self.to_f64())
        }
    }
}

fn amount_from_u64<E: de::Error>(value: u64) -> Result<Amount, E> {
    Amount::from_units(value)
        .ok_or_else(|| E::custom(format!("amount must be positive, got {value}")))
}

fn amount_from_i64<E: de::Error>(value: i64) -> Result<Amount, E> {
    u64::try_from(value)
        .map_err(|_| E::custom(format!("amount must be positive, got {value}")))
        .and_then(amount_from_u64)
}

fn amount_from_f64<E: de::Error>(value: f64) -> Result<Amount, E> {
    Amount::from_f64(value).ok_or_else(|| {
        E::custom(format!(
            "amount must be positive with at most two decimal places, got {value}"
        ))
    })
}

fn amount_from_str<E: de::Error>(value: &str) -> Result<Amount, E> {
    value
        .parse()
        .map_err(|_| E::custom(format!("invalid amount {value:?}")))
}

struct AmountVisitor;

impl Visitor<'_> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a positive number with at most two decimal places")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
        amount_from_u64(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
        amount_from_i64(v)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Amount, E> {
        amount_from_f64(v)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
        amount_from_str(v)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }
}

/// One selectable amount: a fixed value or the `"other"` sentinel.
///
/// The derived ordering places every [`AmountOption::Value`] before
/// [`AmountOption::Other`], so a sorted list always ends with the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AmountOption {
    /// A fixed amount.
    Value(Amount),
    /// Lets the contributor type a custom amount.
    Other,
}

impl AmountOption {
    /// Returns the fixed amount, if any.
    pub fn as_amount(&self) -> Option<Amount> {
        match self {
            AmountOption::Value(amount) => Some(*amount),
            AmountOption::Other => None,
        }
    }

    /// Returns `true` for the `"other"` sentinel.
    pub fn is_other(&self) -> bool {
        matches!(self, AmountOption::Other)
    }
}

impl From<Amount> for AmountOption {
    fn from(amount: Amount) -> Self {
        AmountOption::Value(amount)
    }
}

impl fmt::Display for AmountOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountOption::Value(amount) => amount.fmt(f),
            AmountOption::Other => f.write_str(OTHER),
        }
    }
}

impl Serialize for AmountOption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AmountOption::Value(amount) => amount.serialize(serializer),
            AmountOption::Other => serializer.serialize_str(OTHER),
        }
    }
}

struct AmountOptionVisitor;

impl Visitor<'_> for AmountOptionVisitor {
    type Value = AmountOption;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a positive amount or \"other\"")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<AmountOption, E> {
        amount_from_u64(v).map(AmountOption::Value)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<AmountOption, E> {
        amount_from_i64(v).map(AmountOption::Value)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<AmountOption, E> {
        amount_from_f64(v).map(AmountOption::Value)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<AmountOption, E> {
        if v.trim().eq_ignore_ascii_case(OTHER) {
            Ok(AmountOption::Other)
        } else {
            amount_from_str(v).map(AmountOption::Value)
        }
    }
}

impl<'de> Deserialize<'de> for AmountOption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AmountOptionVisitor)
    }
}
