//! Amount type for representing expense values
//!
//! An `Amount` is a non-negative, finite number of currency units. The
//! invariant is checked on construction and again on deserialization, so a
//! live `Amount` is never negative.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

use crate::error::LedgerError;

/// A non-negative monetary amount in currency units
///
/// Values are kept as `f64` and summed without intermediate rounding;
/// two-decimal rounding only happens when the amount is displayed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    /// Create an amount, rejecting negative and non-finite values
    ///
    /// # Examples
    /// ```
    /// use expense_ledger::models::Amount;
    /// assert!(Amount::new(12.5).is_ok());
    /// assert!(Amount::new(-0.01).is_err());
    /// ```
    pub fn new(value: f64) -> Result<Self, LedgerError> {
        if !value.is_finite() {
            return Err(LedgerError::non_finite_amount(value));
        }
        if value < 0.0 {
            return Err(LedgerError::negative_amount(value));
        }
        // Normalize -0.0 so it never displays as "-0.00"
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Parse an amount from user input
    ///
    /// Accepts plain decimals ("10.50", "10"). Negative input parses but
    /// fails validation, so callers see a `Validation` error rather than a
    /// `Parse` error for "-5".
    pub fn parse(s: &str) -> Result<Self, LedgerError> {
        let s = s.trim();
        let value: f64 = s
            .parse()
            .map_err(|_| LedgerError::Parse(format!("Invalid amount: {}", s)))?;
        Self::new(value)
    }

    /// Format with a currency symbol and two decimals
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{:.2}", symbol, self.0)
    }
}

impl TryFrom<f64> for Amount {
    type Error = LedgerError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

// Sums of non-negative values stay non-negative. They can still overflow to
// +inf near f64::MAX, which is far outside any realistic ledger total.
impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let sum = self.0 + other.0;
        debug_assert!(sum.is_finite(), "amount sum overflowed");
        Self(sum)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_non_negative() {
        for value in [0.0, 0.01, 1.0, 99.999, 1_000_000.5] {
            assert_eq!(Amount::new(value).unwrap().value(), value);
        }
    }

    #[test]
    fn test_new_rejects_negative() {
        for value in [-0.01, -1.0, -1_000.0] {
            let err = Amount::new(value).unwrap_err();
            assert!(err.is_validation());
        }
    }

    #[test]
    fn test_new_rejects_non_finite() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Amount::new(value).unwrap_err();
            assert!(err.is_validation());
            assert!(err.to_string().contains("must be a finite number"));
            assert!(!err.to_string().contains("negative"));
        }
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        let a = Amount::new(-0.0).unwrap();
        assert_eq!(a.to_string(), "0.00");
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::new(10.5).unwrap().to_string(), "10.50");
        assert_eq!(Amount::zero().to_string(), "0.00");
        assert_eq!(Amount::new(0.05).unwrap().format_with_symbol("Rs"), "Rs0.05");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("10.50").unwrap().value(), 10.5);
        assert_eq!(Amount::parse(" 10 ").unwrap().value(), 10.0);
        assert!(matches!(Amount::parse("ten"), Err(LedgerError::Parse(_))));
        assert!(Amount::parse("-5").unwrap_err().is_validation());
        assert_eq!(
            Amount::parse("inf").unwrap_err().to_string(),
            "Validation error: Amount must be a finite number: inf"
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "amount sum overflowed")]
    fn test_sum_overflow_is_caught_in_debug() {
        let huge = Amount::new(f64::MAX).unwrap();
        let _ = huge + huge;
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Amount::new(100.0).unwrap(),
            Amount::new(50.25).unwrap(),
            Amount::new(0.75).unwrap(),
        ];
        let total: Amount = amounts.into_iter().sum();
        assert_eq!(total.value(), 151.0);
    }

    #[test]
    fn test_serialization() {
        let a = Amount::new(10.5).unwrap();
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "10.5");

        let deserialized: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(a, deserialized);
    }

    #[test]
    fn test_deserialization_rejects_negative() {
        assert!(serde_json::from_str::<Amount>("-3.0").is_err());
    }
}
