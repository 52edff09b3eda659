//! Expense model
//!
//! An expense is a single recorded spend. Every expense shares the same base
//! payload (category, amount, date); the `ExpenseKind` tag says whether it is
//! a one-time spend or a recurring one with a next due date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::ids::ExpenseId;
use crate::error::LedgerResult;

/// Currency symbol used when no settings are available
pub const DEFAULT_CURRENCY_SYMBOL: &str = "Rs";

/// Variant-specific part of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExpenseKind {
    /// A single spend
    OneTime,
    /// A spend that repeats; `next_due_date` is free-form relative to `date`
    Recurring { next_due_date: NaiveDate },
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneTime => write!(f, "One-Time"),
            Self::Recurring { .. } => write!(f, "Recurring"),
        }
    }
}

/// A recorded expense
///
/// Fields are private: an expense is read-only once constructed, and the
/// only way to build one is through the validating constructors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    id: ExpenseId,
    category: String,
    amount: Amount,
    date: NaiveDate,
    kind: ExpenseKind,
}

impl Expense {
    /// Create a one-time expense
    ///
    /// Fails with a validation error if `amount` is negative or not finite.
    pub fn one_time(category: impl Into<String>, amount: f64, date: NaiveDate) -> LedgerResult<Self> {
        Self::with_kind(category, amount, date, ExpenseKind::OneTime)
    }

    /// Create a recurring expense
    pub fn recurring(
        category: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        next_due_date: NaiveDate,
    ) -> LedgerResult<Self> {
        Self::with_kind(
            category,
            amount,
            date,
            ExpenseKind::Recurring { next_due_date },
        )
    }

    fn with_kind(
        category: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        kind: ExpenseKind,
    ) -> LedgerResult<Self> {
        Ok(Self {
            id: ExpenseId::new(),
            category: category.into(),
            amount: Amount::new(amount)?,
            date,
            kind,
        })
    }

    pub fn id(&self) -> ExpenseId {
        self.id
    }

    /// Category label exactly as entered
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn kind(&self) -> ExpenseKind {
        self.kind
    }

    /// Next due date for recurring expenses
    pub fn next_due_date(&self) -> Option<NaiveDate> {
        match self.kind {
            ExpenseKind::OneTime => None,
            ExpenseKind::Recurring { next_due_date } => Some(next_due_date),
        }
    }

    pub fn is_recurring(&self) -> bool {
        matches!(self.kind, ExpenseKind::Recurring { .. })
    }

    /// Case-insensitive category match
    pub fn matches_category(&self, name: &str) -> bool {
        self.category.to_lowercase() == name.to_lowercase()
    }

    /// Human-readable one-line summary
    ///
    /// The shared base text is followed by a suffix that depends on the kind:
    /// `" | Type: One-Time"` or `" | Next Due: <date>"`.
    pub fn describe(&self, currency_symbol: &str) -> String {
        let base = format!(
            "Category: {}, Amount: {}, Date: {}",
            self.category,
            self.amount.format_with_symbol(currency_symbol),
            self.date.format("%Y-%m-%d")
        );

        match self.kind {
            ExpenseKind::OneTime => format!("{} | Type: One-Time", base),
            ExpenseKind::Recurring { next_due_date } => {
                format!("{} | Next Due: {}", base, next_due_date.format("%Y-%m-%d"))
            }
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe(DEFAULT_CURRENCY_SYMBOL))
    }
}
