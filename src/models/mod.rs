//! Core data models for the expense ledger
//!
//! This module contains the data structures that represent the ledger
//! domain: expenses, their amounts, and identifiers.

pub mod amount;
pub mod expense;
pub mod ids;

pub use amount::Amount;
pub use expense::{Expense, ExpenseKind, DEFAULT_CURRENCY_SYMBOL};
pub use ids::ExpenseId;
