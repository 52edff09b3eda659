//! Reports module for the expense ledger
//!
//! Provides the aggregate reports: totals per calendar month and totals per
//! category. Both are pure functions of the expenses passed in and return
//! `None` when there is nothing to report.

pub mod category;
pub mod monthly;

pub use category::{CategoryReport, CategoryTotal};
pub use monthly::{MonthlyReport, MonthlyTotal};

/// Message shown when a report has no expenses to work with
pub const NO_DATA_MESSAGE: &str = "No data for report.";
