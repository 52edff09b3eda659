//! Expense Ledger - terminal-based personal expense tracking
//!
//! This library provides the core functionality for the expense ledger:
//! recording one-time and recurring expenses, persisting them to a JSON
//! store, and producing monthly and per-category reports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, amounts, identifiers)
//! - `storage`: In-memory expense store with JSON persistence
//! - `services`: Input handling and expense creation
//! - `reports`: Monthly and category aggregation
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers and the interactive shell
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::models::Expense;
//! use expense_ledger::reports::MonthlyReport;
//! use expense_ledger::storage::ExpenseStore;
//!
//! let mut store = ExpenseStore::load_or_fresh("expenses.json");
//! store.add(Expense::one_time("Food", 12.5, date)?);
//! if let Some(report) = MonthlyReport::generate(store.list_all()) {
//!     print!("{}", report.format_terminal("Rs"));
//! }
//! store.save_all("expenses.json")?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
