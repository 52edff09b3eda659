//! Service layer for the expense ledger
//!
//! The service layer provides input handling on top of the storage layer:
//! validation of user-entered fields and creation of expenses.

pub mod expense;

pub use expense::{parse_date, CreateExpenseInput, ExpenseService};
