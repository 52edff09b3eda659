//! Storage layer for the expense ledger
//!
//! Provides the in-memory expense store and its JSON file persistence with
//! atomic writes.

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseStore, STORE_SCHEMA_VERSION};
pub use file_io::{read_json, write_json_atomic};
