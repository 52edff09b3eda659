//! Expense store with JSON persistence
//!
//! Keeps expenses in insertion order and loads/saves the whole sequence to a
//! single JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic};

/// Current on-disk schema version
pub const STORE_SCHEMA_VERSION: u32 = 1;

/// Serializable store file layout
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ExpenseData {
    #[serde(default = "default_schema_version")]
    schema_version: u32,
    #[serde(default)]
    expenses: Vec<Expense>,
}

fn default_schema_version() -> u32 {
    STORE_SCHEMA_VERSION
}

impl Default for ExpenseData {
    fn default() -> Self {
        Self {
            schema_version: STORE_SCHEMA_VERSION,
            expenses: Vec::new(),
        }
    }
}

/// Ordered, append-only collection of expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from `path`, starting fresh if anything goes wrong
    ///
    /// A missing file yields an empty store silently. Unreadable or corrupt
    /// files are logged and also yield an empty store.
    pub fn load_or_fresh(path: impl AsRef<Path>) -> Self {
        let mut store = Self::new();
        if let Err(e) = store.load_all(path.as_ref()) {
            tracing::warn!(
                path = %path.as_ref().display(),
                error = %e,
                "could not load expense store, starting fresh"
            );
        }
        store
    }

    /// Append an expense
    pub fn add(&mut self, expense: Expense) {
        tracing::debug!(id = %expense.id(), category = expense.category(), "expense added");
        self.expenses.push(expense);
    }

    /// All expenses in insertion order
    pub fn list_all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Expenses whose category matches `name` case-insensitively, in insertion order
    pub fn filter_by_category(&self, name: &str) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| e.matches_category(name))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Replace the contents with the sequence persisted at `path`
    ///
    /// A missing file is not an error: the store becomes empty. On any
    /// failure the store is left empty and the error is returned.
    pub fn load_all(&mut self, path: impl AsRef<Path>) -> LedgerResult<()> {
        let path = path.as_ref();
        self.expenses.clear();

        let data: ExpenseData = read_json(path)?;
        if data.schema_version > STORE_SCHEMA_VERSION {
            return Err(LedgerError::Deserialization(format!(
                "Unsupported store schema version {} in {} (expected at most {})",
                data.schema_version,
                path.display(),
                STORE_SCHEMA_VERSION
            )));
        }

        self.expenses = data.expenses;
        tracing::info!(path = %path.display(), count = self.expenses.len(), "expense store loaded");
        Ok(())
    }

    /// Persist the full sequence to `path`, overwriting prior content
    pub fn save_all(&self, path: impl AsRef<Path>) -> LedgerResult<()> {
        let path = path.as_ref();
        let data = ExpenseData {
            schema_version: STORE_SCHEMA_VERSION,
            expenses: self.expenses.clone(),
        };
        write_json_atomic(path, &data)?;
        tracing::info!(path = %path.display(), count = self.expenses.len(), "expense store saved");
        Ok(())
    }
}
