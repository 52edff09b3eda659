//! JSON Export functionality
//!
//! Exports the complete ledger to JSON format with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All expenses, in insertion order
    pub expenses: Vec<Expense>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of expenses
    pub expense_count: usize,

    /// Number of recurring expenses
    pub recurring_count: usize,

    /// Date range of expenses (earliest)
    pub earliest_expense: Option<String>,

    /// Date range of expenses (latest)
    pub latest_expense: Option<String>,
}

impl LedgerExport {
    /// Build an export from a slice of expenses
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let earliest_expense = expenses.iter().map(|e| e.date()).min().map(|d| d.to_string());
        let latest_expense = expenses.iter().map(|e| e.date()).max().map(|d| d.to_string());

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            recurring_count: expenses.iter().filter(|e| e.is_recurring()).count(),
            earliest_expense,
            latest_expense,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses: expenses.to_vec(),
            metadata,
        }
    }
}

/// Export the full ledger to JSON
pub fn export_full_json<W: Write>(expenses: &[Expense], writer: &mut W, pretty: bool) -> LedgerResult<()> {
    let export = LedgerExport::from_expenses(expenses);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_metadata() {
        let expenses = vec![
            Expense::one_time("Food", 10.0, date(2024, 5, 1)).unwrap(),
            Expense::recurring("Rent", 800.0, date(2023, 11, 1), date(2023, 12, 1)).unwrap(),
        ];

        let export = LedgerExport::from_expenses(&expenses);
        assert_eq!(export.metadata.expense_count, 2);
        assert_eq!(export.metadata.recurring_count, 1);
        assert_eq!(export.metadata.earliest_expense.as_deref(), Some("2023-11-01"));
        assert_eq!(export.metadata.latest_expense.as_deref(), Some("2024-05-01"));
    }

    #[test]
    fn test_empty_export() {
        let export = LedgerExport::from_expenses(&[]);
        assert_eq!(export.metadata.expense_count, 0);
        assert!(export.metadata.earliest_expense.is_none());
    }

    #[test]
    fn test_json_export_parses_back() {
        let expenses = vec![Expense::one_time("Food", 10.0, date(2024, 5, 1)).unwrap()];

        let mut buf = Vec::new();
        export_full_json(&expenses, &mut buf, true).unwrap();

        let parsed: LedgerExport = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.expenses, expenses);
    }
}
