//! CLI commands for data export
//!
//! Provides the `export` command for writing the ledger in various formats.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml};
use crate::models::Expense;
use crate::storage::ExpenseStore;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per expense)
    Csv,
    /// JSON format (full ledger with metadata)
    Json,
    /// YAML format (full ledger, human-readable)
    Yaml,
}

/// Handle the export command
///
/// Writes to `output` if given, otherwise to stdout.
pub fn handle_export_command(
    store: &ExpenseStore,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> LedgerResult<()> {
    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(store.list_all(), format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| LedgerError::Export(e.to_string()))?;
            println!(
                "Exported {} expenses to: {}",
                store.len(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(store.list_all(), format, &mut writer)?;
            writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;
        }
    }

    Ok(())
}

/// Write expenses in the requested format
pub fn write_export<W: Write>(expenses: &[Expense], format: ExportFormat, writer: &mut W) -> LedgerResult<()> {
    match format {
        ExportFormat::Csv => export_expenses_csv(expenses, writer),
        ExportFormat::Json => export_full_json(expenses, writer, true),
        ExportFormat::Yaml => export_full_yaml(expenses, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn expenses() -> Vec<Expense> {
        vec![Expense::one_time("Food", 10.0, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()).unwrap()]
    }

    #[test]
    fn test_write_export_formats() {
        let expenses = expenses();

        let mut csv = Vec::new();
        write_export(&expenses, ExportFormat::Csv, &mut csv).unwrap();
        assert!(String::from_utf8(csv).unwrap().starts_with("ID,Date,Category"));

        let mut json = Vec::new();
        write_export(&expenses, ExportFormat::Json, &mut json).unwrap();
        assert!(String::from_utf8(json).unwrap().contains("\"schema_version\""));

        let mut yaml = Vec::new();
        write_export(&expenses, ExportFormat::Yaml, &mut yaml).unwrap();
        assert!(String::from_utf8(yaml).unwrap().contains("category: Food"));
    }

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");

        let mut store = ExpenseStore::new();
        for expense in expenses() {
            store.add(expense);
        }

        handle_export_command(&store, ExportFormat::Json, Some(path.clone())).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"expense_count\": 1"));
    }
}
