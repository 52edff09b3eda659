//! YAML Export functionality
//!
//! Exports the complete ledger to YAML format for human-readable backup.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::LedgerExport;
use crate::models::Expense;

/// Export the full ledger to YAML format
pub fn export_full_yaml<W: Write>(expenses: &[Expense], writer: &mut W) -> LedgerResult<()> {
    let export = LedgerExport::from_expenses(expenses);

    writeln!(writer, "# Expense Ledger Export").map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
