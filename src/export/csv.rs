//! CSV Export functionality
//!
//! Exports expenses to a spreadsheet-friendly CSV file.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;

/// Export expenses to CSV, one row per expense in insertion order
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> LedgerResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Date", "Category", "Amount", "Type", "Next Due"])
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    for expense in expenses {
        let next_due = expense
            .next_due_date()
            .map(|d| d.to_string())
            .unwrap_or_default();

        csv_writer
            .write_record([
                expense.id().as_uuid().to_string(),
                expense.date().to_string(),
                expense.category().to_string(),
                format!("{:.2}", expense.amount().value()),
                expense.kind().to_string(),
                next_due,
            ])
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
