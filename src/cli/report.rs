//! CLI commands for reports
//!
//! Provides commands for printing and exporting the monthly and category
//! reports.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;
use crate::reports::{CategoryReport, MonthlyReport, NO_DATA_MESSAGE};
use crate::storage::ExpenseStore;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Totals per calendar month (all years combined)
    Monthly {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Totals per category (case-sensitive)
    Category {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    store: &ExpenseStore,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    let expenses = store.list_all();

    match cmd {
        ReportCommands::Monthly { output: Some(path) } => match MonthlyReport::generate(expenses) {
            Some(report) => {
                report.export_csv(create_output(&path)?)?;
                println!("Monthly report exported to: {}", path.display());
            }
            None => println!("{}", NO_DATA_MESSAGE),
        },
        ReportCommands::Monthly { output: None } => {
            print!("{}", monthly_report_text(expenses, &settings.currency_symbol));
        }
        ReportCommands::Category { output: Some(path) } => {
            match CategoryReport::generate(expenses) {
                Some(report) => {
                    report.export_csv(create_output(&path)?)?;
                    println!("Category report exported to: {}", path.display());
                }
                None => println!("{}", NO_DATA_MESSAGE),
            }
        }
        ReportCommands::Category { output: None } => {
            print!("{}", category_report_text(expenses, &settings.currency_symbol));
        }
    }

    Ok(())
}

/// Render the monthly report, or the no-data message
pub fn monthly_report_text(expenses: &[Expense], currency_symbol: &str) -> String {
    match MonthlyReport::generate(expenses) {
        Some(report) => report.format_terminal(currency_symbol),
        None => format!("{}\n", NO_DATA_MESSAGE),
    }
}

/// Render the category report, or the no-data message
pub fn category_report_text(expenses: &[Expense], currency_symbol: &str) -> String {
    match CategoryReport::generate(expenses) {
        Some(report) => report.format_terminal(currency_symbol),
        None => format!("{}\n", NO_DATA_MESSAGE),
    }
}

fn create_output(path: &Path) -> LedgerResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn store() -> ExpenseStore {
        let mut store = ExpenseStore::new();
        let jan = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        store.add(Expense::one_time("Food", 100.0, jan).unwrap());
        store.add(Expense::one_time("food", 50.0, jan).unwrap());
        store
    }

    #[test]
    fn test_no_data_text() {
        assert_eq!(monthly_report_text(&[], "Rs"), "No data for report.\n");
        assert_eq!(category_report_text(&[], "Rs"), "No data for report.\n");
    }

    #[test]
    fn test_report_text() {
        let store = store();
        assert!(monthly_report_text(store.list_all(), "Rs").contains("Rs150.00"));

        let text = category_report_text(store.list_all(), "Rs");
        assert!(text.contains("Rs100.00"));
        assert!(text.contains("Rs50.00"));
    }

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("category.csv");

        handle_report_command(
            &store(),
            &Settings::default(),
            ReportCommands::Category {
                output: Some(path.clone()),
            },
        )
        .unwrap();

        let csv = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            csv,
            "Category,Total,Expense Count\nFood,100.00,1\nfood,50.00,1\n"
        );
    }

    #[test]
    fn test_export_without_data_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("monthly.csv");

        handle_report_command(
            &ExpenseStore::new(),
            &Settings::default(),
            ReportCommands::Monthly {
                output: Some(path.clone()),
            },
        )
        .unwrap();

        assert!(!path.exists());
    }
}
