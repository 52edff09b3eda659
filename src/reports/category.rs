//! Category Report
//!
//! Totals expenses per category. Grouping uses the category text exactly as
//! stored, so "Food" and "food" are separate rows here even though the store's
//! category filter treats them as the same category.

use std::collections::HashMap;
use std::io::Write;

use crate::display::report::separator;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Amount, Expense};

/// Total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category text as entered
    pub category: String,
    /// Sum of amounts in this category
    pub total: Amount,
    /// Number of expenses in this category
    pub expense_count: usize,
}

/// Category Report
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryReport {
    /// One row per distinct category text
    pub rows: Vec<CategoryTotal>,
    /// Sum across all rows
    pub grand_total: Amount,
    /// Number of expenses covered
    pub expense_count: usize,
}

impl CategoryReport {
    /// Generate a category report
    ///
    /// Rows are ordered by byte-wise comparison of the category text, which
    /// puts uppercase letters before lowercase ones ("Food", "Transport",
    /// "food"). Returns `None` when there are no expenses to report on.
    pub fn generate<'a, I>(expenses: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut by_category: HashMap<&str, (Amount, usize)> = HashMap::new();
        let mut grand_total = Amount::zero();
        let mut expense_count = 0;

        for expense in expenses {
            let entry = by_category
                .entry(expense.category())
                .or_insert((Amount::zero(), 0));
            entry.0 += expense.amount();
            entry.1 += 1;
            grand_total += expense.amount();
            expense_count += 1;
        }

        if expense_count == 0 {
            return None;
        }

        let mut rows: Vec<CategoryTotal> = by_category
            .into_iter()
            .map(|(category, (total, count))| CategoryTotal {
                category: category.to_string(),
                total,
                expense_count: count,
            })
            .collect();
        rows.sort_by(|a, b| a.category.cmp(&b.category));

        Some(Self {
            rows,
            grand_total,
            expense_count,
        })
    }

    /// Total for a category (exact, case-sensitive match)
    pub fn total_for(&self, category: &str) -> Option<Amount> {
        self.rows
            .iter()
            .find(|r| r.category == category)
            .map(|r| r.total)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("CATEGORY REPORT\n");
        output.push_str(&separator(45));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<15} : {:>14} {:>6}\n",
                row.category,
                row.total.format_with_symbol(currency_symbol),
                row.expense_count
            ));
        }

        output.push_str(&separator(45));
        output.push('\n');
        output.push_str(&format!(
            "{:<15} : {:>14} {:>6}\n",
            "TOTAL",
            self.grand_total.format_with_symbol(currency_symbol),
            self.expense_count
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record(["Category", "Total", "Expense Count"])
            .map_err(|e| LedgerError::Export(e.to_string()))?;

        for row in &self.rows {
            csv_writer
                .write_record([
                    row.category.clone(),
                    format!("{:.2}", row.total.value()),
                    row.expense_count.to_string(),
                ])
                .map_err(|e| LedgerError::Export(e.to_string()))?;
        }

        csv_writer
            .flush()
            .map_err(|e| LedgerError::Export(e.to_string()))?;

        Ok(())
    }
}
