//! Monthly Report
//!
//! Totals expenses per calendar month. Grouping is by month-of-year only, so
//! January 2023 and January 2024 land in the same bucket.

use std::collections::HashMap;
use std::io::Write;

use chrono::{Datelike, Month};

use crate::display::report::separator;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Amount, Expense};

/// Total for one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotal {
    /// Calendar month (year is not part of the key)
    pub month: Month,
    /// Sum of amounts in this month
    pub total: Amount,
    /// Number of expenses in this month
    pub expense_count: usize,
}

/// Monthly Report
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    /// One row per month that has expenses, January first
    pub rows: Vec<MonthlyTotal>,
    /// Sum across all rows
    pub grand_total: Amount,
    /// Number of expenses covered
    pub expense_count: usize,
}

impl MonthlyReport {
    /// Generate a monthly report
    ///
    /// Returns `None` when there are no expenses to report on.
    pub fn generate<'a, I>(expenses: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut by_month: HashMap<u32, (Amount, usize)> = HashMap::new();
        let mut grand_total = Amount::zero();
        let mut expense_count = 0;

        for expense in expenses {
            let entry = by_month
                .entry(expense.date().month())
                .or_insert((Amount::zero(), 0));
            entry.0 += expense.amount();
            entry.1 += 1;
            grand_total += expense.amount();
            expense_count += 1;
        }

        if expense_count == 0 {
            return None;
        }

        let mut months: Vec<_> = by_month.into_iter().collect();
        months.sort_by_key(|(month, _)| *month);

        let rows = months
            .into_iter()
            .filter_map(|(number, (total, count))| {
                let month = u8::try_from(number)
                    .ok()
                    .and_then(|n| Month::try_from(n).ok())?;
                Some(MonthlyTotal {
                    month,
                    total,
                    expense_count: count,
                })
            })
            .collect();

        Some(Self {
            rows,
            grand_total,
            expense_count,
        })
    }

    /// Total for a given month, if any expenses fell in it
    pub fn total_for(&self, month: Month) -> Option<Amount> {
        self.rows.iter().find(|r| r.month == month).map(|r| r.total)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("MONTHLY REPORT\n");
        output.push_str(&separator(40));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<10} : {:>14} {:>6}\n",
                month_label(row.month),
                row.total.format_with_symbol(currency_symbol),
                row.expense_count
            ));
        }

        output.push_str(&separator(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<10} : {:>14} {:>6}\n",
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
            .write_record(["Month", "Total", "Expense Count"])
            .map_err(|e| LedgerError::Export(e.to_string()))?;

        for row in &self.rows {
            csv_writer
                .write_record([
                    month_label(row.month),
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

/// Upper-case month name used in report rows ("JANUARY")
fn month_label(month: Month) -> String {
    month.name().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(amount: f64, y: i32, m: u32, d: u32) -> Expense {
        Expense::one_time("Misc", amount, NaiveDate::from_ymd_opt(y, m, d).unwrap()).unwrap()
    }

    #[test]
    fn test_empty_input_is_no_data() {
        let expenses: Vec<Expense> = Vec::new();
        assert!(MonthlyReport::generate(&expenses).is_none());
    }

    #[test]
    fn test_months_collapse_across_years() {
        let expenses = vec![expense(100.0, 2023, 1, 15), expense(50.0, 2024, 1, 20)];

        let report = MonthlyReport::generate(&expenses).unwrap();
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].month, Month::January);
        assert_eq!(report.rows[0].total.value(), 150.0);
        assert_eq!(report.rows[0].expense_count, 2);
    }

    #[test]
    fn test_rows_ordered_by_calendar_month() {
        let expenses = vec![
            expense(5.0, 2024, 12, 1),
            expense(10.0, 2024, 3, 1),
            expense(200.0, 2023, 7, 4),
            expense(1.0, 2025, 1, 9),
            expense(2.0, 2022, 3, 30),
        ];

        let report = MonthlyReport::generate(&expenses).unwrap();
        let months: Vec<Month> = report.rows.iter().map(|r| r.month).collect();
        assert_eq!(
            months,
            vec![Month::January, Month::March, Month::July, Month::December]
        );
        assert_eq!(report.total_for(Month::March).unwrap().value(), 12.0);
        assert_eq!(report.total_for(Month::June), None);
        assert_eq!(report.grand_total.value(), 218.0);
        assert_eq!(report.expense_count, 5);
    }

    #[test]
    fn test_works_on_filtered_subsets() {
        let expenses = vec![expense(5.0, 2024, 2, 1), expense(7.0, 2024, 2, 2)];
        let subset: Vec<&Expense> = expenses.iter().take(1).collect();

        let report = MonthlyReport::generate(subset).unwrap();
        assert_eq!(report.grand_total.value(), 5.0);
    }

    #[test]
    fn test_format_terminal() {
        let expenses = vec![expense(100.0, 2023, 1, 15), expense(30.5, 2023, 2, 1)];
        let report = MonthlyReport::generate(&expenses).unwrap();

        let output = report.format_terminal("Rs");
        assert!(output.starts_with("MONTHLY REPORT\n"));
        assert!(output.contains("JANUARY"));
        assert!(output.contains("Rs100.00"));
        assert!(output.contains("Rs30.50"));
        assert!(output.contains("Rs130.50"));
        assert!(output.find("JANUARY").unwrap() < output.find("FEBRUARY").unwrap());
    }

    #[test]
    fn test_export_csv() {
        let expenses = vec![expense(100.0, 2023, 1, 15), expense(50.0, 2024, 1, 20)];
        let report = MonthlyReport::generate(&expenses).unwrap();

        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        assert_eq!(csv, "Month,Total,Expense Count\nJANUARY,150.00,2\n");
    }
}
