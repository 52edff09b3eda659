//! Expense CLI commands
//!
//! Implements the one-shot `add`, `list` and `filter` commands.

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_list, format_filtered_list};
use crate::error::LedgerResult;
use crate::models::{Amount, Expense};
use crate::services::{parse_date, CreateExpenseInput, ExpenseService};
use crate::storage::ExpenseStore;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Category label (e.g. "Food")
    pub category: String,

    /// Amount in currency units (e.g. "12.50")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Expense date (defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Next due date; makes the expense recurring
    #[arg(short, long)]
    pub next_due: Option<String>,
}

/// Handle `add`: validate input and append the expense to the store
///
/// The caller is responsible for saving the store afterwards.
pub fn handle_add(store: &mut ExpenseStore, settings: &Settings, args: AddArgs) -> LedgerResult<Expense> {
    let amount = Amount::parse(&args.amount)?;
    let date = match args.date {
        Some(d) => parse_date(&d, &settings.date_format)?,
        None => today(),
    };
    let next_due_date = args
        .next_due
        .map(|d| parse_date(&d, &settings.date_format))
        .transpose()?;

    let input = CreateExpenseInput {
        category: args.category,
        amount: amount.value(),
        date,
        next_due_date,
    };

    let expense = ExpenseService::new(store).create(input)?;
    println!("Expense added successfully!");
    println!("{}", format_expense_details(&expense, &settings.currency_symbol));
    Ok(expense)
}

/// Handle `list`
pub fn handle_list(store: &ExpenseStore, settings: &Settings) {
    print!("{}", format_expense_list(store.list_all(), &settings.currency_symbol));
}

/// Handle `filter`
pub fn handle_filter(store: &ExpenseStore, settings: &Settings, category: &str) {
    let found = store.filter_by_category(category.trim());
    print!("{}", format_filtered_list(&found, category.trim(), &settings.currency_symbol));
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;

    fn args(category: &str, amount: &str, date: Option<&str>, next_due: Option<&str>) -> AddArgs {
        AddArgs {
            category: category.to_string(),
            amount: amount.to_string(),
            date: date.map(String::from),
            next_due: next_due.map(String::from),
        }
    }

    #[test]
    fn test_add_one_time() {
        let mut store = ExpenseStore::new();
        let settings = Settings::default();

        let expense =
            handle_add(&mut store, &settings, args("Food", "12.50", Some("2024-01-15"), None))
                .unwrap();

        assert_eq!(expense.amount().value(), 12.5);
        assert!(!expense.is_recurring());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_recurring() {
        let mut store = ExpenseStore::new();
        let settings = Settings::default();

        let expense = handle_add(
            &mut store,
            &settings,
            args("Rent", "900", Some("2024-01-01"), Some("2024-02-01")),
        )
        .unwrap();

        assert_eq!(
            expense.next_due_date(),
            NaiveDate::from_ymd_opt(2024, 2, 1)
        );
    }

    #[test]
    fn test_add_defaults_date_to_today() {
        let mut store = ExpenseStore::new();
        let expense =
            handle_add(&mut store, &Settings::default(), args("Food", "1", None, None)).unwrap();
        assert_eq!(expense.date(), today());
    }

    #[test]
    fn test_add_rejects_negative_amount() {
        let mut store = ExpenseStore::new();
        let err = handle_add(
            &mut store,
            &Settings::default(),
            args("Food", "-5", Some("2024-01-15"), None),
        )
        .unwrap_err();

        assert!(err.is_validation());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_rejects_bad_date() {
        let mut store = ExpenseStore::new();
        let err = handle_add(
            &mut store,
            &Settings::default(),
            args("Food", "5", Some("15/01/2024"), None),
        )
        .unwrap_err();

        assert!(matches!(err, LedgerError::Parse(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_uses_configured_date_format() {
        let mut store = ExpenseStore::new();
        let settings = Settings {
            date_format: "%d/%m/%Y".to_string(),
            ..Settings::default()
        };

        let expense =
            handle_add(&mut store, &settings, args("Food", "5", Some("15/01/2024"), None)).unwrap();
        assert_eq!(expense.date(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }
}
