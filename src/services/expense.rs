//! Expense service
//!
//! Provides the input-level logic for recording expenses: category cleanup,
//! date parsing, and choosing the one-time or recurring variant.

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;
use crate::storage::ExpenseStore;

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    /// Present for recurring expenses
    pub next_due_date: Option<NaiveDate>,
}

impl CreateExpenseInput {
    /// Input for a one-time expense
    pub fn one_time(category: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            category: category.into(),
            amount,
            date,
            next_due_date: None,
        }
    }

    /// Input for a recurring expense
    pub fn recurring(
        category: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        next_due_date: NaiveDate,
    ) -> Self {
        Self {
            next_due_date: Some(next_due_date),
            ..Self::one_time(category, amount, date)
        }
    }
}

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a mut ExpenseStore,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a mut ExpenseStore) -> Self {
        Self { store }
    }

    /// Create an expense and append it to the store
    ///
    /// The category is trimmed and must not be blank. The amount is validated
    /// by the expense constructors.
    pub fn create(&mut self, input: CreateExpenseInput) -> LedgerResult<Expense> {
        let category = input.category.trim();
        if category.is_empty() {
            return Err(LedgerError::Validation("Category cannot be empty".into()));
        }

        let expense = match input.next_due_date {
            Some(next_due_date) => {
                Expense::recurring(category, input.amount, input.date, next_due_date)?
            }
            None => Expense::one_time(category, input.amount, input.date)?,
        };

        self.store.add(expense.clone());
        tracing::info!(
            id = %expense.id(),
            category = expense.category(),
            amount = expense.amount().value(),
            recurring = expense.is_recurring(),
            "expense recorded"
        );

        Ok(expense)
    }
}

/// Parse a date entered by the user
pub fn parse_date(input: &str, format: &str) -> LedgerResult<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, format).map_err(|_| LedgerError::invalid_date(input, format))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_create_one_time() {
        let mut store = ExpenseStore::new();
        let mut service = ExpenseService::new(&mut store);

        let expense = service
            .create(CreateExpenseInput::one_time("  Food ", 12.5, date(2024, 1, 5)))
            .unwrap();

        assert_eq!(expense.category(), "Food");
        assert!(!expense.is_recurring());
        assert_eq!(store.list_all(), &[expense]);
    }

    #[test]
    fn test_create_recurring() {
        let mut store = ExpenseStore::new();
        let mut service = ExpenseService::new(&mut store);

        let expense = service
            .create(CreateExpenseInput::recurring(
                "Rent",
                900.0,
                date(2024, 1, 1),
                date(2024, 2, 1),
            ))
            .unwrap();

        assert_eq!(expense.next_due_date(), Some(date(2024, 2, 1)));
    }

    #[test]
    fn test_create_rejects_negative_amount() {
        let mut store = ExpenseStore::new();
        let mut service = ExpenseService::new(&mut store);

        let err = service
            .create(CreateExpenseInput::one_time("Food", -1.0, date(2024, 1, 5)))
            .unwrap_err();

        assert!(err.is_validation());
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_rejects_blank_category() {
        let mut store = ExpenseStore::new();
        let mut service = ExpenseService::new(&mut store);

        let err = service
            .create(CreateExpenseInput::one_time("   ", 1.0, date(2024, 1, 5)))
            .unwrap_err();

        assert!(err.is_validation());
        assert!(store.is_empty());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2023-01-15", "%Y-%m-%d").unwrap(), date(2023, 1, 15));
        assert_eq!(parse_date(" 15/01/2023 ", "%d/%m/%Y").unwrap(), date(2023, 1, 15));
        assert!(matches!(
            parse_date("2023-02-30", "%Y-%m-%d"),
            Err(LedgerError::Parse(_))
        ));
        assert!(parse_date("yesterday", "%Y-%m-%d").is_err());
    }
}
