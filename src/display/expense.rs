//! Expense display formatting
//!
//! Renders expense lists for the terminal, including the "nothing found"
//! messages shown for empty listings and filters.

use crate::models::Expense;

/// Format every expense as one `describe` line
pub fn format_expense_list<'a, I>(expenses: I, currency_symbol: &str) -> String
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut output = String::new();
    for expense in expenses {
        output.push_str(&expense.describe(currency_symbol));
        output.push('\n');
    }

    if output.is_empty() {
        return "No expenses found.\n".to_string();
    }
    output
}

/// Format the result of a category filter
pub fn format_filtered_list(expenses: &[&Expense], category: &str, currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return format!("No expenses found for {}\n", category);
    }
    format_expense_list(expenses.iter().copied(), currency_symbol)
}

/// Format a single expense with its ID, for confirmations
pub fn format_expense_details(expense: &Expense, currency_symbol: &str) -> String {
    format!("{}  {}", expense.id(), expense.describe(currency_symbol))
}
