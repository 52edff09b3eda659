//! Interactive menu session
//!
//! A numbered text menu over the expense store. The store is loaded when the
//! session starts and saved on "Save & Exit" or when input ends. Errors from
//! individual operations are printed and the session continues.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::config::Settings;
use crate::display::{format_expense_list, format_filtered_list, format_header, separator};
use crate::error::{LedgerError, LedgerResult};
use crate::models::Amount;
use crate::services::{parse_date, CreateExpenseInput, ExpenseService};
use crate::storage::ExpenseStore;

use super::report::{category_report_text, monthly_report_text};

const MENU_WIDTH: usize = 31;

/// Run the interactive menu until the user exits or input ends
pub fn run_shell<R: BufRead, W: Write>(
    store_path: &Path,
    settings: &Settings,
    mut input: R,
    mut output: W,
) -> LedgerResult<()> {
    let mut store = ExpenseStore::new();
    if let Err(e) = store.load_all(store_path) {
        tracing::warn!(path = %store_path.display(), error = %e, "could not load expense store");
        writeln!(output, "Starting fresh - no previous data file.")?;
    }
    tracing::info!(count = store.len(), "shell session started");

    let symbol = settings.currency_symbol.as_str();

    loop {
        write_menu(&mut output)?;

        let Some(line) = read_line(&mut input)? else {
            // End of input: keep what was entered
            writeln!(output)?;
            store.save_all(store_path)?;
            writeln!(output, "Expenses saved. Goodbye!")?;
            return Ok(());
        };

        let choice: u32 = match line.trim().parse() {
            Ok(choice) => choice,
            Err(_) => {
                writeln!(output, "Invalid input! Enter a number.")?;
                continue;
            }
        };

        let result = match choice {
            1 => add_expense(&mut store, settings, &mut input, &mut output),
            2 => write!(output, "{}", format_expense_list(store.list_all(), symbol))
                .map_err(LedgerError::from),
            3 => filter_expenses(&store, symbol, &mut input, &mut output),
            4 => write!(output, "\n{}", monthly_report_text(store.list_all(), symbol))
                .map_err(LedgerError::from),
            5 => write!(output, "\n{}", category_report_text(store.list_all(), symbol))
                .map_err(LedgerError::from),
            6 => match store.save_all(store_path) {
                Ok(()) => {
                    writeln!(output, "Expenses saved. Goodbye!")?;
                    tracing::info!(count = store.len(), "shell session ended");
                    return Ok(());
                }
                Err(e) => Err(e),
            },
            _ => writeln!(output, "Invalid choice!").map_err(LedgerError::from),
        };

        if let Err(e) = result {
            writeln!(output, "Error: {}", e)?;
        }
    }
}

fn write_menu<W: Write>(output: &mut W) -> LedgerResult<()> {
    writeln!(output)?;
    writeln!(output, "{}", separator(MENU_WIDTH))?;
    writeln!(output, "{}", format_header("PERSONAL EXPENSE TRACKER", MENU_WIDTH))?;
    writeln!(output, "{}", separator(MENU_WIDTH))?;
    writeln!(output, "1. Add Expense")?;
    writeln!(output, "2. View All Expenses")?;
    writeln!(output, "3. Filter by Category")?;
    writeln!(output, "4. Monthly Report")?;
    writeln!(output, "5. Category Report")?;
    writeln!(output, "6. Save & Exit")?;
    write!(output, "Enter choice: ")?;
    output.flush()?;
    Ok(())
}

fn add_expense<R: BufRead, W: Write>(
    store: &mut ExpenseStore,
    settings: &Settings,
    input: &mut R,
    output: &mut W,
) -> LedgerResult<()> {
    let hint = date_hint(&settings.date_format);

    let category = prompt(input, output, "Enter category: ")?;
    let amount = Amount::parse(&prompt(input, output, "Enter amount: ")?)?;
    let date = parse_date(
        &prompt(input, output, &format!("Enter date ({}): ", hint))?,
        &settings.date_format,
    )?;

    let recurring = prompt(input, output, "Is it recurring? (y/n): ")?;
    let next_due_date = if recurring.trim().eq_ignore_ascii_case("y") {
        let next = prompt(input, output, &format!("Enter next due date ({}): ", hint))?;
        Some(parse_date(&next, &settings.date_format)?)
    } else {
        None
    };

    ExpenseService::new(store).create(CreateExpenseInput {
        category,
        amount: amount.value(),
        date,
        next_due_date,
    })?;

    writeln!(output, "Expense added successfully!")?;
    Ok(())
}

fn filter_expenses<R: BufRead, W: Write>(
    store: &ExpenseStore,
    symbol: &str,
    input: &mut R,
    output: &mut W,
) -> LedgerResult<()> {
    let category = prompt(input, output, "Enter category to filter: ")?;
    let category = category.trim();
    let found = store.filter_by_category(category);
    write!(output, "{}", format_filtered_list(&found, category, symbol))?;
    Ok(())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> LedgerResult<String> {
    write!(output, "{}", message)?;
    output.flush()?;
    read_line(input)?.ok_or_else(|| LedgerError::Parse("Input ended unexpectedly".into()))
}

fn read_line<R: BufRead>(input: &mut R) -> LedgerResult<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(&['\r', '\n'][..]).to_string()))
}

/// Turn a strftime date format into a prompt hint ("%Y-%m-%d" -> "yyyy-mm-dd")
fn date_hint(format: &str) -> String {
    format.replace("%Y", "yyyy").replace("%m", "mm").replace("%d", "dd")
}
