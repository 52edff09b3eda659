use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_ledger::cli::{
    handle_add, handle_export_command, handle_filter, handle_list, handle_report_command,
    run_shell, AddArgs, ExportFormat, ReportCommands,
};
use expense_ledger::config::{LedgerPaths, Settings};
use expense_ledger::logging;
use expense_ledger::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "expenses",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal expense ledger",
    long_about = "Record one-time and recurring expenses, keep them in a local \
                  JSON store, and summarize them by month or by category. \
                  Run without a subcommand for the interactive menu."
)]
struct Cli {
    /// Expense store file (defaults to the data directory)
    #[arg(short, long, global = true, env = "EXPENSE_LEDGER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an expense
    Add(AddArgs),

    /// List all expenses in insertion order
    #[command(alias = "ls")]
    List,

    /// Show expenses in a category (case-insensitive)
    Filter {
        /// Category to match
        category: String,
    },

    /// Aggregate reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export all expenses
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Launch the interactive menu
    #[command(alias = "ui")]
    Shell,

    /// Show current configuration and paths, optionally updating settings
    Config {
        /// Set the currency symbol shown before amounts
        #[arg(long, value_name = "SYMBOL")]
        set_currency: Option<String>,
        /// Set the date format used for entered dates (strftime)
        #[arg(long, value_name = "FORMAT")]
        set_date_format: Option<String>,
    },
}

fn main() -> Result<()> {
    logging::init_tracing();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let store_path = cli
        .file
        .unwrap_or_else(|| paths.store_file(&settings.store_file));

    match cli.command {
        Some(Commands::Add(args)) => {
            // A store that exists but cannot be read must not be overwritten
            let mut store = ExpenseStore::new();
            store.load_all(&store_path)?;
            handle_add(&mut store, &settings, args)?;
            store.save_all(&store_path)?;
        }
        Some(Commands::List) => {
            let store = ExpenseStore::load_or_fresh(&store_path);
            handle_list(&store, &settings);
        }
        Some(Commands::Filter { category }) => {
            let store = ExpenseStore::load_or_fresh(&store_path);
            handle_filter(&store, &settings, &category);
        }
        Some(Commands::Report(cmd)) => {
            let store = ExpenseStore::load_or_fresh(&store_path);
            handle_report_command(&store, &settings, cmd)?;
        }
        Some(Commands::Export { format, output }) => {
            let store = ExpenseStore::load_or_fresh(&store_path);
            handle_export_command(&store, format, output)?;
        }
        Some(Commands::Config {
            set_currency,
            set_date_format,
        }) => {
            if set_currency.is_some() || set_date_format.is_some() {
                if let Some(symbol) = set_currency {
                    settings.currency_symbol = symbol;
                }
                if let Some(format) = set_date_format {
                    settings.set_date_format(format)?;
                }
                settings.save(&paths)?;
                println!("Settings saved to: {}", paths.settings_file().display());
                println!();
            }

            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Store file:     {}", store_path.display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        Some(Commands::Shell) | None => {
            let stdin = io::stdin();
            run_shell(&store_path, &settings, stdin.lock(), io::stdout())?;
        }
    }

    Ok(())
}
