//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service layer, plus the interactive menu.

pub mod expense;
pub mod export;
pub mod report;
pub mod shell;

pub use expense::{handle_add, handle_filter, handle_list, AddArgs};
pub use export::{handle_export_command, ExportFormat};
pub use report::{handle_report_command, ReportCommands};
pub use shell::run_shell;
