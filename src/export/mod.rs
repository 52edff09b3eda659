//! Export module for the expense ledger
//!
//! Provides complete data export functionality in multiple formats:
//! - CSV: one row per expense (spreadsheet-compatible)
//! - JSON: machine-readable full ledger export
//! - YAML: human-readable full ledger export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use self::json::{export_full_json, ExportMetadata, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_full_yaml;
