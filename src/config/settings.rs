//! User settings for the expense ledger
//!
//! Manages display and input preferences and the name of the store file.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::services::parse_date;
use crate::models::DEFAULT_CURRENCY_SYMBOL;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol prefixed to displayed amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format used to parse entered dates (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// File name of the expense store inside the data directory
    #[serde(default = "default_store_file")]
    pub store_file: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_store_file() -> String {
    "expenses.json".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            store_file: default_store_file(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                LedgerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Change the input date format
    ///
    /// The format must round-trip a known date, otherwise every later date
    /// entry would fail to parse.
    pub fn set_date_format(&mut self, format: String) -> Result<(), LedgerError> {
        let sample = chrono::NaiveDate::from_ymd_opt(2024, 1, 31)
            .ok_or_else(|| LedgerError::Config("Invalid sample date".into()))?;
        let mut rendered = String::new();
        let formatted = write!(rendered, "{}", sample.format(&format));
        match formatted.ok().and_then(|_| parse_date(&rendered, &format).ok()) {
            Some(parsed) if parsed == sample => {
                self.date_format = format;
                Ok(())
            }
            _ => Err(LedgerError::Config(format!(
                "Unusable date format: {}",
                format
            ))),
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            LedgerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            LedgerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
