//! Path management for the expense ledger
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_LEDGER_DATA_DIR` environment variable (if set)
//! 2. The platform data directory reported by `directories`
//!    (`~/.local/share/expense-ledger` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::LedgerError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_LEDGER_DATA_DIR";

/// Manages all paths used by the expense ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Create a new LedgerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform data directory can be determined and
    /// the override variable is not set.
    pub fn new() -> Result<Self, LedgerError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "expense-ledger")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or_else(|| {
                    LedgerError::Config("Could not determine a data directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to a named store file inside the data directory
    pub fn store_file(&self, name: &str) -> PathBuf {
        self.data_dir().join(name)
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| LedgerError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}
