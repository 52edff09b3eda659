//! Tracing setup
//!
//! Log output goes to stderr so that listings and reports on stdout stay
//! clean. The filter is read from `EXPENSE_LEDGER_LOG` (e.g.
//! `EXPENSE_LEDGER_LOG=expense_ledger=debug`) and defaults to warnings only.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "EXPENSE_LEDGER_LOG";

const DEFAULT_FILTER: &str = "expense_ledger=warn";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber once per process
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be installed (e.g. by a test harness)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
