//! Billtrack ties the bill-tracking crates together: configuration-driven
//! store construction, the system clock, and tracing setup for hosting
//! applications.

pub mod api;
pub mod error;
pub mod system_clock;

pub use api::{open_default_store, open_store_at};
pub use error::AppError;
pub use system_clock::SystemClock;

pub use bills_config::{Config, ConfigManager};
pub use bills_core::{BillStore, Clock, CoreError};
pub use bills_domain::{Bill, MonthKey, MonthSection, MonthlySummary, SectionTotals};
pub use bills_storage_json::JsonBillStorage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("billtrack=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Billtrack tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
