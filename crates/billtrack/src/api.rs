//! Stable, public-facing helpers that wrap the layered crates.
//!
//! Frontends (CLI, GUI, FFI) open a configured store here and then talk to
//! [`BillStore`] directly; its mutators and derived views are the whole
//! core surface.

use std::{path::PathBuf, sync::Arc};

use uuid::Uuid;

use bills_config::ConfigManager;
use bills_core::{BillStore, Clock};
use bills_domain::Bill;
use bills_storage_json::JsonBillStorage;

use crate::{AppError, SystemClock};

/// Opens a store persisting to the given slot path, on the system clock.
pub fn open_store_at(path: PathBuf) -> Result<BillStore, AppError> {
    open_store_with_clock(path, Arc::new(SystemClock))
}

/// Opens a store persisting to the slot path with an explicit clock.
pub fn open_store_with_clock(
    path: PathBuf,
    clock: Arc<dyn Clock>,
) -> Result<BillStore, AppError> {
    let storage = Arc::new(JsonBillStorage::new(path)?);
    Ok(BillStore::open(storage, clock))
}

/// Opens the store at the user's configured data location, resolving the
/// config file from `base_dir` (typically the application's data dir).
pub fn open_default_store(base_dir: PathBuf) -> Result<BillStore, AppError> {
    let manager = ConfigManager::with_base_dir(base_dir)?;
    let config = manager.load()?;
    open_store_at(config.bills_file_path())
}

/// Adds a bill built from primitive values and returns its identifier.
pub fn api_add_bill(
    store: &BillStore,
    name: impl Into<String>,
    amount: f64,
    due_day: u32,
) -> Result<Uuid, AppError> {
    let id = store.add(Bill::new(name, amount, due_day))?;
    Ok(id)
}
