use std::{path::PathBuf, sync::Arc};

use chrono::{DateTime, TimeZone, Utc};
use tempfile::tempdir;

use billtrack::{
    api::{api_add_bill, open_store_with_clock},
    open_default_store, open_store_at, Bill, Clock, Config, ConfigManager,
};

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn clock_on(year: i32, month: u32, day: u32) -> Arc<FixedClock> {
    Arc::new(FixedClock(
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap(),
    ))
}

#[test]
fn store_survives_reopen_with_paid_state() {
    let dir = tempdir().expect("tempdir");
    let slot = dir.path().join("bills.json");

    let store = open_store_with_clock(slot.clone(), clock_on(2024, 3, 10)).expect("open store");
    let rent = store.add(Bill::new("Rent", 1200.0, 1)).expect("add rent");
    store.add(Bill::new("Gym", 55.0, 28)).expect("add gym");
    store.toggle_paid(rent);
    drop(store);

    let reopened = open_store_with_clock(slot, clock_on(2024, 3, 11)).expect("reopen store");
    assert_eq!(reopened.len(), 2);
    let all = reopened.bills();
    assert_eq!(reopened.total_paid(&all), 1200.0);
    assert_eq!(reopened.total_unpaid(&all), 55.0);
}

#[test]
fn seeded_store_round_trips() {
    let dir = tempdir().expect("tempdir");
    let slot = dir.path().join("bills.json");

    let store = open_store_at(slot.clone()).expect("open store");
    assert_eq!(store.seed_starter_bills(), 14);
    drop(store);

    let reopened = open_store_at(slot).expect("reopen store");
    assert_eq!(reopened.len(), 14);
    // Seeding is explicit: reopening must not add anything on its own.
    assert_eq!(reopened.seed_starter_bills(), 0);
}

#[test]
fn default_store_honours_configured_data_root() {
    let dir = tempdir().expect("tempdir");
    let base = dir.path().to_path_buf();
    let data_root: PathBuf = dir.path().join("custom-data");

    let manager = ConfigManager::with_base_dir(base.clone()).expect("create manager");
    let mut config = Config::default();
    config.data_root = Some(data_root.clone());
    manager.save(&config).expect("save config");

    let store = open_default_store(base).expect("open default store");
    let id = api_add_bill(&store, "Internet", 120.0, 10).expect("add");

    assert!(store.bill(id).is_some());
    assert!(data_root.join("bills.json").exists());
}
