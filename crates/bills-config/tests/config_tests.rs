use std::path::PathBuf;

use bills_config::{Config, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_fields() {
    let cfg = Config::default();

    assert!(!cfg.currency.is_empty());
    assert!(!cfg.locale.is_empty());
    assert!(cfg.data_root.is_none());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("create manager");

    let mut cfg = Config::default();
    cfg.currency = "EUR".to_string();
    cfg.locale = "pt-PT".to_string();
    cfg.data_root = Some(PathBuf::from("/tmp/bill-data"));

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.currency, "EUR");
    assert_eq!(loaded.locale, "pt-PT");
    assert_eq!(loaded.data_root, Some(PathBuf::from("/tmp/bill-data")));
    assert!(manager.config_path().exists());
}

#[test]
fn missing_config_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("create manager");

    let loaded = manager.load().expect("load config");
    assert_eq!(loaded.currency, Config::default_currency());
}

#[test]
fn data_root_override_wins_path_resolution() {
    let mut cfg = Config::default();
    cfg.data_root = Some(PathBuf::from("/tmp/bill-data"));

    assert_eq!(cfg.resolve_data_root(), PathBuf::from("/tmp/bill-data"));
    assert_eq!(
        cfg.bills_file_path(),
        PathBuf::from("/tmp/bill-data/bills.json")
    );
}

#[test]
fn partial_config_files_fill_in_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("create manager");

    std::fs::write(manager.config_path(), r#"{"currency": "GBP"}"#).expect("write config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.currency, "GBP");
    assert_eq!(loaded.locale, Config::default_locale());
}
