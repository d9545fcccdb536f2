use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const BILLS_FILE_NAME: &str = "bills.json";

/// Stores user-configurable preferences and data locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    /// Display currency for amounts; the core stays currency-agnostic.
    #[serde(default = "Config::default_currency")]
    pub currency: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for bill data. Defaults to `~/Documents/Bills`.
    pub data_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency: Self::default_currency(),
            data_root: None,
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        "en-US".into()
    }

    pub fn default_currency() -> String {
        "USD".into()
    }

    pub fn resolve_data_root(&self) -> PathBuf {
        if let Some(path) = &self.data_root {
            return path.clone();
        }

        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("Bills")
    }

    /// Full path of the persisted bill slot.
    pub fn bills_file_path(&self) -> PathBuf {
        self.resolve_data_root().join(BILLS_FILE_NAME)
    }
}
