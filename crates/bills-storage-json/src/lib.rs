//! bills-storage-json
//!
//! Filesystem JSON backend for the bill slot. The whole collection lives
//! in one file; writes are staged to a temporary sibling and renamed into
//! place so a crashed save never leaves a half-written slot.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use bills_core::{BillStorage, CoreError};
use bills_domain::Bill;

const TMP_SUFFIX: &str = "tmp";

/// Single-file JSON persistence for the bill collection.
#[derive(Debug, Clone)]
pub struct JsonBillStorage {
    path: PathBuf,
}

impl JsonBillStorage {
    /// Creates a backend writing to `path`, creating parent directories.
    pub fn new(path: PathBuf) -> Result<Self, CoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BillStorage for JsonBillStorage {
    fn save_bills(&self, bills: &[Bill]) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(bills)
            .map_err(|err| CoreError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn load_bills(&self) -> Result<Vec<Bill>, CoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    path.with_extension(TMP_SUFFIX)
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), CoreError> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    Ok(())
}
