// File-backed purchase store
use super::schema::{PurchaseRow, RecordId, StoredPurchase};
use super::{same_serial, RecordStore, StorageError};
use crate::file_manager::{read_json_file_or_default, write_json_file};
use crate::models::PurchaseRecord;
use chrono::Utc;
use log::{debug, info};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

lazy_static::lazy_static! {
    // Shared by every store in the process so two handles on the same file
    // cannot interleave their read-check-write cycles.
    static ref SAVE_LOCK: Mutex<()> = Mutex::new(());
}

/// Keeps every purchase as one row in a JSON array file.
pub struct JsonRecordStore {
    path: PathBuf,
}

impl JsonRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_rows(&self) -> Result<Vec<PurchaseRow>, StorageError> {
        read_json_file_or_default(&self.path)
    }
}

impl RecordStore for JsonRecordStore {
    fn save(&self, record: &PurchaseRecord) -> Result<RecordId, StorageError> {
        let _guard = SAVE_LOCK.lock();

        let mut rows = self.load_rows()?;
        if rows
            .iter()
            .any(|row| same_serial(&row.serial_number, record.serial_number()))
        {
            return Err(StorageError::DuplicateSerial(
                record.serial_number().to_string(),
            ));
        }

        let id = RecordId::new();
        rows.push(PurchaseRow::from_record(&id, Utc::now(), record));
        write_json_file(&self.path, &rows)?;

        info!(
            "Saved purchase {} ({}) to {:?}",
            id,
            record.serial_number(),
            self.path
        );
        Ok(id)
    }

    fn find_by_serial(&self, serial_number: &str) -> Result<Option<StoredPurchase>, StorageError> {
        let row = self
            .load_rows()?
            .into_iter()
            .find(|row| same_serial(&row.serial_number, serial_number));

        match row {
            Some(row) => row.into_stored().map(Some),
            None => {
                debug!("No purchase with serial number {:?}", serial_number);
                Ok(None)
            }
        }
    }

    fn list(&self) -> Result<Vec<StoredPurchase>, StorageError> {
        self.load_rows()?
            .into_iter()
            .map(PurchaseRow::into_stored)
            .collect()
    }
}
