// Atomic JSON file operations

use crate::storage::StorageError;
use log::debug;
use parking_lot::Mutex;
use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

lazy_static::lazy_static! {
    static ref FILE_LOCK: Mutex<()> = Mutex::new(());
}

pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let _lock = FILE_LOCK.lock();

    let mut file = File::open(path).map_err(|e| StorageError::io(path, e))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| StorageError::io(path, e))?;

    serde_json::from_str(&contents).map_err(|e| StorageError::serialization(path, e))
}

/// Writes JSON atomically using write-to-temp-then-rename
pub fn write_json_file<T: Serialize>(path: &Path, data: &T) -> Result<(), StorageError> {
    let _lock = FILE_LOCK.lock();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
    }

    let json_string =
        serde_json::to_string_pretty(data).map_err(|e| StorageError::serialization(path, e))?;

    let temp_path = path.with_extension("tmp");

    let mut temp_file = File::create(&temp_path).map_err(|e| StorageError::io(&temp_path, e))?;

    temp_file
        .write_all(json_string.as_bytes())
        .map_err(|e| StorageError::io(&temp_path, e))?;

    temp_file
        .sync_all()
        .map_err(|e| StorageError::io(&temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| StorageError::io(path, e))?;

    Ok(())
}

pub fn initialize_json_file<T: Serialize>(path: &Path, default: &T) -> Result<(), StorageError> {
    if !path.exists() {
        debug!("Initializing JSON file: {:?}", path);
        write_json_file(path, default)?;
    }
    Ok(())
}

pub fn read_json_file_or_default<T: DeserializeOwned + Default>(
    path: &Path,
) -> Result<T, StorageError> {
    if path.exists() {
        read_json_file(path)
    } else {
        Ok(T::default())
    }
}
