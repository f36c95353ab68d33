//! Purchase persistence
//! Records come in already validated; stores only assign ids and enforce
//! serial number uniqueness.

pub mod error;
pub mod json_store;
pub mod memory_store;
pub mod schema;

pub use error::StorageError;
pub use json_store::JsonRecordStore;
pub use memory_store::MemoryRecordStore;
pub use schema::{PurchaseRow, RecordId, StoredPurchase};

use crate::models::PurchaseRecord;

pub trait RecordStore: Send + Sync {
    /// Persists `record` and returns the id assigned to it.
    fn save(&self, record: &PurchaseRecord) -> Result<RecordId, StorageError>;

    fn find_by_serial(&self, serial_number: &str) -> Result<Option<StoredPurchase>, StorageError>;

    /// All stored purchases in the order they were saved.
    fn list(&self) -> Result<Vec<StoredPurchase>, StorageError>;
}

/// Serial numbers compare without surrounding whitespace and ignoring ASCII case.
pub(crate) fn same_serial(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
