// In-process purchase store
use super::schema::{RecordId, StoredPurchase};
use super::{same_serial, RecordStore, StorageError};
use crate::models::PurchaseRecord;
use chrono::Utc;
use parking_lot::RwLock;

#[derive(Default)]
pub struct MemoryRecordStore {
    purchases: RwLock<Vec<StoredPurchase>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryRecordStore {
    fn save(&self, record: &PurchaseRecord) -> Result<RecordId, StorageError> {
        let mut purchases = self.purchases.write();

        if purchases
            .iter()
            .any(|p| same_serial(p.record.serial_number(), record.serial_number()))
        {
            return Err(StorageError::DuplicateSerial(
                record.serial_number().to_string(),
            ));
        }

        let id = RecordId::new();
        purchases.push(StoredPurchase {
            id: id.clone(),
            created_at: Utc::now(),
            record: record.clone(),
        });
        Ok(id)
    }

    fn find_by_serial(&self, serial_number: &str) -> Result<Option<StoredPurchase>, StorageError> {
        Ok(self
            .purchases
            .read()
            .iter()
            .find(|p| same_serial(p.record.serial_number(), serial_number))
            .cloned())
    }

    fn list(&self) -> Result<Vec<StoredPurchase>, StorageError> {
        Ok(self.purchases.read().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawInput;
    use crate::registration::build_record_as_of;
    use chrono::NaiveDate;

    fn record(serial: &str) -> PurchaseRecord {
        let input = RawInput {
            item_name: "Blender".to_string(),
            serial_number: serial.to_string(),
            purchase_date_text: "2024-02-01".to_string(),
            purchase_price_text: "59.90".to_string(),
            warranty_expiration_date_text: "2025-02-01".to_string(),
            ..RawInput::default()
        };
        build_record_as_of(&input, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()).unwrap()
    }

    #[test]
    fn test_ids_are_unique() {
        let store = MemoryRecordStore::new();
        let a = store.save(&record("B-1")).unwrap();
        let b = store.save(&record("B-2")).unwrap();
        assert_ne!(a, b);
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn test_find_ignores_case_and_padding() {
        let store = MemoryRecordStore::new();
        store.save(&record("b-7")).unwrap();
        assert!(store.find_by_serial(" B-7 ").unwrap().is_some());
        assert!(matches!(
            store.save(&record("B-7")),
            Err(StorageError::DuplicateSerial(_))
        ));
    }
}
