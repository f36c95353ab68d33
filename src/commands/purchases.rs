// Purchase command handlers
use super::CommandError;
use crate::models::{PurchaseRecord, RawInput};
use crate::registration::build_record;
use crate::storage::{RecordId, RecordStore, StoredPurchase};
use log::{debug, info, warn};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub id: RecordId,
    pub record: PurchaseRecord,
    pub total_cost: Decimal,
}

/// Validates the form snapshot, saves it and reads it back.
pub fn register_purchase(
    store: &dyn RecordStore,
    input: &RawInput,
) -> Result<Registration, CommandError> {
    let record = build_record(input).map_err(|e| {
        debug!("Rejected registration on {}: {}", e.field(), e);
        e
    })?;

    let id = store.save(&record)?;

    if !verify_purchase(store, record.serial_number())? {
        warn!(
            "Purchase {} was saved but could not be read back by serial number",
            id
        );
    }

    let total_cost = record.total_cost();
    Ok(Registration {
        id,
        record,
        total_cost,
    })
}

/// Checks that a purchase with `serial_number` can be found in the store.
pub fn verify_purchase(store: &dyn RecordStore, serial_number: &str) -> Result<bool, CommandError> {
    match store.find_by_serial(serial_number)? {
        Some(found) => {
            info!(
                "Found item in store: {} (serial {}, purchased {})",
                found.record.item_name(),
                found.record.serial_number(),
                found.record.purchase_date()
            );
            Ok(true)
        }
        None => {
            warn!("Item {:?} not found in store", serial_number);
            Ok(false)
        }
    }
}

pub fn list_purchases(store: &dyn RecordStore) -> Result<Vec<StoredPurchase>, CommandError> {
    Ok(store.list()?)
}

pub fn find_purchase(
    store: &dyn RecordStore,
    serial_number: &str,
) -> Result<Option<StoredPurchase>, CommandError> {
    Ok(store.find_by_serial(serial_number)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::registration::{Field, ValidationError};
    use crate::storage::{MemoryRecordStore, StorageError};

    fn laptop_input() -> RawInput {
        RawInput {
            item_name: "Laptop".to_string(),
            serial_number: "SN123".to_string(),
            purchase_date_text: "2024-06-01".to_string(),
            purchase_price_text: "999.99".to_string(),
            selected_plan: catalog::find_plan("60").cloned(),
            ..RawInput::default()
        }
    }

    #[test]
    fn test_register_saves_and_totals() {
        let store = MemoryRecordStore::new();
        let registration = register_purchase(&store, &laptop_input()).unwrap();

        assert_eq!(registration.total_cost, Decimal::new(101498, 2));
        assert_eq!(
            registration.record.warranty_expiration_date().map(|d| d.to_string()),
            Some("2024-07-31".to_string())
        );

        let stored = find_purchase(&store, "SN123").unwrap().unwrap();
        assert_eq!(stored.id, registration.id);
        assert!(verify_purchase(&store, "SN123").unwrap());
    }

    #[test]
    fn test_invalid_input_is_not_saved() {
        let store = MemoryRecordStore::new();
        let input = RawInput {
            item_name: " ".to_string(),
            ..laptop_input()
        };

        let err = register_purchase(&store, &input).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Validation(ValidationError::MissingField(Field::ItemName))
        ));
        assert!(list_purchases(&store).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_registration_surfaces_storage_error() {
        let store = MemoryRecordStore::new();
        register_purchase(&store, &laptop_input()).unwrap();

        let err = register_purchase(&store, &laptop_input()).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Storage(StorageError::DuplicateSerial(_))
        ));
    }

    #[test]
    fn test_verify_unknown_serial() {
        let store = MemoryRecordStore::new();
        assert!(!verify_purchase(&store, "nope").unwrap());
    }
}
