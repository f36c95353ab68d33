// Persisted shape of a purchase and its mapping to the domain record
use crate::models::{PurchaseRecord, WarrantyPlan};
use crate::registration::DATE_FORMAT;
use super::StorageError;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredPurchase {
    pub id: RecordId,
    pub created_at: DateTime<Utc>,
    pub record: PurchaseRecord,
}

/// One row of `purchases.json`. Columns are flat strings and numbers so the
/// file format does not follow changes to the domain types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRow {
    pub id: String,
    pub item_name: String,
    pub serial_number: String,
    pub purchase_date: String,
    pub purchase_price: String,
    #[serde(default)]
    pub plan_label: Option<String>,
    #[serde(default)]
    pub plan_duration_days: Option<u32>,
    #[serde(default)]
    pub warranty_expiration_date: Option<String>,
    pub warranty_fee: String,
    #[serde(default)]
    pub maintenance_notes: String,
    pub created_at: String,
}

impl PurchaseRow {
    pub fn from_record(id: &RecordId, created_at: DateTime<Utc>, record: &PurchaseRecord) -> Self {
        let plan = record.selected_plan();
        Self {
            id: id.to_string(),
            item_name: record.item_name().to_string(),
            serial_number: record.serial_number().to_string(),
            purchase_date: record.purchase_date().format(DATE_FORMAT).to_string(),
            purchase_price: record.purchase_price().to_string(),
            plan_label: plan.map(|p| p.label.clone()),
            plan_duration_days: plan.map(|p| p.duration_days),
            warranty_expiration_date: record
                .warranty_expiration_date()
                .map(|d| d.format(DATE_FORMAT).to_string()),
            warranty_fee: record.warranty_fee().to_string(),
            maintenance_notes: record.maintenance_notes().to_string(),
            created_at: created_at.to_rfc3339(),
        }
    }

    pub fn into_stored(self) -> Result<StoredPurchase, StorageError> {
        let purchase_date = self.parse_date(&self.purchase_date)?;
        let purchase_price = self.parse_decimal(&self.purchase_price)?;
        let warranty_fee = self.parse_decimal(&self.warranty_fee)?;
        let warranty_expiration_date = match &self.warranty_expiration_date {
            Some(text) => Some(self.parse_date(text)?),
            None => None,
        };
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| self.corrupt(format!("created_at: {}", e)))?
            .with_timezone(&Utc);

        let selected_plan = match (&self.plan_label, self.plan_duration_days) {
            (Some(label), Some(days)) => Some(WarrantyPlan::new(days, warranty_fee, label.clone())),
            (None, None) => None,
            _ => return Err(self.corrupt("plan columns are incomplete".to_string())),
        };

        let record = PurchaseRecord::from_parts(
            self.item_name,
            self.serial_number,
            purchase_date,
            purchase_price,
            selected_plan,
            warranty_expiration_date,
            warranty_fee,
            self.maintenance_notes,
        );

        Ok(StoredPurchase {
            id: RecordId(self.id),
            created_at,
            record,
        })
    }

    fn parse_date(&self, text: &str) -> Result<NaiveDate, StorageError> {
        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map_err(|e| self.corrupt(format!("date {:?}: {}", text, e)))
    }

    fn parse_decimal(&self, text: &str) -> Result<Decimal, StorageError> {
        Decimal::from_str(text).map_err(|e| self.corrupt(format!("amount {:?}: {}", text, e)))
    }

    fn corrupt(&self, reason: String) -> StorageError {
        StorageError::CorruptRow {
            id: self.id.clone(),
            reason,
        }
    }
}
