// Purchase data models
use super::WarrantyPlan;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Snapshot of the registration form as the user left it. Nothing here is
/// trusted until it has been through `registration::build_record`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    pub item_name: String,
    pub serial_number: String,
    pub purchase_date_text: String,
    pub purchase_price_text: String,
    /// Only consulted when no plan is selected.
    pub warranty_expiration_date_text: String,
    pub selected_plan: Option<WarrantyPlan>,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarrantyStatus {
    Active,
    Expired,
    None,
}

impl std::fmt::Display for WarrantyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Expired => write!(f, "expired"),
            Self::None => write!(f, "none"),
        }
    }
}

/// A validated purchase with its warranty terms. Built once by the
/// registration module and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseRecord {
    item_name: String,
    serial_number: String,
    purchase_date: NaiveDate,
    purchase_price: Decimal,
    selected_plan: Option<WarrantyPlan>,
    warranty_expiration_date: Option<NaiveDate>,
    warranty_fee: Decimal,
    maintenance_notes: String,
}

impl PurchaseRecord {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        item_name: String,
        serial_number: String,
        purchase_date: NaiveDate,
        purchase_price: Decimal,
        selected_plan: Option<WarrantyPlan>,
        warranty_expiration_date: Option<NaiveDate>,
        warranty_fee: Decimal,
        maintenance_notes: String,
    ) -> Self {
        Self {
            item_name,
            serial_number,
            purchase_date,
            purchase_price,
            selected_plan,
            warranty_expiration_date,
            warranty_fee,
            maintenance_notes,
        }
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    pub fn purchase_price(&self) -> Decimal {
        self.purchase_price
    }

    pub fn selected_plan(&self) -> Option<&WarrantyPlan> {
        self.selected_plan.as_ref()
    }

    pub fn warranty_expiration_date(&self) -> Option<NaiveDate> {
        self.warranty_expiration_date
    }

    pub fn warranty_fee(&self) -> Decimal {
        self.warranty_fee
    }

    pub fn maintenance_notes(&self) -> &str {
        &self.maintenance_notes
    }

    /// Purchase price plus warranty fee.
    pub fn total_cost(&self) -> Decimal {
        self.purchase_price + self.warranty_fee
    }

    /// Coverage runs through the expiration date inclusive.
    pub fn warranty_status(&self, on: NaiveDate) -> WarrantyStatus {
        match self.warranty_expiration_date {
            Some(expires) if on <= expires => WarrantyStatus::Active,
            Some(_) => WarrantyStatus::Expired,
            None => WarrantyStatus::None,
        }
    }

    /// Days of coverage left on `on`, or `None` when there is no expiration
    /// date or it has already passed.
    pub fn days_remaining(&self, on: NaiveDate) -> Option<i64> {
        let expires = self.warranty_expiration_date?;
        let days = (expires - on).num_days();
        (days >= 0).then_some(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample(expires: Option<NaiveDate>, fee: Decimal) -> PurchaseRecord {
        PurchaseRecord::from_parts(
            "Laptop".to_string(),
            "SN123".to_string(),
            date(2024, 6, 1),
            Decimal::new(99999, 2),
            None,
            expires,
            fee,
            String::new(),
        )
    }

    #[test]
    fn test_total_cost_includes_fee() {
        let record = sample(Some(date(2024, 7, 31)), Decimal::new(1499, 2));
        assert_eq!(record.total_cost(), Decimal::new(101498, 2));
    }

    #[test]
    fn test_warranty_status_boundaries() {
        let record = sample(Some(date(2024, 7, 31)), Decimal::ZERO);
        assert_eq!(record.warranty_status(date(2024, 7, 30)), WarrantyStatus::Active);
        assert_eq!(record.warranty_status(date(2024, 7, 31)), WarrantyStatus::Active);
        assert_eq!(record.warranty_status(date(2024, 8, 1)), WarrantyStatus::Expired);

        let uncovered = sample(None, Decimal::ZERO);
        assert_eq!(uncovered.warranty_status(date(2024, 7, 1)), WarrantyStatus::None);
    }

    #[test]
    fn test_days_remaining() {
        let record = sample(Some(date(2024, 7, 31)), Decimal::ZERO);
        assert_eq!(record.days_remaining(date(2024, 7, 1)), Some(30));
        assert_eq!(record.days_remaining(date(2024, 7, 31)), Some(0));
        assert_eq!(record.days_remaining(date(2024, 8, 1)), None);
    }
}
