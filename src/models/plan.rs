// Warranty plan data model
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named warranty offering with a fixed duration and a flat fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarrantyPlan {
    pub duration_days: u32,
    pub fee: Decimal,
    pub label: String,
}

impl WarrantyPlan {
    pub fn new(duration_days: u32, fee: Decimal, label: impl Into<String>) -> Self {
        Self {
            duration_days,
            fee,
            label: label.into(),
        }
    }
}

impl fmt::Display for WarrantyPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (${:.2})", self.label, self.fee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_picker_text() {
        let plan = WarrantyPlan::new(30, Decimal::new(799, 2), "30 Day Warranty");
        assert_eq!(plan.to_string(), "30 Day Warranty ($7.99)");

        let whole = WarrantyPlan::new(365, Decimal::new(50, 0), "1 Year Warranty");
        assert_eq!(whole.to_string(), "1 Year Warranty ($50.00)");
    }
}
