// Settings data models
use super::WarrantyPlan;
use crate::catalog::default_plans;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Plans offered at registration, installed into the catalog at startup.
    pub plans: Vec<WarrantyPlan>,
    pub currency_symbol: String,
    pub log_level: String,
    pub log_retention_days: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            plans: default_plans(),
            currency_symbol: String::from("$"),
            log_level: String::from("info"),
            log_retention_days: 7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "currency_symbol": "€" }"#).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.log_retention_days, 7);
        assert_eq!(settings.plans.len(), 3);
    }
}
