// Settings command handlers backed by settings.json
use super::CommandError;
use crate::catalog::validate_plans;
use crate::file_manager::{read_json_file_or_default, write_json_file};
use crate::models::{Settings, WarrantyPlan};
use crate::utils::get_settings_json_path;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Ten years of logs.
pub const MAX_LOG_RETENTION_DAYS: u64 = 3650;

#[derive(Debug, Default, Deserialize)]
pub struct UpdateSettingsParams {
    pub plans: Option<Vec<WarrantyPlan>>,
    pub currency_symbol: Option<String>,
    pub log_level: Option<String>,
    pub log_retention_days: Option<u64>,
}

/// Get current settings, falling back to defaults when the file is missing
pub fn get_settings() -> Result<Settings, CommandError> {
    load_settings(&get_settings_json_path())
}

pub fn update_settings(params: UpdateSettingsParams) -> Result<Settings, CommandError> {
    update_settings_at(&get_settings_json_path(), params)
}

pub fn load_settings(path: &Path) -> Result<Settings, CommandError> {
    Ok(read_json_file_or_default(path)?)
}

/// Applies a partial update. Plan changes take effect on the next start.
pub fn update_settings_at(
    path: &Path,
    params: UpdateSettingsParams,
) -> Result<Settings, CommandError> {
    let mut current_settings = load_settings(path)?;

    if let Some(plans) = params.plans {
        validate_plans(&plans).map_err(CommandError::InvalidPlans)?;
        current_settings.plans = plans;
    }
    if let Some(currency_symbol) = params.currency_symbol {
        current_settings.currency_symbol = currency_symbol;
    }
    if let Some(log_level) = params.log_level {
        if !log_level.trim().is_empty() {
            current_settings.log_level = log_level;
        }
    }
    if let Some(log_retention_days) = params.log_retention_days {
        if log_retention_days > MAX_LOG_RETENTION_DAYS {
            return Err(CommandError::InvalidSetting(format!(
                "log retention must be at most {} days, got {}",
                MAX_LOG_RETENTION_DAYS, log_retention_days
            )));
        }
        current_settings.log_retention_days = log_retention_days;
    }

    write_json_file(path, &current_settings)?;
    debug!("Settings written to {:?}", path);

    Ok(current_settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let updated = update_settings_at(
            &path,
            UpdateSettingsParams {
                currency_symbol: Some("€".to_string()),
                ..UpdateSettingsParams::default()
            },
        )
        .unwrap();
        assert_eq!(updated.currency_symbol, "€");
        assert_eq!(updated.log_retention_days, 7);

        let updated = update_settings_at(
            &path,
            UpdateSettingsParams {
                log_retention_days: Some(30),
                ..UpdateSettingsParams::default()
            },
        )
        .unwrap();
        assert_eq!(updated.currency_symbol, "€");
        assert_eq!(load_settings(&path).unwrap().log_retention_days, 30);
    }

    #[test]
    fn test_invalid_plans_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let result = update_settings_at(
            &path,
            UpdateSettingsParams {
                plans: Some(vec![WarrantyPlan::new(0, Decimal::ZERO, "Broken")]),
                ..UpdateSettingsParams::default()
            },
        );
        assert!(matches!(result, Err(CommandError::InvalidPlans(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_oversized_log_retention_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let result = update_settings_at(
            &path,
            UpdateSettingsParams {
                log_retention_days: Some(u64::MAX / 86_400 + 1),
                ..UpdateSettingsParams::default()
            },
        );
        assert!(matches!(result, Err(CommandError::InvalidSetting(_))));
        assert!(!path.exists());

        let updated = update_settings_at(
            &path,
            UpdateSettingsParams {
                log_retention_days: Some(MAX_LOG_RETENTION_DAYS),
                ..UpdateSettingsParams::default()
            },
        )
        .unwrap();
        assert_eq!(updated.log_retention_days, MAX_LOG_RETENTION_DAYS);
    }
}
