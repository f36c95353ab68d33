use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use log::info;

/// Overrides the application data root when set.
pub const HOME_ENV_VAR: &str = "WARRANTY_TRACKER_HOME";

static APP_DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

pub fn get_app_data_dir() -> PathBuf {
    APP_DATA_DIR
        .get_or_init(|| {
            if let Some(home) = std::env::var_os(HOME_ENV_VAR).filter(|v| !v.is_empty()) {
                return PathBuf::from(home);
            }
            let base_dir = dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."));
            base_dir.join("WarrantyTracker")
        })
        .clone()
}

pub fn get_data_dir() -> PathBuf {
    get_app_data_dir().join("data")
}

pub fn get_logs_dir() -> PathBuf {
    get_app_data_dir().join("logs")
}

pub fn get_settings_json_path() -> PathBuf {
    get_data_dir().join("settings.json")
}

pub fn get_purchases_json_path() -> PathBuf {
    get_data_dir().join("purchases.json")
}

pub fn initialize_data_directories() -> std::io::Result<()> {
    let directories = [get_data_dir(), get_logs_dir()];

    for dir in &directories {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
            info!("Created directory: {:?}", dir);
        }
    }

    Ok(())
}
