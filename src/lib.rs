pub mod catalog;
pub mod cli;
pub mod commands;
pub mod file_manager;
pub mod logging;
pub mod models;
pub mod registration;
pub mod storage;
pub mod utils;

use catalog::install_catalog;
use cli::CommandLine;
use commands::settings::get_settings;
use file_manager::initialize_json_file;
use log::{info, warn};
use logging::{cleanup_old_logs, init_logging};
use models::Settings;
use storage::{JsonRecordStore, PurchaseRow, StorageError};
use utils::{
    get_app_data_dir, get_purchases_json_path, get_settings_json_path,
    initialize_data_directories,
};

/// Creates the data directories and seeds missing JSON files, then loads
/// settings. A broken settings file falls back to defaults.
pub fn initialize_app_data() -> Result<Settings, StorageError> {
    initialize_data_directories().map_err(|e| StorageError::io(&get_app_data_dir(), e))?;

    initialize_json_file(&get_settings_json_path(), &Settings::default())?;
    initialize_json_file(&get_purchases_json_path(), &Vec::<PurchaseRow>::new())?;

    Ok(get_settings().unwrap_or_else(|e| {
        eprintln!("Failed to load settings, using defaults: {}", e);
        Settings::default()
    }))
}

pub fn run() -> anyhow::Result<()> {
    let command_line = CommandLine::parse_args();

    let settings = initialize_app_data()?;

    match init_logging(&settings.log_level) {
        Ok(log_path) => info!("Logging to {:?}", log_path),
        Err(e) => eprintln!("Failed to open log file: {}", e),
    }
    cleanup_old_logs(settings.log_retention_days);
    info!("Data directory: {:?}", get_app_data_dir());

    if let Err(e) = install_catalog(settings.plans.clone()) {
        warn!("Ignoring configured warranty plans: {}", e);
    }

    let store = JsonRecordStore::new(get_purchases_json_path());
    cli::dispatch(command_line.command, &store, &settings)
}
