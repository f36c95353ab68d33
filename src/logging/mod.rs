//! Logging utilities for Warranty Tracker
//! Routes `log` records to stderr and a daily log file, and prunes old logs.

use crate::utils::get_logs_dir;
use chrono::Local;
use log::{debug, info};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::SystemTime;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Installs the global logger. `RUST_LOG` takes precedence over `level`.
/// Returns the path of today's log file.
pub fn init_logging(level: &str) -> std::io::Result<PathBuf> {
    let logs_dir = get_logs_dir();
    fs::create_dir_all(&logs_dir)?;

    let log_path = logs_dir.join(format!(
        "warranty-tracker-{}.log",
        Local::now().format("%Y-%m-%d")
    ));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr.and(Mutex::new(file)))
        .with_ansi(false)
        .with_target(false)
        .try_init();

    if installed.is_err() {
        debug!("Logger already installed, keeping the existing one");
    }

    Ok(log_path)
}

pub fn cleanup_old_logs(retention_days: u64) {
    cleanup_logs_in(&get_logs_dir(), retention_days, SystemTime::now());
}

/// Removes `.log` files in `logs_dir` whose age in whole days exceeds
/// `retention_days`. A file touched today is never removed, so a zero
/// retention still keeps the current log. Returns how many were removed.
pub fn cleanup_logs_in(logs_dir: &Path, retention_days: u64, now: SystemTime) -> usize {
    if !logs_dir.exists() {
        return 0;
    }

    let mut removed = 0;

    if let Ok(entries) = fs::read_dir(logs_dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "log") {
                if let Ok(meta) = fs::metadata(&path) {
                    if let Ok(modified) = meta.modified() {
                        if let Ok(age) = now.duration_since(modified) {
                            let age_days = age.as_secs() / SECS_PER_DAY;
                            if age_days > retention_days && fs::remove_file(&path).is_ok() {
                                info!("Cleaned up old log: {:?}", path.file_name());
                                removed += 1;
                            }
                        }
                    }
                }
            }
        }
    }

    removed
}
