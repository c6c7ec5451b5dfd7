//! Logging setup for the bar generation runtime.

use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::setting::SETTINGS;
use super::utility::get_folder_path;

/// Log level constants (compatible with Python logging module)
pub const DEBUG: i32 = 10;
pub const INFO: i32 = 20;
pub const WARNING: i32 = 30;
pub const ERROR: i32 = 40;
pub const CRITICAL: i32 = 50;

/// Convert integer log level to tracing Level
pub fn level_from_int(level: i32) -> Level {
    match level {
        i32::MIN..=10 => Level::DEBUG,
        11..=20 => Level::INFO,
        21..=30 => Level::WARN,
        _ => Level::ERROR,
    }
}

/// Convert integer log level to string
pub fn level_to_string(level: i32) -> &'static str {
    match level {
        i32::MIN..=10 => "DEBUG",
        11..=20 => "INFO",
        21..=30 => "WARNING",
        31..=40 => "ERROR",
        _ => "CRITICAL",
    }
}

/// Initialize the global tracing subscriber from `SETTINGS`.
///
/// Does nothing when `log.active` is false. Calling it twice is harmless:
/// the second installation attempt is ignored.
pub fn init_logger() {
    if !SETTINGS.get_bool("log.active").unwrap_or(true) {
        return;
    }

    let log_level = SETTINGS.get_int("log.level").unwrap_or(INFO as i64) as i32;
    let log_console = SETTINGS.get_bool("log.console").unwrap_or(true);
    let log_file = SETTINGS.get_bool("log.file").unwrap_or(false);

    let level = level_from_int(log_level);
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let console_layer = log_console.then(|| {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_ansi(true)
    });

    let file_layer = if log_file {
        match open_log_file() {
            Ok(file) => Some(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false)),
            Err(e) => {
                eprintln!("failed to open log file: {}", e);
                None
            }
        }
    } else {
        None
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

fn open_log_file() -> std::io::Result<File> {
    let log_path = get_log_file_path();
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(&log_path)
}

/// Get the log file path for today
fn get_log_file_path() -> PathBuf {
    let log_folder = get_folder_path("log");
    let today = Local::now().format("%Y%m%d").to_string();
    log_folder.join(format!("pbg_{}.log", today))
}
