//! General utility functions.

use chrono::{DateTime, Timelike, Utc};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::LazyLock;

use super::constant::Exchange;

/// Extract symbol and exchange from vt_symbol
pub fn extract_vt_symbol(vt_symbol: &str) -> Option<(String, Exchange)> {
    let (symbol, exchange_str) = vt_symbol.rsplit_once('.')?;
    let exchange = Exchange::from_value(exchange_str)?;
    Some((symbol.to_string(), exchange))
}

/// Generate vt_symbol from symbol and exchange
pub fn generate_vt_symbol(symbol: &str, exchange: Exchange) -> String {
    format!("{}.{}", symbol, exchange.value())
}

/// Round a datetime down to the start of its minute
pub fn floor_to_minute(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_second(0)
        .and_then(|d| d.with_nanosecond(0))
        .unwrap_or(dt)
}

/// Round a datetime down to the start of its hour
pub fn floor_to_hour(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_minute(0)
        .and_then(|d| d.with_second(0))
        .and_then(|d| d.with_nanosecond(0))
        .unwrap_or(dt)
}

/// Get trader directory
fn get_trader_dir(temp_name: &str) -> (PathBuf, PathBuf) {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let temp_path = cwd.join(temp_name);

    // If the temp folder exists in current working directory, use it
    if temp_path.exists() {
        return (cwd, temp_path);
    }

    // Otherwise use home path
    let home_path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let temp_path = home_path.join(temp_name);

    if !temp_path.exists() {
        let _ = fs::create_dir_all(&temp_path);
    }

    (home_path, temp_path)
}

/// Temp directory
pub static TEMP_DIR: LazyLock<PathBuf> = LazyLock::new(|| {
    let (_, temp_dir) = get_trader_dir(".rsportfolio");
    temp_dir
});

/// Get path for temp file with filename
pub fn get_file_path(filename: &str) -> PathBuf {
    TEMP_DIR.join(filename)
}

/// Get path for temp folder with folder name
pub fn get_folder_path(folder_name: &str) -> PathBuf {
    let folder_path = TEMP_DIR.join(folder_name);
    if !folder_path.exists() {
        let _ = fs::create_dir_all(&folder_path);
    }
    folder_path
}
