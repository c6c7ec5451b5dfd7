//! Trader module - market data objects and runtime plumbing.
//!
//! - **constant**: Exchange and Interval
//! - **object**: TickData and BarData
//! - **setting**: Global settings management
//! - **utility**: vt_symbol helpers, datetime alignment, temp paths
//! - **logger**: Logging setup

pub mod constant;
pub mod logger;
pub mod object;
pub mod setting;
pub mod utility;

// Re-exports for convenience
pub use constant::{Exchange, Interval};
pub use logger::{init_logger, level_from_int, level_to_string, CRITICAL, DEBUG, ERROR, INFO, WARNING};
pub use object::{BarData, TickData};
pub use setting::{SettingError, SettingValue, Settings, SETTINGS};
pub use utility::{
    extract_vt_symbol, floor_to_hour, floor_to_minute, generate_vt_symbol, get_file_path,
    get_folder_path, TEMP_DIR,
};
