//! Errors raised when configuring portfolio bar generators.

use thiserror::Error;

use crate::trader::Interval;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BarGeneratorError {
    /// The window boundary test cannot be evaluated with a zero window.
    #[error("window size must be positive for {interval} bars, got {window}")]
    InvalidWindow { window: u32, interval: Interval },

    /// Only minute-multiple and hour-multiple windows are supported.
    #[error("unsupported window interval {0}, expected 1m or 1h")]
    UnsupportedInterval(Interval),

    #[error("invalid setting {key}: {reason}")]
    InvalidSetting { key: String, reason: String },
}

pub type Result<T> = std::result::Result<T, BarGeneratorError>;
