//! Shared types for portfolio bar generation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::trader::{BarData, Interval, Settings};
use super::error::{BarGeneratorError, Result};

/// Bars of one interval across a portfolio, keyed by vt_symbol.
///
/// Sorted so that iteration order (and anything derived from it) is the same
/// for every generator fed the same data.
pub type BarSet = BTreeMap<String, BarData>;

/// Window configuration of a [`WindowBarGenerator`](super::WindowBarGenerator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSetting {
    /// Number of minutes (or hours) folded into one window bar
    pub window: u32,
    /// Granularity of the window, `Interval::Minute` or `Interval::Hour`
    pub interval: Interval,
}

impl WindowSetting {
    pub fn new(window: u32, interval: Interval) -> Self {
        Self { window, interval }
    }

    /// Check the setting can drive a window generator.
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.interval, Interval::Minute | Interval::Hour) {
            return Err(BarGeneratorError::UnsupportedInterval(self.interval));
        }

        if self.window == 0 {
            return Err(BarGeneratorError::InvalidWindow {
                window: self.window,
                interval: self.interval,
            });
        }

        Ok(())
    }

    /// Read `bar.window` and `bar.interval` from settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let window = settings.get_int("bar.window").ok_or_else(|| {
            BarGeneratorError::InvalidSetting {
                key: "bar.window".to_string(),
                reason: "missing or not an integer".to_string(),
            }
        })?;
        let window = u32::try_from(window).map_err(|_| BarGeneratorError::InvalidSetting {
            key: "bar.window".to_string(),
            reason: format!("{} is out of range", window),
        })?;

        let interval_str = settings.get_string("bar.interval").ok_or_else(|| {
            BarGeneratorError::InvalidSetting {
                key: "bar.interval".to_string(),
                reason: "missing or not a string".to_string(),
            }
        })?;
        let interval = Interval::from_value(&interval_str).ok_or_else(|| {
            BarGeneratorError::InvalidSetting {
                key: "bar.interval".to_string(),
                reason: format!("unknown interval {:?}", interval_str),
            }
        })?;

        let setting = Self::new(window, interval);
        setting.validate()?;
        Ok(setting)
    }
}

impl Default for WindowSetting {
    fn default() -> Self {
        Self::new(1, Interval::Minute)
    }
}
