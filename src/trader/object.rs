//! Basic data structures used for bar generation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::constant::{Exchange, Interval};
use super::utility::generate_vt_symbol;

/// Tick data contains information about:
/// - last trade in market
/// - intraday cumulative statistics (volume, turnover, open interest)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickData {
    pub gateway_name: String,
    pub symbol: String,
    pub exchange: Exchange,
    pub datetime: DateTime<Utc>,

    pub name: String,
    /// Cumulative traded volume of the session
    pub volume: f64,
    /// Cumulative turnover of the session
    pub turnover: f64,
    pub open_interest: f64,
    pub last_price: f64,
    pub last_volume: f64,

    pub localtime: Option<DateTime<Utc>>,

    #[serde(skip)]
    pub extra: Option<HashMap<String, String>>,
}

impl TickData {
    /// Create a new TickData
    pub fn new(
        gateway_name: String,
        symbol: String,
        exchange: Exchange,
        datetime: DateTime<Utc>,
    ) -> Self {
        Self {
            gateway_name,
            symbol,
            exchange,
            datetime,
            name: String::new(),
            volume: 0.0,
            turnover: 0.0,
            open_interest: 0.0,
            last_price: 0.0,
            last_volume: 0.0,
            localtime: None,
            extra: None,
        }
    }

    /// Get vt_symbol (symbol.exchange)
    pub fn vt_symbol(&self) -> String {
        generate_vt_symbol(&self.symbol, self.exchange)
    }

    /// Whether the tick carries a usable trade price.
    pub fn has_trade(&self) -> bool {
        self.last_price > 0.0
    }
}

/// Candlestick bar data of a certain trading period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarData {
    pub gateway_name: String,
    pub symbol: String,
    pub exchange: Exchange,
    pub datetime: DateTime<Utc>,

    pub interval: Option<Interval>,
    pub volume: f64,
    pub turnover: f64,
    pub open_interest: f64,
    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,

    #[serde(skip)]
    pub extra: Option<HashMap<String, String>>,
}

impl BarData {
    /// Create a new BarData
    pub fn new(
        gateway_name: String,
        symbol: String,
        exchange: Exchange,
        datetime: DateTime<Utc>,
    ) -> Self {
        Self {
            gateway_name,
            symbol,
            exchange,
            datetime,
            interval: None,
            volume: 0.0,
            turnover: 0.0,
            open_interest: 0.0,
            open_price: 0.0,
            high_price: 0.0,
            low_price: 0.0,
            close_price: 0.0,
            extra: None,
        }
    }

    /// Get vt_symbol (symbol.exchange)
    pub fn vt_symbol(&self) -> String {
        generate_vt_symbol(&self.symbol, self.exchange)
    }
}
