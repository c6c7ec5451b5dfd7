//! General constant enums used in the trading platform.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Exchange {
    // Chinese exchanges
    /// China Financial Futures Exchange
    Cffex,
    /// Shanghai Futures Exchange
    Shfe,
    /// Zhengzhou Commodity Exchange
    Czce,
    /// Dalian Commodity Exchange
    Dce,
    /// Shanghai International Energy Exchange
    Ine,
    /// Guangzhou Futures Exchange
    Gfex,
    /// Shanghai Stock Exchange
    Sse,
    /// Shenzhen Stock Exchange
    Szse,
    /// Beijing Stock Exchange
    Bse,

    // Global exchanges
    /// Chicago Mercantile Exchange
    Cme,
    /// Intercontinental Exchange
    Ice,
    /// Hong Kong Futures Exchange
    Hkfe,
    /// Binance Spot
    Binance,
    /// Binance USD-M Futures
    BinanceUsdm,
    /// Binance Coin-M Futures
    BinanceCoinm,

    // Special Function
    /// For local generated data
    Local,
    /// For those exchanges not supported yet
    Global,
}

impl Exchange {
    /// Get the exchange value string
    pub fn value(&self) -> &'static str {
        match self {
            Exchange::Cffex => "CFFEX",
            Exchange::Shfe => "SHFE",
            Exchange::Czce => "CZCE",
            Exchange::Dce => "DCE",
            Exchange::Ine => "INE",
            Exchange::Gfex => "GFEX",
            Exchange::Sse => "SSE",
            Exchange::Szse => "SZSE",
            Exchange::Bse => "BSE",
            Exchange::Cme => "CME",
            Exchange::Ice => "ICE",
            Exchange::Hkfe => "HKFE",
            Exchange::Binance => "BINANCE",
            Exchange::BinanceUsdm => "BINANCE_USDM",
            Exchange::BinanceCoinm => "BINANCE_COINM",
            Exchange::Local => "LOCAL",
            Exchange::Global => "GLOBAL",
        }
    }

    /// Parse an exchange from its value string
    pub fn from_value(value: &str) -> Option<Exchange> {
        let exchange = match value {
            "CFFEX" => Exchange::Cffex,
            "SHFE" => Exchange::Shfe,
            "CZCE" => Exchange::Czce,
            "DCE" => Exchange::Dce,
            "INE" => Exchange::Ine,
            "GFEX" => Exchange::Gfex,
            "SSE" => Exchange::Sse,
            "SZSE" => Exchange::Szse,
            "BSE" => Exchange::Bse,
            "CME" => Exchange::Cme,
            "ICE" => Exchange::Ice,
            "HKFE" => Exchange::Hkfe,
            "BINANCE" => Exchange::Binance,
            "BINANCE_USDM" => Exchange::BinanceUsdm,
            "BINANCE_COINM" => Exchange::BinanceCoinm,
            "LOCAL" => Exchange::Local,
            "GLOBAL" => Exchange::Global,
            _ => return None,
        };
        Some(exchange)
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Interval of bar data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    /// 1 minute
    Minute,
    /// 1 hour
    Hour,
    /// Daily
    Daily,
    /// Weekly
    Weekly,
    /// Tick data
    Tick,
}

impl Interval {
    /// Get interval value string
    pub fn value(&self) -> &'static str {
        match self {
            Interval::Minute => "1m",
            Interval::Hour => "1h",
            Interval::Daily => "d",
            Interval::Weekly => "w",
            Interval::Tick => "tick",
        }
    }

    /// Parse an interval from its value string
    pub fn from_value(value: &str) -> Option<Interval> {
        match value {
            "1m" => Some(Interval::Minute),
            "1h" => Some(Interval::Hour),
            "d" => Some(Interval::Daily),
            "w" => Some(Interval::Weekly),
            "tick" => Some(Interval::Tick),
            _ => None,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_value() {
        assert_eq!(Exchange::Binance.value(), "BINANCE");
        assert_eq!(Exchange::Sse.value(), "SSE");
        assert_eq!(format!("{}", Exchange::Cffex), "CFFEX");
    }

    #[test]
    fn test_exchange_from_value() {
        assert_eq!(Exchange::from_value("SHFE"), Some(Exchange::Shfe));
        assert_eq!(Exchange::from_value("BINANCE_USDM"), Some(Exchange::BinanceUsdm));
        assert_eq!(Exchange::from_value("NOPE"), None);
    }

    #[test]
    fn test_interval_value() {
        assert_eq!(Interval::Minute.value(), "1m");
        assert_eq!(Interval::Hour.value(), "1h");
        assert_eq!(Interval::from_value("1h"), Some(Interval::Hour));
        assert_eq!(Interval::from_value("15m"), None);
    }
}
