//! Portfolio Strategy - portfolio bar generation written in Rust
//!
//! This crate turns asynchronous tick streams of many instruments into bar
//! sets that roll over for the whole portfolio at once:
//!
//! - Tick aggregation into synchronized 1-minute bars
//! - Re-aggregation into N-minute, hourly and N-hour windows
//! - Settings and logging shared with the rest of the trading platform
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use portfolio_strategy::{BarSet, Exchange, PortfolioBarGenerator, TickData};
//!
//! let mut pbg = PortfolioBarGenerator::new(|bars: BarSet| {
//!     assert_eq!(bars.len(), 1);
//! });
//!
//! for (second, price) in [(5, 3500.0), (40, 3502.0), (62, 3499.0)] {
//!     let datetime = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap()
//!         + chrono::Duration::seconds(second);
//!     let mut tick = TickData::new("CTP".to_string(), "rb2410".to_string(), Exchange::Shfe, datetime);
//!     tick.last_price = price;
//!     pbg.update_tick(tick);
//! }
//! ```

pub mod portfolio;
pub mod trader;

// Re-export commonly used types
pub use portfolio::{BarGeneratorError, BarSet, PortfolioBarGenerator, WindowBarGenerator, WindowSetting};
pub use trader::{
    // Constants
    Exchange, Interval,
    // Data objects
    BarData, TickData,
    // Runtime
    init_logger, Settings, SETTINGS,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
