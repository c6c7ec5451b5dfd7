//! Window bar generator for folding 1-minute bar sets into coarser windows.
//!
//! Two modes, fixed at construction:
//!
//! - **Minute** windows of N minutes. The window closes after the bar whose
//!   minute satisfies `(minute + 1) % N == 0`.
//! - **Hour** windows. Minute bars are first folded into hour bars, which are
//!   finished either by the minute-59 bar or by the first bar of a later
//!   hour. Finished hour bars are emitted as-is for `N == 1`, otherwise
//!   folded into N-hour windows counted by hand-offs.

use chrono::{DateTime, Timelike, Utc};
use tracing::{debug, info, warn};

use crate::trader::{floor_to_hour, floor_to_minute, BarData, Interval};
use super::base::{BarSet, WindowSetting};
use super::error::Result;

/// Aggregates synchronized minute bar sets into N-minute or N-hour bar sets.
pub struct WindowBarGenerator<W>
where
    W: FnMut(BarSet),
{
    window: u32,
    interval: Interval,
    on_window_bars: W,

    window_bars: BarSet,

    hour_bars: BarSet,
    finished_hour_bars: BarSet,
    interval_count: u32,
}

impl<W> WindowBarGenerator<W>
where
    W: FnMut(BarSet),
{
    /// Create a new generator.
    ///
    /// Fails when `window` is zero or `interval` is neither minute nor hour.
    pub fn new(window: u32, interval: Interval, on_window_bars: W) -> Result<Self> {
        Self::from_setting(WindowSetting::new(window, interval), on_window_bars)
    }

    /// Create a new generator from a window setting
    pub fn from_setting(setting: WindowSetting, on_window_bars: W) -> Result<Self> {
        setting.validate()?;
        info!(window = setting.window, interval = %setting.interval, "window bar generator created");

        Ok(Self {
            window: setting.window,
            interval: setting.interval,
            on_window_bars,
            window_bars: BarSet::new(),
            hour_bars: BarSet::new(),
            finished_hour_bars: BarSet::new(),
            interval_count: 0,
        })
    }

    /// Update one synchronized set of 1-minute bars
    pub fn update_bars(&mut self, bars: &BarSet) {
        match self.interval {
            Interval::Minute => self.update_bar_minute_window(bars),
            _ => self.update_bar_hour_window(bars),
        }
    }

    pub fn window(&self) -> u32 {
        self.window
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Window bars in progress
    pub fn window_bars(&self) -> &BarSet {
        &self.window_bars
    }

    /// Hour bars in progress (hour windows only)
    pub fn hour_bars(&self) -> &BarSet {
        &self.hour_bars
    }

    /// Finished hours folded into the current N-hour window
    pub fn interval_count(&self) -> u32 {
        self.interval_count
    }

    fn update_bar_minute_window(&mut self, bars: &BarSet) {
        // All bars of a set share one minute; the last one decides the boundary
        let Some(last_bar) = bars.values().next_back() else {
            return;
        };

        for (vt_symbol, bar) in bars {
            let window_bar = self
                .window_bars
                .entry(vt_symbol.clone())
                .and_modify(|window_bar| update_range(window_bar, bar))
                .or_insert_with(|| {
                    new_window_bar(bar, floor_to_minute(bar.datetime), Interval::Minute)
                });
            update_running(window_bar, bar);
        }

        if (last_bar.datetime.minute() + 1) % self.window == 0 {
            let window_bars = std::mem::take(&mut self.window_bars);
            self.emit(window_bars);
        }
    }

    fn update_bar_hour_window(&mut self, bars: &BarSet) {
        for (vt_symbol, bar) in bars {
            let Some(hour_bar) = self.hour_bars.get_mut(vt_symbol) else {
                self.hour_bars.insert(vt_symbol.clone(), new_hour_bar(bar));
                continue;
            };

            if bar.datetime.minute() == 59 {
                update_range(hour_bar, bar);
                update_running(hour_bar, bar);

                if let Some(finished) = self.hour_bars.remove(vt_symbol) {
                    self.finished_hour_bars.insert(vt_symbol.clone(), finished);
                }
            } else if bar.datetime.hour() != hour_bar.datetime.hour() {
                let finished = std::mem::replace(hour_bar, new_hour_bar(bar));
                warn!(
                    vt_symbol = %vt_symbol,
                    datetime = %finished.datetime,
                    "hour bar finished without its minute 59 bar"
                );
                self.finished_hour_bars.insert(vt_symbol.clone(), finished);
            } else {
                update_range(hour_bar, bar);
                update_running(hour_bar, bar);
            }
        }

        if !self.finished_hour_bars.is_empty() {
            let finished = std::mem::take(&mut self.finished_hour_bars);
            self.on_hour_bars(finished);
        }
    }

    fn on_hour_bars(&mut self, bars: BarSet) {
        if self.window == 1 {
            self.emit(bars);
            return;
        }

        for (vt_symbol, bar) in &bars {
            let window_bar = self
                .window_bars
                .entry(vt_symbol.clone())
                .and_modify(|window_bar| update_range(window_bar, bar))
                .or_insert_with(|| new_window_bar(bar, bar.datetime, Interval::Hour));
            update_running(window_bar, bar);
        }

        self.interval_count += 1;
        if self.interval_count % self.window == 0 {
            self.interval_count = 0;
            let window_bars = std::mem::take(&mut self.window_bars);
            self.emit(window_bars);
        }
    }

    fn emit(&mut self, bars: BarSet) {
        if let Some(bar) = bars.values().next() {
            debug!(
                datetime = %bar.datetime,
                count = bars.len(),
                window = self.window,
                interval = %self.interval,
                "window bars finished"
            );
        }
        (self.on_window_bars)(bars);
    }
}

/// Open a window bar with the price range of its first contribution.
fn new_window_bar(bar: &BarData, datetime: DateTime<Utc>, interval: Interval) -> BarData {
    BarData {
        gateway_name: bar.gateway_name.clone(),
        symbol: bar.symbol.clone(),
        exchange: bar.exchange,
        datetime,
        interval: Some(interval),
        volume: 0.0,
        turnover: 0.0,
        open_interest: 0.0,
        open_price: bar.open_price,
        high_price: bar.high_price,
        low_price: bar.low_price,
        close_price: 0.0,
        extra: None,
    }
}

/// Open an hour bar seeded with every field of its first minute bar.
fn new_hour_bar(bar: &BarData) -> BarData {
    BarData {
        gateway_name: bar.gateway_name.clone(),
        symbol: bar.symbol.clone(),
        exchange: bar.exchange,
        datetime: floor_to_hour(bar.datetime),
        interval: Some(Interval::Hour),
        volume: bar.volume,
        turnover: bar.turnover,
        open_interest: bar.open_interest,
        open_price: bar.open_price,
        high_price: bar.high_price,
        low_price: bar.low_price,
        close_price: bar.close_price,
        extra: None,
    }
}

fn update_range(target: &mut BarData, bar: &BarData) {
    target.high_price = target.high_price.max(bar.high_price);
    target.low_price = target.low_price.min(bar.low_price);
}

fn update_running(target: &mut BarData, bar: &BarData) {
    target.close_price = bar.close_price;
    target.volume += bar.volume;
    target.turnover += bar.turnover;
    target.open_interest = bar.open_interest;
}
