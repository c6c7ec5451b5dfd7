//! Portfolio bar generator for converting ticks into 1-minute bars.
//!
//! Every instrument of a portfolio gets its own in-progress minute bar, but
//! all of them are finished together: the first tick of a new minute (for any
//! instrument) closes the whole set and hands it to the callback.

use chrono::{DateTime, Timelike, Utc};
use std::collections::btree_map::Entry;
use std::collections::HashMap;
use tracing::{debug, trace};

use crate::trader::{floor_to_minute, BarData, Interval, TickData};
use super::base::BarSet;

/// Aggregates ticks of many instruments into synchronized 1-minute bar sets.
pub struct PortfolioBarGenerator<F>
where
    F: FnMut(BarSet),
{
    on_bars: F,

    /// Minute bars being built, keyed by vt_symbol
    bars: BarSet,
    /// Previous tick of each instrument, for volume/turnover deltas
    last_ticks: HashMap<String, TickData>,
    /// Datetime of the last processed tick
    last_dt: Option<DateTime<Utc>>,
}

impl<F> PortfolioBarGenerator<F>
where
    F: FnMut(BarSet),
{
    /// Create a new generator calling `on_bars` with every finished minute set
    pub fn new(on_bars: F) -> Self {
        Self {
            on_bars,
            bars: BarSet::new(),
            last_ticks: HashMap::new(),
            last_dt: None,
        }
    }

    /// Update new tick data into generator
    pub fn update_tick(&mut self, tick: TickData) {
        // Filter ticks without a trade
        if !tick.has_trade() {
            trace!(vt_symbol = %tick.vt_symbol(), last_price = tick.last_price, "skip tick without trade");
            return;
        }

        if let Some(last_dt) = self.last_dt {
            if last_dt.minute() != tick.datetime.minute() {
                if let Some(bars) = self.finish_bars() {
                    (self.on_bars)(bars);
                }
            }
        }

        let vt_symbol = tick.vt_symbol();
        let bar = match self.bars.entry(vt_symbol.clone()) {
            Entry::Vacant(entry) => entry.insert(new_minute_bar(&tick)),
            Entry::Occupied(entry) => {
                let bar = entry.into_mut();
                bar.high_price = bar.high_price.max(tick.last_price);
                bar.low_price = bar.low_price.min(tick.last_price);
                bar.close_price = tick.last_price;
                bar.open_interest = tick.open_interest;
                bar.datetime = tick.datetime;
                bar
            }
        };

        if let Some(last_tick) = self.last_ticks.get(&vt_symbol) {
            bar.volume += (tick.volume - last_tick.volume).max(0.0);
            bar.turnover += (tick.turnover - last_tick.turnover).max(0.0);
        }

        self.last_dt = Some(tick.datetime);
        self.last_ticks.insert(vt_symbol, tick);
    }

    /// Finish the minute bars in progress and call the callback immediately.
    ///
    /// Returns the emitted set, or `None` without calling back when no bar is
    /// in progress.
    pub fn generate(&mut self) -> Option<BarSet> {
        let bars = self.finish_bars()?;
        (self.on_bars)(bars.clone());
        Some(bars)
    }

    /// Minute bars currently in progress
    pub fn bars(&self) -> &BarSet {
        &self.bars
    }

    /// Datetime of the last processed tick
    pub fn last_datetime(&self) -> Option<DateTime<Utc>> {
        self.last_dt
    }

    /// Previous tick seen for an instrument
    pub fn last_tick(&self, vt_symbol: &str) -> Option<&TickData> {
        self.last_ticks.get(vt_symbol)
    }

    /// Take the in-progress set out of the generator, aligned to the minute.
    fn finish_bars(&mut self) -> Option<BarSet> {
        if self.bars.is_empty() {
            return None;
        }

        let mut bars = std::mem::take(&mut self.bars);
        for bar in bars.values_mut() {
            bar.datetime = floor_to_minute(bar.datetime);
        }

        if let Some(bar) = bars.values().next() {
            debug!(datetime = %bar.datetime, count = bars.len(), "minute bars finished");
        }
        Some(bars)
    }
}

fn new_minute_bar(tick: &TickData) -> BarData {
    BarData {
        gateway_name: tick.gateway_name.clone(),
        symbol: tick.symbol.clone(),
        exchange: tick.exchange,
        datetime: tick.datetime,
        interval: Some(Interval::Minute),
        volume: 0.0,
        turnover: 0.0,
        open_interest: tick.open_interest,
        open_price: tick.last_price,
        high_price: tick.last_price,
        low_price: tick.last_price,
        close_price: tick.last_price,
        extra: None,
    }
}
