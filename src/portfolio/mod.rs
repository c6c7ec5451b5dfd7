//! Portfolio Bar Generation
//!
//! Rolls every instrument of a portfolio up to bar boundaries in lockstep:
//!
//! - **bar_generator**: ticks → synchronized 1-minute bar sets
//! - **window_generator**: 1-minute bar sets → N-minute, hour or N-hour bar sets
//! - **base**: `BarSet` and window configuration
//! - **error**: configuration errors
//!
//! The two stages are independent values. To chain them, let the minute
//! callback own the window generator:
//!
//! ```rust
//! use portfolio_strategy::portfolio::{BarSet, PortfolioBarGenerator, WindowBarGenerator};
//! use portfolio_strategy::trader::Interval;
//!
//! let mut window = WindowBarGenerator::new(15, Interval::Minute, |bars: BarSet| {
//!     for (vt_symbol, bar) in &bars {
//!         println!("{} {} {}", vt_symbol, bar.datetime, bar.close_price);
//!     }
//! })
//! .unwrap();
//!
//! let mut pbg = PortfolioBarGenerator::new(move |bars: BarSet| window.update_bars(&bars));
//! # let _ = &mut pbg;
//! ```

pub mod bar_generator;
pub mod base;
pub mod error;
pub mod window_generator;

pub use bar_generator::PortfolioBarGenerator;
pub use base::{BarSet, WindowSetting};
pub use error::BarGeneratorError;
pub use window_generator::WindowBarGenerator;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trader::{Exchange, Interval, TickData};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use std::cell::RefCell;
    use std::rc::Rc;

    const SYMBOLS: [(&str, Exchange); 3] = [
        ("IF2406", Exchange::Cffex),
        ("rb2410", Exchange::Shfe),
        ("m2409", Exchange::Dce),
    ];

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap()
    }

    /// Irregular tick stream: instrument i ticks every 7 + 4i seconds, the
    /// last one goes quiet for a while in the middle.
    fn tick_stream() -> Vec<TickData> {
        let mut ticks = Vec::new();
        for second in 0..(12 * 60) {
            for (i, (symbol, exchange)) in SYMBOLS.iter().enumerate() {
                let step = 7 + 4 * i as i64;
                if second % step != 0 {
                    continue;
                }
                if i == 2 && (180..420).contains(&second) {
                    continue;
                }

                let mut tick = TickData::new(
                    "test".to_string(),
                    symbol.to_string(),
                    *exchange,
                    start() + Duration::seconds(second) + Duration::milliseconds(500),
                );
                tick.last_price = 1000.0 * (i + 1) as f64 + ((second * 13) % 29) as f64;
                tick.volume = (second / step * 3) as f64;
                tick.turnover = tick.volume * tick.last_price;
                tick.open_interest = 10_000.0 + (second % 17) as f64;
                ticks.push(tick);
            }
        }
        ticks
    }

    fn run_pipeline(ticks: &[TickData], window: u32) -> (Vec<String>, Vec<String>) {
        let minute_out = Rc::new(RefCell::new(Vec::new()));
        let window_out = Rc::new(RefCell::new(Vec::new()));

        let window_sink = Rc::clone(&window_out);
        let mut wg = WindowBarGenerator::new(window, Interval::Minute, move |bars: BarSet| {
            window_sink
                .borrow_mut()
                .push(serde_json::to_string(&bars).unwrap());
        })
        .unwrap();

        let minute_sink = Rc::clone(&minute_out);
        let mut pbg = PortfolioBarGenerator::new(move |bars: BarSet| {
            minute_sink
                .borrow_mut()
                .push(serde_json::to_string(&bars).unwrap());
            wg.update_bars(&bars);
        });

        for tick in ticks {
            pbg.update_tick(tick.clone());
        }
        drop(pbg);

        let minutes = minute_out.borrow().clone();
        let windows = window_out.borrow().clone();
        (minutes, windows)
    }

    #[test]
    fn test_replay_is_deterministic() {
        let ticks = tick_stream();

        let first = run_pipeline(&ticks, 5);
        let second = run_pipeline(&ticks, 5);

        // 12 minutes of ticks: 11 minute rollovers, windows close after minutes 4 and 9
        assert_eq!(first.0.len(), 11);
        assert_eq!(first.1.len(), 2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_pipeline_rolls_portfolio_in_lockstep() {
        let minute_sets = Rc::new(RefCell::new(Vec::<BarSet>::new()));
        let window_sets = Rc::new(RefCell::new(Vec::<BarSet>::new()));

        let window_sink = Rc::clone(&window_sets);
        let mut wg = WindowBarGenerator::new(5, Interval::Minute, move |bars: BarSet| {
            window_sink.borrow_mut().push(bars);
        })
        .unwrap();

        let minute_sink = Rc::clone(&minute_sets);
        let mut pbg = PortfolioBarGenerator::new(move |bars: BarSet| {
            wg.update_bars(&bars);
            minute_sink.borrow_mut().push(bars);
        });

        for tick in tick_stream() {
            pbg.update_tick(tick);
        }

        let minute_sets = minute_sets.borrow();
        for (n, bars) in minute_sets.iter().enumerate() {
            let expected = start() + Duration::minutes(n as i64);
            assert!(bars.values().all(|bar| bar.datetime == expected));
            assert!(bars.values().all(|bar| bar.volume >= 0.0));
        }

        // m2409 is silent from 09:03 to 09:06 and must be absent, not zero-filled
        assert_eq!(minute_sets[2].len(), 3);
        assert_eq!(minute_sets[4].len(), 2);
        assert!(!minute_sets[4].contains_key("m2409.DCE"));

        let window_sets = window_sets.borrow();
        assert_eq!(window_sets.len(), 2);
        assert_eq!(window_sets[0]["rb2410.SHFE"].datetime, start());
        assert_eq!(
            window_sets[1]["rb2410.SHFE"].datetime,
            start() + Duration::minutes(5)
        );

        let summed: f64 = minute_sets[..5]
            .iter()
            .map(|bars| bars["rb2410.SHFE"].volume)
            .sum();
        assert_eq!(window_sets[0]["rb2410.SHFE"].volume, summed);
    }
}
