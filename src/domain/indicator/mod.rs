//! Technical indicator implementations.
//!
//! Each indicator walks a bar slice and yields one point per bar. A point
//! carries a `valid` flag: indicators with a warmup requirement (RSI) mark
//! their leading points invalid instead of omitting them, so indices always
//! line up with the input bars.

pub mod ema;
pub mod macd;
pub mod rsi;
pub mod vwap;

pub use ema::calculate_ema;
pub use macd::calculate_macd;
pub use rsi::calculate_rsi;
pub use vwap::calculate_vwap;

use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorPoint {
    pub timestamp: NaiveDateTime,
    pub valid: bool,
    pub value: f64,
}

/// MACD yields three series at once; kept as one point per bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdPoint {
    pub timestamp: NaiveDateTime,
    pub line: f64,
    pub signal: f64,
    pub histogram: f64,
}
