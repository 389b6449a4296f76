//! OHLCV bar representation.
//!
//! Open and close are always present; high, low and volume are optional
//! because not every data source carries them. Checks that the original
//! loosely-typed feeds did per-column are expressed here as `Option` fields.

use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub timestamp: NaiveDateTime,
    pub open: f64,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: f64,
    pub volume: Option<f64>,
}

impl Bar {
    /// (high + low + close) / 3, when high and low are present.
    pub fn typical_price(&self) -> Option<f64> {
        match (self.high, self.low) {
            (Some(high), Some(low)) => Some((high + low + self.close) / 3.0),
            _ => None,
        }
    }
}

/// Bars for one instrument, ascending by timestamp, no duplicate timestamps.
///
/// The constructor establishes the invariant: bars are sorted and
/// later bars with an already-seen timestamp are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    symbol: String,
    bars: Vec<Bar>,
}

impl BarSeries {
    pub fn from_bars(symbol: impl Into<String>, mut bars: Vec<Bar>) -> Self {
        bars.sort_by_key(|b| b.timestamp);
        bars.dedup_by_key(|b| b.timestamp);
        Self {
            symbol: symbol.into(),
            bars,
        }
    }

    pub fn empty(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            bars: Vec::new(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    /// True when every bar carries high, low and volume.
    pub fn has_full_ohlcv(&self) -> bool {
        self.bars
            .iter()
            .all(|b| b.high.is_some() && b.low.is_some() && b.volume.is_some())
    }
}
