#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use sigcheck::domain::bar::{Bar, BarSeries};
use sigcheck::domain::error::SigcheckError;
use sigcheck::ports::market_data_port::MarketDataPort;
use std::collections::HashMap;

pub struct MockMarketDataPort {
    pub data: HashMap<String, Vec<Bar>>,
    pub errors: HashMap<String, String>,
}

impl MockMarketDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_bars(mut self, symbol: &str, bars: Vec<Bar>) -> Self {
        self.data.insert(symbol.to_string(), bars);
        self
    }

    pub fn with_error(mut self, symbol: &str, reason: &str) -> Self {
        self.errors.insert(symbol.to_string(), reason.to_string());
        self
    }
}

impl MarketDataPort for MockMarketDataPort {
    fn fetch_bars(
        &self,
        symbol: &str,
        _timeframe: &str,
        _duration: &str,
    ) -> Result<BarSeries, SigcheckError> {
        if let Some(reason) = self.errors.get(symbol) {
            return Err(SigcheckError::Data {
                reason: reason.clone(),
            });
        }
        Ok(BarSeries::from_bars(
            symbol,
            self.data.get(symbol).cloned().unwrap_or_default(),
        ))
    }

    fn list_symbols(&self) -> Result<Vec<String>, SigcheckError> {
        let mut symbols: Vec<String> = self.data.keys().cloned().collect();
        symbols.sort();
        Ok(symbols)
    }

    fn bar_range(
        &self,
        symbol: &str,
    ) -> Result<Option<(NaiveDateTime, NaiveDateTime, usize)>, SigcheckError> {
        if let Some(reason) = self.errors.get(symbol) {
            return Err(SigcheckError::Data {
                reason: reason.clone(),
            });
        }
        match self.data.get(symbol) {
            Some(bars) if !bars.is_empty() => {
                let min = bars.iter().map(|b| b.timestamp).min().unwrap();
                let max = bars.iter().map(|b| b.timestamp).max().unwrap();
                Ok(Some((min, max, bars.len())))
            }
            _ => Ok(None),
        }
    }
}

pub fn ts(minute: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
        + chrono::Duration::minutes(minute)
}

pub fn make_bar(minute: i64, close: f64) -> Bar {
    Bar {
        timestamp: ts(minute),
        open: close - 0.25,
        high: Some(close + 1.0),
        low: Some(close - 1.0),
        close,
        volume: Some(1000.0),
    }
}

/// Strictly rising closes at 5-minute spacing, last bar at double volume.
pub fn trending_bars(count: usize) -> Vec<Bar> {
    (0..count)
        .map(|i| {
            let mut bar = make_bar(5 * i as i64, 100.0 + i as f64);
            if i + 1 == count {
                bar.volume = Some(2000.0);
            }
            bar
        })
        .collect()
}

pub fn trending_series(symbol: &str, count: usize) -> BarSeries {
    BarSeries::from_bars(symbol, trending_bars(count))
}
