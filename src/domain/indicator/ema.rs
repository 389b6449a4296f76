//! Exponential Moving Average indicator.
//!
//! k = 2/(n+1), seeded with the first close, then
//! EMA[i] = C[i]*k + EMA[i-1]*(1-k). Every point is defined; early values
//! lean on the seed and are an accepted approximation on short series.

use crate::domain::bar::Bar;
use crate::domain::indicator::IndicatorPoint;

pub fn calculate_ema(bars: &[Bar], period: usize) -> Vec<IndicatorPoint> {
    if period == 0 || bars.is_empty() {
        return Vec::new();
    }

    let k = 2.0 / (period as f64 + 1.0);
    let mut values = Vec::with_capacity(bars.len());
    let mut ema = bars[0].close;

    for (i, bar) in bars.iter().enumerate() {
        if i > 0 {
            ema = bar.close * k + ema * (1.0 - k);
        }
        values.push(IndicatorPoint {
            timestamp: bar.timestamp,
            valid: true,
            value: ema,
        });
    }

    values
}
