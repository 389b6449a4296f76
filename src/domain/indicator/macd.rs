//! MACD (Moving Average Convergence Divergence) indicator.
//!
//! MACD Line = EMA(fast) - EMA(slow)
//! Signal Line = EMA(signal) of MACD Line
//! Histogram = MACD Line - Signal Line
//!
//! All EMAs are first-value seeded, so every point is defined from the
//! first bar onward.

use crate::domain::bar::Bar;
use crate::domain::indicator::{calculate_ema, MacdPoint};

pub fn calculate_macd(
    bars: &[Bar],
    fast: usize,
    slow: usize,
    signal_period: usize,
) -> Vec<MacdPoint> {
    if bars.is_empty() || fast == 0 || slow == 0 || signal_period == 0 {
        return Vec::new();
    }

    let ema_fast = calculate_ema(bars, fast);
    let ema_slow = calculate_ema(bars, slow);

    let macd_line: Vec<f64> = ema_fast
        .iter()
        .zip(&ema_slow)
        .map(|(f, s)| f.value - s.value)
        .collect();

    let k = 2.0 / (signal_period as f64 + 1.0);
    let mut signal_line = Vec::with_capacity(macd_line.len());
    let mut signal_ema = macd_line[0];
    for (i, &line) in macd_line.iter().enumerate() {
        if i > 0 {
            signal_ema = line * k + signal_ema * (1.0 - k);
        }
        signal_line.push(signal_ema);
    }

    bars.iter()
        .enumerate()
        .map(|(i, bar)| MacdPoint {
            timestamp: bar.timestamp,
            line: macd_line[i],
            signal: signal_line[i],
            histogram: macd_line[i] - signal_line[i],
        })
        .collect()
}
