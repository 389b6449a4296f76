//! Session volume-weighted average price.
//!
//! VWAP[i] = sum(typical_price * volume, 0..=i) / sum(volume, 0..=i)
//! with typical_price = (high + low + close) / 3.
//!
//! Requires high, low and volume on every bar; otherwise no series is
//! produced. A point stays invalid while the cumulative volume is zero.

use crate::domain::bar::Bar;
use crate::domain::indicator::IndicatorPoint;

pub fn calculate_vwap(bars: &[Bar]) -> Vec<IndicatorPoint> {
    let mut values = Vec::with_capacity(bars.len());
    let mut cum_pv = 0.0;
    let mut cum_volume = 0.0;

    for bar in bars {
        let (typical, volume) = match (bar.typical_price(), bar.volume) {
            (Some(t), Some(v)) => (t, v),
            _ => return Vec::new(),
        };

        cum_pv += typical * volume;
        cum_volume += volume;

        if cum_volume > 0.0 {
            values.push(IndicatorPoint {
                timestamp: bar.timestamp,
                valid: true,
                value: cum_pv / cum_volume,
            });
        } else {
            values.push(IndicatorPoint {
                timestamp: bar.timestamp,
                valid: false,
                value: 0.0,
            });
        }
    }

    values
}
