//! RSI (Relative Strength Index) indicator.
//!
//! Uses Wilder's smoothing for average gain/loss:
//! - First average: simple mean of gains/losses over the first n changes
//! - Subsequent: avg = (prev_avg * (n-1) + current) / n
//!
//! Formula: RSI = 100 - (100 / (1 + avg_gain / avg_loss))
//! If avg_loss == 0: RSI = 100
//!
//! Warmup: the first n bars are invalid (n close-to-close changes are
//! needed before the first average exists).

use crate::domain::bar::Bar;
use crate::domain::indicator::IndicatorPoint;

pub fn calculate_rsi(bars: &[Bar], period: usize) -> Vec<IndicatorPoint> {
    if period == 0 || bars.len() < 2 {
        return bars
            .iter()
            .map(|b| IndicatorPoint {
                timestamp: b.timestamp,
                valid: false,
                value: 0.0,
            })
            .collect();
    }

    let mut gains: Vec<f64> = Vec::with_capacity(bars.len() - 1);
    let mut losses: Vec<f64> = Vec::with_capacity(bars.len() - 1);
    for i in 1..bars.len() {
        let change = bars[i].close - bars[i - 1].close;
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    let mut values = Vec::with_capacity(bars.len());
    values.push(IndicatorPoint {
        timestamp: bars[0].timestamp,
        valid: false,
        value: 0.0,
    });

    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;

    for (i, bar) in bars.iter().enumerate().skip(1) {
        let change_idx = i - 1;

        if change_idx < period - 1 {
            values.push(IndicatorPoint {
                timestamp: bar.timestamp,
                valid: false,
                value: 0.0,
            });
            continue;
        }

        if change_idx == period - 1 {
            avg_gain = gains[..period].iter().sum::<f64>() / period as f64;
            avg_loss = losses[..period].iter().sum::<f64>() / period as f64;
        } else {
            avg_gain = (avg_gain * (period - 1) as f64 + gains[change_idx]) / period as f64;
            avg_loss = (avg_loss * (period - 1) as f64 + losses[change_idx]) / period as f64;
        }

        let rsi = if avg_loss == 0.0 {
            100.0
        } else {
            100.0 - (100.0 / (1.0 + avg_gain / avg_loss))
        };
        values.push(IndicatorPoint {
            timestamp: bar.timestamp,
            valid: true,
            value: rsi,
        });
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    fn make_bars(closes: &[f64]) -> Vec<Bar> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Bar {
                timestamp: NaiveDate::from_ymd_opt(2024, 1, 1)
                    .unwrap()
                    .and_hms_opt(10, 0, 0)
                    .unwrap()
                    + chrono::Duration::minutes(5 * i as i64),
                open: close,
                high: Some(close),
                low: Some(close),
                close,
                volume: Some(1000.0),
            })
            .collect()
    }

    const CLASSIC: [f64; 15] = [
        44.0, 44.25, 44.5, 43.75, 44.5, 44.25, 44.75, 45.25, 45.5, 45.25, 45.5, 46.0, 46.25, 46.0,
        46.5,
    ];

    #[test]
    fn rsi_empty_bars() {
        assert!(calculate_rsi(&[], 14).is_empty());
    }

    #[test]
    fn rsi_single_bar() {
        let bars = make_bars(&[100.0]);
        let values = calculate_rsi(&bars, 14);
        assert_eq!(values.len(), 1);
        assert!(!values[0].valid);
    }

    #[test]
    fn rsi_zero_period() {
        let bars = make_bars(&[100.0, 101.0]);
        let values = calculate_rsi(&bars, 0);
        assert_eq!(values.len(), 2);
        assert!(values.iter().all(|p| !p.valid));
    }

    #[test]
    fn rsi_warmup_period() {
        let bars = make_bars(&CLASSIC);
        let values = calculate_rsi(&bars, 14);

        assert_eq!(values.len(), 15);
        for (i, point) in values.iter().enumerate().take(14) {
            assert!(!point.valid, "bar {} should be invalid", i);
        }
        assert!(values[14].valid);
    }

    #[test]
    fn rsi_seed_average() {
        let bars = make_bars(&CLASSIC);
        let values = calculate_rsi(&bars, 14);
        // gains sum 3.0, losses sum 1.25 over the first 14 changes
        assert_abs_diff_eq!(values[14].value, 72.73, epsilon = 0.005);
    }

    #[test]
    fn rsi_wilder_recursion() {
        let mut closes = CLASSIC.to_vec();
        closes.push(46.25);
        let bars = make_bars(&closes);
        let values = calculate_rsi(&bars, 14);
        assert_abs_diff_eq!(values[15].value, 69.33, epsilon = 0.005);
    }

    #[test]
    fn rsi_all_gains_is_100() {
        let closes: Vec<f64> = (0..15).map(|i| 100.0 + i as f64).collect();
        let bars = make_bars(&closes);
        let values = calculate_rsi(&bars, 14);
        assert_abs_diff_eq!(values[14].value, 100.0);
    }

    #[test]
    fn rsi_all_losses_is_0() {
        let closes: Vec<f64> = (0..15).map(|i| 100.0 - i as f64).collect();
        let bars = make_bars(&closes);
        let values = calculate_rsi(&bars, 14);
        assert_abs_diff_eq!(values[14].value, 0.0);
    }

    #[test]
    fn rsi_in_range() {
        let closes: Vec<f64> = (0..30)
            .map(|i| 100.0 + ((i * 7) % 5) as f64 - 2.0)
            .collect();
        let bars = make_bars(&closes);
        for point in calculate_rsi(&bars, 14) {
            if point.valid {
                assert!((0.0..=100.0).contains(&point.value));
            }
        }
    }
}
