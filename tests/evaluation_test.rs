//! End-to-end evaluation scenarios: bar series in, graded report out.

mod common;

use approx::assert_abs_diff_eq;
use common::*;
use proptest::prelude::*;
use sigcheck::domain::bar::BarSeries;
use sigcheck::domain::evaluation::{evaluate, NO_DATA_RECOMMENDATION};
use sigcheck::domain::indicator::{calculate_ema, calculate_macd, calculate_rsi, calculate_vwap};
use sigcheck::domain::recommendation::{recommend, Advice};
use sigcheck::domain::signal::{compute_signals, Signal, SignalConfig, SignalSet};
use sigcheck::ports::market_data_port::MarketDataPort;

#[test]
fn trending_twenty_bar_scenario() {
    // 20 bars, close 100..119, high/low at close±1, final volume doubled.
    let series = trending_series("TSLA", 20);
    let config = SignalConfig::default();
    let bars = series.bars();

    // deterministic indicator values, to two decimals
    let ema = calculate_ema(bars, config.ema_period);
    assert_abs_diff_eq!(ema.last().unwrap().value, 113.32, epsilon = 0.005);

    let vwap = calculate_vwap(bars);
    assert_abs_diff_eq!(vwap.last().unwrap().value, 109.95, epsilon = 0.005);

    let macd = calculate_macd(bars, config.macd_fast, config.macd_slow, config.macd_signal);
    assert_abs_diff_eq!(macd.last().unwrap().histogram, 0.88, epsilon = 0.005);

    let rsi = calculate_rsi(bars, config.rsi_period);
    assert_abs_diff_eq!(rsi.last().unwrap().value, 100.0);

    let signals = compute_signals(&series, &config);
    assert!(signals.is_true(Signal::EmaTrend));
    assert!(signals.is_true(Signal::VwapTrend));
    assert!(signals.is_true(Signal::RsiBias));
    assert!(signals.is_true(Signal::MacdBias));
    assert!(signals.is_true(Signal::VolumeSurge));
    assert!(signals.is_true(Signal::StructureBreak));

    let report = evaluate("TSLA", &series, &config);
    assert_eq!(report.positive_signals, 6);
    assert_eq!(report.total_indicators, 6);
    assert_eq!(report.recommendation, "Strong Buy");
}

#[test]
fn full_series_emits_exactly_six_boolean_keys() {
    let series = trending_series("TSLA", 15);
    let signals = compute_signals(&series, &SignalConfig::default());
    assert_eq!(signals.len(), 6);
    for signal in Signal::ALL {
        assert!(signals.get(signal).is_some(), "missing {}", signal);
    }
}

#[test]
fn empty_series_short_circuits() {
    let signals = compute_signals(&BarSeries::empty("TSLA"), &SignalConfig::default());
    assert_eq!(signals.len(), 6);
    assert_eq!(signals.positive_count(), 0);

    let report = evaluate("TSLA", &BarSeries::empty("TSLA"), &SignalConfig::default());
    assert_eq!(report.recommendation, NO_DATA_RECOMMENDATION);
    assert!(report.indicators.is_empty());
}

#[test]
fn empty_signal_set_grades_hold_wait() {
    let rec = recommend(&SignalSet::empty());
    assert_eq!(rec.advice, Advice::HoldWait);
    assert_eq!(rec.positive_signals, 0);
    assert_eq!(rec.total_indicators, 0);
}

#[test]
fn short_history_degrades_length_gated_signals() {
    let config = SignalConfig::default();
    for len in 1..=5 {
        let signals = compute_signals(&trending_series("TSLA", len), &config);
        assert!(!signals.is_true(Signal::StructureBreak), "len {}", len);
        assert!(!signals.is_true(Signal::VolumeSurge), "len {}", len);
    }
    for len in 6..=10 {
        let signals = compute_signals(&trending_series("TSLA", len), &config);
        assert!(!signals.is_true(Signal::VolumeSurge), "len {}", len);
    }
}

#[test]
fn missing_volume_degrades_volume_and_vwap_only() {
    let mut bars = trending_bars(20);
    for bar in &mut bars {
        bar.volume = None;
    }
    let series = BarSeries::from_bars("TSLA", bars);
    let signals = compute_signals(&series, &SignalConfig::default());

    assert!(!signals.is_true(Signal::VolumeSurge));
    assert!(!signals.is_true(Signal::VwapTrend));
    assert!(signals.is_true(Signal::EmaTrend));
    assert!(signals.is_true(Signal::RsiBias));
    assert!(signals.is_true(Signal::MacdBias));
    assert!(signals.is_true(Signal::StructureBreak));

    let report = evaluate("TSLA", &series, &SignalConfig::default());
    assert_eq!(report.positive_signals, 4);
    assert_eq!(report.recommendation, "Cautious Buy");
}

#[test]
fn fetch_failure_maps_to_sentinel_report() {
    let port = MockMarketDataPort::new().with_error("TSLA", "gateway unreachable");
    let report = match port.fetch_bars("TSLA", "5 mins", "1 D") {
        Ok(series) => evaluate("TSLA", &series, &SignalConfig::default()),
        Err(_) => sigcheck::domain::evaluation::EvaluationReport::no_data("TSLA"),
    };
    assert_eq!(report.recommendation, NO_DATA_RECOMMENDATION);
    assert_eq!(report.total_indicators, 0);
}

#[test]
fn mock_port_round_trip() {
    let port = MockMarketDataPort::new().with_bars("TSLA", trending_bars(20));
    let series = port.fetch_bars("TSLA", "5 mins", "1 D").unwrap();
    let report = evaluate("TSLA", &series, &SignalConfig::default());
    assert_eq!(report.symbol, "TSLA");
    assert_eq!(report.recommendation, "Strong Buy");

    let (first, last, count) = port.bar_range("TSLA").unwrap().unwrap();
    assert_eq!(count, 20);
    assert!(first < last);
}

fn set_with(count: usize) -> SignalSet {
    let mut set = SignalSet::all_false();
    for signal in Signal::ALL.into_iter().take(count) {
        set.set(signal, true);
    }
    set
}

#[test]
fn recommendation_boundaries() {
    assert_eq!(recommend(&set_with(0)).advice, Advice::DoNotEnter);
    assert_eq!(recommend(&set_with(2)).advice, Advice::HoldWait);
    assert_eq!(recommend(&set_with(5)).advice, Advice::StrongBuy);
}

proptest! {
    /// More true signals never lowers the graded advice.
    #[test]
    fn recommendation_is_monotonic(a in 0usize..=6, b in 0usize..=6) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let rec_lo = recommend(&set_with(lo));
        let rec_hi = recommend(&set_with(hi));
        prop_assert!(rec_lo.advice <= rec_hi.advice);
    }

    /// Which signals are true does not matter, only how many.
    #[test]
    fn recommendation_depends_only_on_count(mask in proptest::collection::vec(any::<bool>(), 6)) {
        let mut set = SignalSet::all_false();
        for (signal, &value) in Signal::ALL.iter().zip(&mask) {
            set.set(*signal, value);
        }
        let by_mask = recommend(&set);
        let by_count = recommend(&set_with(by_mask.positive_signals));
        prop_assert_eq!(by_mask.advice, by_count.advice);
    }

    /// Signal derivation has no hidden state.
    #[test]
    fn compute_signals_is_idempotent(len in 0usize..40) {
        let series = trending_series("TSLA", len);
        let config = SignalConfig::default();
        prop_assert_eq!(
            compute_signals(&series, &config),
            compute_signals(&series, &config)
        );
    }
}
