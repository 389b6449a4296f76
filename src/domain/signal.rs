//! Signal derivation: a bar series in, six named boolean signals out.
//!
//! Signals degrade to false when their inputs are unavailable (empty
//! series, missing optional fields, not enough history). Nothing in here
//! returns an error.

use crate::domain::bar::BarSeries;
use crate::domain::indicator::{calculate_ema, calculate_macd, calculate_rsi, calculate_vwap};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// The closed set of signals, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    EmaTrend,
    VwapTrend,
    RsiBias,
    MacdBias,
    VolumeSurge,
    StructureBreak,
}

impl Signal {
    pub const ALL: [Signal; 6] = [
        Signal::EmaTrend,
        Signal::VwapTrend,
        Signal::RsiBias,
        Signal::MacdBias,
        Signal::VolumeSurge,
        Signal::StructureBreak,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Signal::EmaTrend => "ema_trend",
            Signal::VwapTrend => "vwap_trend",
            Signal::RsiBias => "rsi_bias",
            Signal::MacdBias => "macd_bias",
            Signal::VolumeSurge => "volume_surge",
            Signal::StructureBreak => "structure_break",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Signal name → boolean outcome, iterated in declaration order.
///
/// [`SignalSet::empty`] carries no entries at all and marks a failed
/// evaluation; [`compute_signals`] always emits all six keys.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct SignalSet(BTreeMap<Signal, bool>);

impl SignalSet {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn all_false() -> Self {
        let mut set = Self::empty();
        for signal in Signal::ALL {
            set.set(signal, false);
        }
        set
    }

    pub fn set(&mut self, signal: Signal, value: bool) {
        self.0.insert(signal, value);
    }

    pub fn get(&self, signal: Signal) -> Option<bool> {
        self.0.get(&signal).copied()
    }

    pub fn is_true(&self, signal: Signal) -> bool {
        self.get(signal).unwrap_or(false)
    }

    pub fn positive_count(&self) -> usize {
        self.0.values().filter(|&&v| v).count()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Signal, bool)> + '_ {
        self.0.iter().map(|(&s, &v)| (s, v))
    }
}

/// Indicator periods and lookbacks, passed explicitly so alternate
/// parameters stay testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalConfig {
    pub ema_period: usize,
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    /// `volume_surge` needs strictly more bars than this.
    pub volume_lookback: usize,
    /// Closes inspected immediately before the last bar for `structure_break`.
    pub structure_lookback: usize,
}

pub const DEFAULT_EMA_PERIOD: usize = 13;
pub const DEFAULT_RSI_PERIOD: usize = 14;
pub const DEFAULT_MACD_FAST: usize = 12;
pub const DEFAULT_MACD_SLOW: usize = 26;
pub const DEFAULT_MACD_SIGNAL: usize = 9;
pub const DEFAULT_VOLUME_LOOKBACK: usize = 10;
pub const DEFAULT_STRUCTURE_LOOKBACK: usize = 4;

/// Bullish/bearish midline for the RSI bias.
const RSI_MIDLINE: f64 = 50.0;

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            ema_period: DEFAULT_EMA_PERIOD,
            rsi_period: DEFAULT_RSI_PERIOD,
            macd_fast: DEFAULT_MACD_FAST,
            macd_slow: DEFAULT_MACD_SLOW,
            macd_signal: DEFAULT_MACD_SIGNAL,
            volume_lookback: DEFAULT_VOLUME_LOOKBACK,
            structure_lookback: DEFAULT_STRUCTURE_LOOKBACK,
        }
    }
}

/// Derive all six signals from a bar series.
pub fn compute_signals(series: &BarSeries, config: &SignalConfig) -> SignalSet {
    if series.is_empty() {
        return SignalSet::all_false();
    }

    let bars = series.bars();
    let last = &bars[bars.len() - 1];
    let mut signals = SignalSet::all_false();

    let ema = calculate_ema(bars, config.ema_period);
    if let Some(point) = ema.last().filter(|p| p.valid) {
        signals.set(Signal::EmaTrend, last.close > point.value);
    }

    let vwap = calculate_vwap(bars);
    if let Some(point) = vwap.last().filter(|p| p.valid) {
        signals.set(Signal::VwapTrend, last.close > point.value);
    }

    let rsi = calculate_rsi(bars, config.rsi_period);
    if let Some(point) = rsi.last().filter(|p| p.valid) {
        signals.set(Signal::RsiBias, point.value > RSI_MIDLINE);
    }

    let macd = calculate_macd(bars, config.macd_fast, config.macd_slow, config.macd_signal);
    if let Some(point) = macd.last() {
        signals.set(Signal::MacdBias, point.histogram > 0.0);
    }

    if bars.len() > config.volume_lookback {
        let volumes: Option<Vec<f64>> = bars.iter().map(|b| b.volume).collect();
        if let Some(volumes) = volumes {
            let prior = &volumes[..volumes.len() - 1];
            let avg = prior.iter().sum::<f64>() / prior.len() as f64;
            signals.set(Signal::VolumeSurge, volumes[volumes.len() - 1] > avg);
        }
    }

    if bars.len() > config.structure_lookback + 1 {
        let window = &bars[bars.len() - 1 - config.structure_lookback..bars.len() - 1];
        let prior_high = window.iter().map(|b| b.close).fold(f64::MIN, f64::max);
        signals.set(Signal::StructureBreak, last.close > prior_high);
    }

    signals
}
