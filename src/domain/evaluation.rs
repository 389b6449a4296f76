//! Evaluation of one symbol: signals, grading, report assembly.

use crate::domain::bar::BarSeries;
use crate::domain::recommendation::recommend;
use crate::domain::signal::{compute_signals, SignalConfig, SignalSet};
use serde::Serialize;

/// Recommendation text used when no bars could be obtained.
pub const NO_DATA_RECOMMENDATION: &str = "Could not retrieve data.";

/// The externally visible result record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationReport {
    pub symbol: String,
    pub positive_signals: usize,
    pub total_indicators: usize,
    pub indicators: SignalSet,
    pub recommendation: String,
}

impl EvaluationReport {
    /// Sentinel report for a symbol whose bars could not be retrieved.
    pub fn no_data(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            positive_signals: 0,
            total_indicators: 0,
            indicators: SignalSet::empty(),
            recommendation: NO_DATA_RECOMMENDATION.to_string(),
        }
    }
}

/// Run the full evaluation for one series.
///
/// Signals are derived first, then graded; an empty series short-circuits
/// to the no-data sentinel.
pub fn evaluate(symbol: &str, series: &BarSeries, config: &SignalConfig) -> EvaluationReport {
    if series.is_empty() {
        return EvaluationReport::no_data(symbol);
    }

    let signals = compute_signals(series, config);
    let rec = recommend(&signals);

    EvaluationReport {
        symbol: symbol.to_string(),
        positive_signals: rec.positive_signals,
        total_indicators: rec.total_indicators,
        indicators: signals,
        recommendation: rec.advice.to_string(),
    }
}
