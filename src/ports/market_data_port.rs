//! Market data port trait.

use crate::domain::bar::BarSeries;
use crate::domain::error::SigcheckError;
use chrono::NaiveDateTime;

/// Source of historical bars for one symbol.
///
/// `timeframe` and `duration` use the data vendor's vocabulary
/// (e.g. "5 mins" of "1 D"); an adapter may ignore what it cannot honor.
pub trait MarketDataPort {
    fn fetch_bars(
        &self,
        symbol: &str,
        timeframe: &str,
        duration: &str,
    ) -> Result<BarSeries, SigcheckError>;

    fn list_symbols(&self) -> Result<Vec<String>, SigcheckError>;

    /// Earliest timestamp, latest timestamp and bar count for a symbol.
    fn bar_range(
        &self,
        symbol: &str,
    ) -> Result<Option<(NaiveDateTime, NaiveDateTime, usize)>, SigcheckError>;
}
