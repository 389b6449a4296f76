//! CSV file market data adapter.
//!
//! One `<SYMBOL>.csv` per symbol under a data directory. Columns are
//! resolved through the header row, names matched case-insensitively.
//! `timestamp` (or `date`), `open` and `close` are required; `high`,
//! `low` and `volume` are optional. Timeframe and duration of a fetch
//! request are ignored: the files are already aggregated.

use crate::domain::bar::{Bar, BarSeries};
use crate::domain::error::SigcheckError;
use crate::ports::market_data_port::MarketDataPort;
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::PathBuf;

pub struct CsvBarsAdapter {
    data_dir: PathBuf,
}

struct ColumnMap {
    timestamp: usize,
    open: usize,
    close: usize,
    high: Option<usize>,
    low: Option<usize>,
    volume: Option<usize>,
}

impl CsvBarsAdapter {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn csv_path(&self, symbol: &str) -> PathBuf {
        self.data_dir.join(format!("{}.csv", symbol.to_uppercase()))
    }

    fn map_columns(headers: &csv::StringRecord) -> Result<ColumnMap, SigcheckError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        let timestamp = find("timestamp").or_else(|| find("date")).ok_or_else(|| {
            SigcheckError::Data {
                reason: "missing timestamp/date column".into(),
            }
        })?;
        let open = find("open").ok_or_else(|| SigcheckError::Data {
            reason: "missing open column".into(),
        })?;
        let close = find("close").ok_or_else(|| SigcheckError::Data {
            reason: "missing close column".into(),
        })?;

        Ok(ColumnMap {
            timestamp,
            open,
            close,
            high: find("high"),
            low: find("low"),
            volume: find("volume"),
        })
    }

    fn parse_timestamp(value: &str) -> Result<NaiveDateTime, SigcheckError> {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
            return Ok(ts);
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(|d| d.and_time(chrono::NaiveTime::MIN))
            .map_err(|e| SigcheckError::Data {
                reason: format!("invalid timestamp {:?}: {}", value, e),
            })
    }

    fn parse_required(record: &csv::StringRecord, idx: usize, name: &str) -> Result<f64, SigcheckError> {
        record
            .get(idx)
            .ok_or_else(|| SigcheckError::Data {
                reason: format!("missing {} value", name),
            })?
            .trim()
            .parse()
            .map_err(|e| SigcheckError::Data {
                reason: format!("invalid {} value: {}", name, e),
            })
    }

    fn parse_optional(record: &csv::StringRecord, idx: Option<usize>) -> Option<f64> {
        idx.and_then(|i| record.get(i))
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .and_then(|v| v.parse().ok())
    }
}

impl MarketDataPort for CsvBarsAdapter {
    fn fetch_bars(
        &self,
        symbol: &str,
        _timeframe: &str,
        _duration: &str,
    ) -> Result<BarSeries, SigcheckError> {
        let path = self.csv_path(symbol);
        let content = fs::read_to_string(&path).map_err(|e| SigcheckError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let headers = rdr.headers().map_err(|e| SigcheckError::Data {
            reason: format!("CSV header error: {}", e),
        })?;
        let columns = Self::map_columns(headers)?;

        let mut bars = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|e| SigcheckError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            let ts_str = record.get(columns.timestamp).ok_or_else(|| SigcheckError::Data {
                reason: "missing timestamp value".into(),
            })?;

            bars.push(Bar {
                timestamp: Self::parse_timestamp(ts_str.trim())?,
                open: Self::parse_required(&record, columns.open, "open")?,
                high: Self::parse_optional(&record, columns.high),
                low: Self::parse_optional(&record, columns.low),
                close: Self::parse_required(&record, columns.close, "close")?,
                volume: Self::parse_optional(&record, columns.volume),
            });
        }

        Ok(BarSeries::from_bars(symbol.to_uppercase(), bars))
    }

    fn list_symbols(&self) -> Result<Vec<String>, SigcheckError> {
        let entries = fs::read_dir(&self.data_dir).map_err(|e| SigcheckError::Data {
            reason: format!("failed to read directory {}: {}", self.data_dir.display(), e),
        })?;

        let mut symbols = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SigcheckError::Data {
                reason: format!("directory entry error: {}", e),
            })?;
            let name = entry.file_name();
            let name_str = name.to_string_lossy();
            if let Some(stem) = name_str.strip_suffix(".csv") {
                symbols.push(stem.to_string());
            }
        }

        symbols.sort();
        Ok(symbols)
    }

    fn bar_range(
        &self,
        symbol: &str,
    ) -> Result<Option<(NaiveDateTime, NaiveDateTime, usize)>, SigcheckError> {
        if !self.csv_path(symbol).exists() {
            return Ok(None);
        }
        let series = self.fetch_bars(symbol, "", "")?;
        match (series.bars().first(), series.last()) {
            (Some(first), Some(last)) => {
                Ok(Some((first.timestamp, last.timestamp, series.len())))
            }
            _ => Ok(None),
        }
    }
}
