//! Concrete adapter implementations for ports.

pub mod csv_bars_adapter;
pub mod file_config_adapter;
pub mod json_report_adapter;
