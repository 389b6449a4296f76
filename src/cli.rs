//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_bars_adapter::CsvBarsAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_report_adapter::JsonReportAdapter;
use crate::domain::config_validation::{validate_evaluate_config, validate_signal_config};
use crate::domain::error::SigcheckError;
use crate::domain::evaluation::{evaluate, EvaluationReport};
use crate::domain::signal::{
    SignalConfig, DEFAULT_EMA_PERIOD, DEFAULT_MACD_FAST, DEFAULT_MACD_SIGNAL, DEFAULT_MACD_SLOW,
    DEFAULT_RSI_PERIOD, DEFAULT_STRUCTURE_LOOKBACK, DEFAULT_VOLUME_LOOKBACK,
};
use crate::ports::config_port::ConfigPort;
use crate::ports::market_data_port::MarketDataPort;
use crate::ports::report_port::ReportPort;

const DEFAULT_TIMEFRAME: &str = "5 mins";
const DEFAULT_DURATION: &str = "1 D";

#[derive(Parser, Debug)]
#[command(name = "sigcheck", about = "Single-symbol trade signal evaluator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a symbol and print the signal report
    Evaluate {
        symbol: String,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        data_dir: Option<PathBuf>,
        #[arg(long)]
        timeframe: Option<String>,
        #[arg(long)]
        duration: Option<String>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List symbols available in the data directory
    ListSymbols {
        #[arg(long)]
        data_dir: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Show bar range and count for a symbol
    Info {
        symbol: String,
        #[arg(long)]
        data_dir: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Evaluate {
            symbol,
            config,
            data_dir,
            timeframe,
            duration,
            output,
        } => run_evaluate(
            &symbol,
            config.as_ref(),
            data_dir,
            timeframe.as_deref(),
            duration.as_deref(),
            output.as_deref(),
        ),
        Command::ListSymbols { data_dir, config } => run_list_symbols(data_dir, config.as_ref()),
        Command::Info {
            symbol,
            data_dir,
            config,
        } => run_info(&symbol, data_dir, config.as_ref()),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = SigcheckError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Indicator periods from the `[signals]` section, defaults where absent.
pub fn build_signal_config(adapter: &dyn ConfigPort) -> SignalConfig {
    let get = |key: &str, default: usize| adapter.get_int("signals", key, default as i64) as usize;

    SignalConfig {
        ema_period: get("ema_period", DEFAULT_EMA_PERIOD),
        rsi_period: get("rsi_period", DEFAULT_RSI_PERIOD),
        macd_fast: get("macd_fast", DEFAULT_MACD_FAST),
        macd_slow: get("macd_slow", DEFAULT_MACD_SLOW),
        macd_signal: get("macd_signal", DEFAULT_MACD_SIGNAL),
        volume_lookback: get("volume_lookback", DEFAULT_VOLUME_LOOKBACK),
        structure_lookback: get("structure_lookback", DEFAULT_STRUCTURE_LOOKBACK),
    }
}

fn resolve_data_dir(
    data_dir: Option<PathBuf>,
    adapter: Option<&FileConfigAdapter>,
) -> Option<PathBuf> {
    data_dir.or_else(|| {
        adapter
            .and_then(|a| a.get_string("data", "dir"))
            .map(PathBuf::from)
    })
}

fn run_evaluate(
    symbol: &str,
    config_path: Option<&PathBuf>,
    data_dir: Option<PathBuf>,
    timeframe: Option<&str>,
    duration: Option<&str>,
    output: Option<&std::path::Path>,
) -> ExitCode {
    let symbol = symbol.to_uppercase();

    let adapter = match config_path {
        Some(path) => {
            eprintln!("Loading config from {}", path.display());
            match load_config(path) {
                Ok(a) => Some(a),
                Err(code) => return code,
            }
        }
        None => None,
    };

    if let Some(ref a) = adapter {
        if let Err(e) = validate_signal_config(a) {
            eprintln!("error: {e}");
            return (&e).into();
        }
        if let Err(e) = validate_evaluate_config(a) {
            eprintln!("error: {e}");
            return (&e).into();
        }
    }

    let signal_config = adapter
        .as_ref()
        .map(|a| build_signal_config(a))
        .unwrap_or_default();

    let data_dir = match resolve_data_dir(data_dir, adapter.as_ref()) {
        Some(d) => d,
        None => {
            eprintln!("error: data directory is required (use --data-dir or set [data] dir)");
            return ExitCode::from(2);
        }
    };

    let timeframe = resolve_request_param(timeframe, adapter.as_ref(), "timeframe", DEFAULT_TIMEFRAME);
    let duration = resolve_request_param(duration, adapter.as_ref(), "duration", DEFAULT_DURATION);

    let data_port = CsvBarsAdapter::new(data_dir);
    eprintln!("Fetching {} of {} bars for {}...", duration, timeframe, symbol);

    let report = match data_port.fetch_bars(&symbol, &timeframe, &duration) {
        Ok(series) => {
            eprintln!("Fetched {} bars for {}", series.len(), symbol);
            evaluate(&symbol, &series, &signal_config)
        }
        Err(e) => {
            eprintln!("warning: {e}");
            EvaluationReport::no_data(&symbol)
        }
    };

    let report_port = JsonReportAdapter::new();
    if let Err(e) = report_port.write(&report, output) {
        eprintln!("error: {e}");
        return (&e).into();
    }
    if let Some(path) = output {
        eprintln!("Report written to: {}", path.display());
    }
    ExitCode::SUCCESS
}

fn resolve_request_param(
    override_value: Option<&str>,
    adapter: Option<&FileConfigAdapter>,
    key: &str,
    default: &str,
) -> String {
    if let Some(v) = override_value {
        return v.to_string();
    }
    adapter
        .and_then(|a| a.get_string("evaluate", key))
        .unwrap_or_else(|| default.to_string())
}

fn run_list_symbols(data_dir: Option<PathBuf>, config_path: Option<&PathBuf>) -> ExitCode {
    let adapter = match config_path {
        Some(path) => match load_config(path) {
            Ok(a) => Some(a),
            Err(code) => return code,
        },
        None => None,
    };

    let data_dir = match resolve_data_dir(data_dir, adapter.as_ref()) {
        Some(d) => d,
        None => {
            eprintln!("error: data directory is required (use --data-dir or set [data] dir)");
            return ExitCode::from(2);
        }
    };

    let data_port = CsvBarsAdapter::new(data_dir);
    let symbols = match data_port.list_symbols() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if symbols.is_empty() {
        eprintln!("No symbols found");
    } else {
        for symbol in &symbols {
            println!("{}", symbol);
        }
        eprintln!("{} symbols found", symbols.len());
    }
    ExitCode::SUCCESS
}

fn run_info(symbol: &str, data_dir: Option<PathBuf>, config_path: Option<&PathBuf>) -> ExitCode {
    let symbol = symbol.to_uppercase();

    let adapter = match config_path {
        Some(path) => match load_config(path) {
            Ok(a) => Some(a),
            Err(code) => return code,
        },
        None => None,
    };

    let data_dir = match resolve_data_dir(data_dir, adapter.as_ref()) {
        Some(d) => d,
        None => {
            eprintln!("error: data directory is required (use --data-dir or set [data] dir)");
            return ExitCode::from(2);
        }
    };

    let data_port = CsvBarsAdapter::new(data_dir);
    match data_port.bar_range(&symbol) {
        Ok(Some((first, last, count))) => {
            println!("{}: {} bars, {} to {}", symbol, count, first, last);
            ExitCode::SUCCESS
        }
        Ok(None) => {
            let err = SigcheckError::NoData { symbol };
            eprintln!("error: {err}");
            (&err).into()
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_signal_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }
    if let Err(e) = validate_evaluate_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let signal_config = build_signal_config(&adapter);
    eprintln!("\nSignal periods:");
    eprintln!("  ema_period:         {}", signal_config.ema_period);
    eprintln!("  rsi_period:         {}", signal_config.rsi_period);
    eprintln!(
        "  macd:               {}/{}/{}",
        signal_config.macd_fast, signal_config.macd_slow, signal_config.macd_signal
    );
    eprintln!("  volume_lookback:    {}", signal_config.volume_lookback);
    eprintln!("  structure_lookback: {}", signal_config.structure_lookback);

    eprintln!("\nConfiguration is valid.");
    ExitCode::SUCCESS
}
