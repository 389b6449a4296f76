//! Configuration validation.
//!
//! Validates the signal and evaluation sections before anything runs.

use crate::domain::error::SigcheckError;
use crate::ports::config_port::ConfigPort;

const SIGNAL_KEYS: [&str; 7] = [
    "ema_period",
    "rsi_period",
    "macd_fast",
    "macd_slow",
    "macd_signal",
    "volume_lookback",
    "structure_lookback",
];

pub fn validate_signal_config(config: &dyn ConfigPort) -> Result<(), SigcheckError> {
    for key in SIGNAL_KEYS {
        validate_positive_int(config, key)?;
    }
    validate_macd_ordering(config)?;
    Ok(())
}

pub fn validate_evaluate_config(config: &dyn ConfigPort) -> Result<(), SigcheckError> {
    validate_non_empty(config, "evaluate", "timeframe")?;
    validate_non_empty(config, "evaluate", "duration")?;
    Ok(())
}

fn validate_positive_int(config: &dyn ConfigPort, key: &str) -> Result<(), SigcheckError> {
    let value = config.get_int("signals", key, 1);
    if value < 1 {
        return Err(SigcheckError::ConfigInvalid {
            section: "signals".to_string(),
            key: key.to_string(),
            reason: format!("{} must be at least 1", key),
        });
    }
    Ok(())
}

fn validate_macd_ordering(config: &dyn ConfigPort) -> Result<(), SigcheckError> {
    let fast = config.get_int("signals", "macd_fast", 12);
    let slow = config.get_int("signals", "macd_slow", 26);
    if fast >= slow {
        return Err(SigcheckError::ConfigInvalid {
            section: "signals".to_string(),
            key: "macd_fast".to_string(),
            reason: "macd_fast must be shorter than macd_slow".to_string(),
        });
    }
    Ok(())
}

fn validate_non_empty(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
) -> Result<(), SigcheckError> {
    match config.get_string(section, key) {
        Some(s) if s.trim().is_empty() => Err(SigcheckError::ConfigInvalid {
            section: section.to_string(),
            key: key.to_string(),
            reason: format!("{} must not be blank when set", key),
        }),
        _ => Ok(()),
    }
}
