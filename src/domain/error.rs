//! Domain error types.

/// Top-level error type for sigcheck.
#[derive(Debug, thiserror::Error)]
pub enum SigcheckError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("no data for {symbol}")]
    NoData { symbol: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&SigcheckError> for std::process::ExitCode {
    fn from(err: &SigcheckError) -> Self {
        let code: u8 = match err {
            SigcheckError::Io(_) => 1,
            SigcheckError::ConfigParse { .. }
            | SigcheckError::ConfigMissing { .. }
            | SigcheckError::ConfigInvalid { .. } => 2,
            SigcheckError::Data { .. } => 3,
            SigcheckError::NoData { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
