//! Error types and exit-code mapping.

/// Top-level error type for dipscreen.
///
/// Per-symbol conditions never appear here; they degrade to
/// [`crate::domain::series::SkipReason`] and the run continues. These
/// variants are the run-fatal ones: bad configuration, unreadable data
/// directory, unwritable output.
#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
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

    #[error("data error for {symbol}: {reason}")]
    Data { symbol: String, reason: String },

    #[error("data directory error: {reason}")]
    DataDir { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&ScreenError> for std::process::ExitCode {
    fn from(err: &ScreenError) -> Self {
        let code: u8 = match err {
            ScreenError::Io(_) => 1,
            ScreenError::ConfigParse { .. }
            | ScreenError::ConfigMissing { .. }
            | ScreenError::ConfigInvalid { .. } => 2,
            ScreenError::Data { .. } | ScreenError::DataDir { .. } => 3,
        };
        std::process::ExitCode::from(code)
    }
}
