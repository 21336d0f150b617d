use std::io;

use thiserror::Error;

/// Library-wide error type for datamode operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// No data source matched the configured mode.
    #[error("No data source bound: set configuration key '{key}' to 'development' or 'production'")]
    MissingBinding { key: &'static str },
}

impl AppError {
    pub(crate) fn configuration<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
