use crate::domain::{AppError, MODE_KEY};
use crate::ports::DataSource;

/// Application context holding the data source chosen at startup.
///
/// The binding is written once by the composition root and only read
/// afterwards; at most one data source exists per process.
pub struct AppContext {
    binding: Option<Box<dyn DataSource>>,
}

impl AppContext {
    /// Create a context from the selector's result.
    pub fn new(binding: Option<Box<dyn DataSource>>) -> Self {
        Self { binding }
    }

    /// Get the bound data source.
    ///
    /// Fails on first use when the selector bound nothing.
    pub fn data_source(&self) -> Result<&dyn DataSource, AppError> {
        self.binding.as_deref().ok_or(AppError::MissingBinding { key: MODE_KEY })
    }
}
