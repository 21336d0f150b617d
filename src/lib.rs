//! datamode: resolve a data-source backend from `project.mode` configuration.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

use app::{AppContext, selector};

pub use domain::{AppError, MODE_KEY, Mode, Settings};

/// Resolve the configured backend and fetch its datum.
///
/// Assembles layered settings (properties file, environment, `-D`
/// overrides), binds the matching data source, and calls `get_data()`
/// exactly once on it.
pub fn fetch(config_path: Option<&Path>, overrides: &[String]) -> Result<String, AppError> {
    let settings = Settings::load(config_path, overrides)?;
    let ctx = AppContext::new(selector::bind(&settings));

    let datum = ctx.data_source()?.get_data();
    Ok(datum)
}
