//! Startup selection of the data-source backend.

use crate::domain::{MODE_KEY, Mode, Settings};
use crate::ports::DataSource;
use crate::services::{DevSource, ProdSource};

/// Resolve the backend whose activation value matches `Settings["project.mode"]`.
///
/// Rules are mutually exclusive by value: `development` binds `DevSource`,
/// `production` binds `ProdSource`. An absent or unrecognized value binds
/// nothing, and the caller fails on first use of the data source.
pub fn bind(settings: &Settings) -> Option<Box<dyn DataSource>> {
    let mode = settings.get(MODE_KEY).and_then(Mode::from_value)?;
    Some(construct(mode))
}

fn construct(mode: Mode) -> Box<dyn DataSource> {
    match mode {
        Mode::Development => Box::new(DevSource),
        Mode::Production => Box::new(ProdSource),
    }
}
