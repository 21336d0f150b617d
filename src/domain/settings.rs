//! Layered configuration map.
//!
//! Settings are assembled once at startup and read-only afterwards. Layers,
//! lowest to highest precedence: properties file, environment variables,
//! command-line `-D` overrides.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;

use crate::domain::AppError;

/// Configuration key that selects the data-source backend.
pub const MODE_KEY: &str = "project.mode";

/// Properties file consulted when no `--config` path is given.
pub const DEFAULT_CONFIG_FILE: &str = "datamode.toml";

/// Read-only string-to-string configuration assembled at startup.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    values: BTreeMap<String, String>,
}

impl Settings {
    /// Assemble settings from the properties file, the process environment,
    /// and `key=value` overrides, in that precedence order.
    ///
    /// An explicitly given `config_path` must exist; the default file is
    /// optional.
    pub fn load(config_path: Option<&Path>, overrides: &[String]) -> Result<Self, AppError> {
        let mut settings = Settings::default();
        match config_path {
            Some(path) => settings.merge_file(path, true)?,
            None => settings.merge_file(Path::new(DEFAULT_CONFIG_FILE), false)?,
        }
        settings.merge_env();
        settings.merge_overrides(overrides)?;
        Ok(settings)
    }

    /// Look up a value by its dotted key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn merge_file(&mut self, path: &Path, required: bool) -> Result<(), AppError> {
        if !path.exists() {
            if required {
                return Err(AppError::configuration(format!(
                    "Properties file '{}' not found",
                    path.display()
                )));
            }
            return Ok(());
        }

        let content = fs::read_to_string(path)?;
        let value: toml::Value = toml::from_str(&content).map_err(|e| {
            AppError::configuration(format!(
                "Malformed properties file '{}': {}",
                path.display(),
                e
            ))
        })?;
        flatten(&mut self.values, "", &value);
        Ok(())
    }

    /// Overlay the recognized keys from the environment using relaxed
    /// binding: `PROJECT_MODE` resolves the `project.mode` key.
    fn merge_env(&mut self) {
        if let Ok(value) = env::var(env_name(MODE_KEY)) {
            self.values.insert(MODE_KEY.to_string(), value);
        }
    }

    fn merge_overrides(&mut self, overrides: &[String]) -> Result<(), AppError> {
        for item in overrides {
            let (key, value) = item.split_once('=').ok_or_else(|| {
                AppError::configuration(format!("Invalid override '{}': expected key=value", item))
            })?;
            self.values.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let values =
            pairs.into_iter().map(|(key, value)| (key.to_string(), value.to_string())).collect();
        Self { values }
    }
}

/// Flatten nested TOML tables into dotted keys, so `[project] mode = "x"`
/// and `project.mode = "x"` populate the same entry.
fn flatten(values: &mut BTreeMap<String, String>, prefix: &str, value: &toml::Value) {
    match value {
        toml::Value::Table(table) => {
            for (key, nested) in table {
                let dotted =
                    if prefix.is_empty() { key.clone() } else { format!("{prefix}.{key}") };
                flatten(values, &dotted, nested);
            }
        }
        toml::Value::String(text) => {
            values.insert(prefix.to_string(), text.clone());
        }
        scalar => {
            values.insert(prefix.to_string(), scalar.to_string());
        }
    }
}

fn env_name(key: &str) -> String {
    key.to_uppercase().replace('.', "_")
}
