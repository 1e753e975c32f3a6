use std::{fs, path::Path};

use toml::Value;
use tracing::{debug, info};

use super::GeneratorConfig;
use crate::{OptrefError, Result};

/// Override file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "optref.toml";

impl GeneratorConfig {
    /// Loads the configuration, merging an override file over the defaults.
    ///
    /// With an explicit path the file must exist. Without one,
    /// [`DEFAULT_CONFIG_FILE`] is used if it exists and the compiled-in
    /// defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicitly named file cannot be read
    /// - The TOML content is invalid
    /// - The merged configuration does not match the expected shape
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path,
            None => {
                let implicit = Path::new(DEFAULT_CONFIG_FILE);
                if !implicit.exists() {
                    debug!("No {DEFAULT_CONFIG_FILE} found, using compiled-in configuration");
                    return Ok(Self::default());
                }
                implicit
            }
        };

        info!(path = %path.display(), "Loading configuration overrides");
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content, Some(path))
    }

    /// Parses override TOML and merges it over the defaults.
    ///
    /// # Errors
    ///
    /// Returns `OptrefError::TomlParseError` for invalid TOML and
    /// `OptrefError::ConfigValidation` if the merged result is malformed.
    pub fn from_toml_str(content: &str, path: Option<&Path>) -> Result<Self> {
        let overlay: Value =
            toml::from_str(content).map_err(|e| OptrefError::toml_parse(e, path))?;

        let defaults = Value::try_from(Self::default()).map_err(|e| {
            OptrefError::ConfigValidation {
                component: "defaults".to_string(),
                details: e.to_string(),
            }
        })?;

        merge_two_toml_configs(defaults, overlay)
            .try_into()
            .map_err(|e| OptrefError::ConfigValidation {
                component: "config parsing".to_string(),
                details: format!("Configuration validation failed: {e}"),
            })
    }
}

/// Deep merges two TOML values, the overlay taking precedence
///
/// Tables merge key by key; any other overlay value (arrays included)
/// replaces the base value outright.
pub(super) fn merge_two_toml_configs(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            let mut merged_table = overlay_table;

            for (key, base_value) in base_table {
                let merged_value = match merged_table.remove(&key) {
                    None => base_value,
                    Some(overlay_value) => merge_two_toml_configs(base_value, overlay_value),
                };
                merged_table.insert(key, merged_value);
            }

            Value::Table(merged_table)
        }
        (_, overlay) => overlay,
    }
}
