//! Read-only view over the live default configuration.

use std::{fs, path::Path};

use serde_json::{Map, Value};

use super::value::{DefaultValue, callable_placeholder};
use crate::{OptrefError, Result};

/// The nested mapping of default values currently in effect.
///
/// Passed explicitly to every lookup; nothing in the pipeline mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSnapshot {
    root: Value,
}

impl Default for ConfigSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl ConfigSnapshot {
    /// Wraps an already parsed snapshot tree.
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// A snapshot with no values; every lookup resolves to absent.
    pub fn empty() -> Self {
        Self::new(Value::Object(Map::new()))
    }

    /// Root node of the snapshot.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Parses a JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns `OptrefError::SnapshotLoad` if the text is not valid JSON.
    pub fn from_json_str(content: &str, source_name: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map(Self::new)
            .map_err(|e| OptrefError::snapshot_load(e, source_name))
    }

    /// Parses a TOML snapshot.
    ///
    /// # Errors
    ///
    /// Returns `OptrefError::SnapshotLoad` if the text is not valid TOML.
    pub fn from_toml_str(content: &str, source_name: &str) -> Result<Self> {
        toml::from_str(content)
            .map(Self::new)
            .map_err(|e| OptrefError::snapshot_load(e, source_name))
    }

    /// Loads a snapshot file, choosing the format from its extension.
    ///
    /// Files ending in `.toml` are parsed as TOML, everything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns `OptrefError::SnapshotLoad` if the file cannot be read or parsed.
    pub fn load_file(path: &Path) -> Result<Self> {
        let source_name = path.display().to_string();
        let content =
            fs::read_to_string(path).map_err(|e| OptrefError::snapshot_load(e, &source_name))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content, &source_name),
            _ => Self::from_json_str(&content, &source_name),
        }
    }

    /// Resolves the default value at `path`.
    ///
    /// A missing key, a step into a non-table node, or overshooting past a
    /// leaf all resolve to [`DefaultValue::Absent`].
    pub fn resolve<S: AsRef<str>>(&self, path: &[S]) -> DefaultValue {
        navigate_path(&self.root, path)
            .map(DefaultValue::from_json)
            .unwrap_or(DefaultValue::Absent)
    }
}

/// Navigates through a snapshot tree following a sequence of keys.
///
/// Tables are indexed by key and sequences by a numeric key. Callable nodes
/// are leaves and cannot be stepped into.
pub fn navigate_path<'a, S: AsRef<str>>(value: &'a Value, path: &[S]) -> Option<&'a Value> {
    let mut current = value;

    for part in path {
        let part = part.as_ref();
        if callable_placeholder(current).is_some() {
            return None;
        }

        current = match current {
            Value::Object(table) => table.get(part)?,
            Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    Some(current)
}
