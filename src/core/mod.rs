use std::{
    fmt, io,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

/// Error types for the options reference generator.
///
/// Only the extraction variants and configuration problems abort a run.
/// Everything the document pipeline can recover from (missing anchors,
/// missing types, undocumented members) never becomes an error at all.
#[derive(Error, Debug)]
pub enum OptrefError {
    /// The extraction collaborator ran but exited with a non-zero status
    #[error("extraction command '{command}' failed with {status}: {stderr}")]
    ExtractionFailed {
        /// Command line that was executed
        command: String,
        /// Exit status description
        status: String,
        /// Captured diagnostic stream
        stderr: String,
    },

    /// The extraction collaborator could not be started
    #[error("failed to run extraction command '{command}': {details}")]
    ExtractionSpawn {
        /// Command line that was attempted
        command: String,
        /// Spawn error details
        details: String,
    },

    /// The extraction output did not match the expected type contract
    #[error("failed to parse extraction output: {details}")]
    ExtractionParse {
        /// Parse error details
        details: String,
    },

    /// The defaults snapshot could not be loaded
    #[error("failed to load defaults snapshot from '{source_name}': {details}")]
    SnapshotLoad {
        /// File path or command the snapshot was read from
        source_name: String,
        /// Load error details
        details: String,
    },

    /// The target document could not be written
    #[error("failed to write '{path}': {details}")]
    WriteFailed {
        /// Path of the target document
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Configuration validation error
    #[error("configuration validation failed for '{component}': {details}")]
    ConfigValidation {
        /// Component that failed validation
        component: String,
        /// Validation error details
        details: String,
    },

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A specialized `Result` type for generator operations.
pub type Result<T> = result::Result<T, OptrefError>;

impl OptrefError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        OptrefError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates a write error for the target document.
    pub fn write_failed(error: impl fmt::Display, path: &Path) -> Self {
        OptrefError::WriteFailed {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }

    /// Creates a snapshot load error naming where the snapshot came from.
    pub fn snapshot_load(error: impl fmt::Display, source_name: impl Into<String>) -> Self {
        OptrefError::SnapshotLoad {
            source_name: source_name.into(),
            details: error.to_string(),
        }
    }

    /// Whether this error came from the extraction collaborator.
    pub fn is_extraction_failure(&self) -> bool {
        matches!(
            self,
            OptrefError::ExtractionFailed { .. }
                | OptrefError::ExtractionSpawn { .. }
                | OptrefError::ExtractionParse { .. }
        )
    }
}
