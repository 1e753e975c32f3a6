//! Generator configuration.
//!
//! Every value the generator needs is compiled in through
//! [`GeneratorConfig::default`]. An optional `optref.toml` file can
//! override any part of it; its tables are merged over the defaults.

mod layout;
mod loading;

#[cfg(test)]
mod tests;

pub use layout::{RegistrySpec, SectionSpec, default_sections};
pub use loading::DEFAULT_CONFIG_FILE;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Result, docs::Markers};

/// Complete configuration for one regeneration run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Target document and its anchors.
    pub document: DocumentConfig,
    /// External command producing the type graph.
    pub extraction: CommandConfig,
    /// Where the defaults snapshot comes from.
    pub snapshot: SnapshotConfig,
    /// Generated sections in emission order.
    pub sections: Vec<SectionSpec>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            document: DocumentConfig::default(),
            extraction: CommandConfig::default(),
            snapshot: SnapshotConfig::default(),
            sections: default_sections(),
        }
    }
}

impl GeneratorConfig {
    /// Compiles the document anchor patterns.
    ///
    /// # Errors
    ///
    /// Returns `OptrefError::ConfigValidation` if a pattern is not a valid
    /// regular expression.
    pub fn markers(&self) -> Result<Markers> {
        Markers::new(
            &self.document.section_start,
            &self.document.first_entry,
            &self.document.trailer_start,
        )
    }
}

/// The regenerated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Path of the document, read at start and overwritten at the end.
    pub path: PathBuf,
    /// Pattern of the line opening the global options section.
    pub section_start: String,
    /// Pattern of the heading line of a generated entry.
    pub first_entry: String,
    /// Pattern of the line opening the preserved trailing section.
    pub trailer_start: String,
    /// Header used when the document or its section anchor is missing.
    ///
    /// Must contain a line matching `section_start` for later runs to find
    /// their split point again.
    pub fallback_header: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("OPTIONS.md"),
            section_start: r"^##\s+Global Options\s*$".to_string(),
            first_entry: r"^####\s".to_string(),
            trailer_start: r"^##\s+Pickers\b".to_string(),
            fallback_header: FALLBACK_HEADER.to_string(),
        }
    }
}

const FALLBACK_HEADER: &str = "\
# Options

Every picker merges its own options over the global defaults documented
below. Defaults shown are the values in effect when no setup options are
passed.

## Global Options

Global options can be set in the setup call and are shared by every picker
unless a picker overrides them.";

/// An external command run to completion with its stdout captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandConfig {
    /// Program to execute.
    pub program: String,
    /// Arguments passed verbatim.
    pub args: Vec<String>,
    /// Working directory; the current directory when unset.
    pub dir: Option<PathBuf>,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            program: "emmylua_doc_cli".to_string(),
            args: vec![
                "--output-format".to_string(),
                "json".to_string(),
                "--output".to_string(),
                "-".to_string(),
                "lua".to_string(),
            ],
            dir: None,
        }
    }
}

impl CommandConfig {
    /// The command line as a single display string.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Source of the defaults snapshot.
///
/// A command takes precedence over a file when both are set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// JSON or TOML file holding the defaults.
    pub path: Option<PathBuf>,
    /// Command printing the defaults as JSON on stdout.
    pub command: Option<CommandConfig>,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: Some(PathBuf::from("build/defaults.json")),
            command: None,
        }
    }
}
