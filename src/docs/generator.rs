use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use super::{
    extraction::{extract_type_graph, run_command},
    graph::TypeGraph,
    markdown::SectionBuilder,
    snapshot::ConfigSnapshot,
    splitter::{Markers, split_document},
};
use crate::{
    OptrefError, Result,
    config::{GeneratorConfig, SectionSpec},
};

/// Regenerates the options reference document.
///
/// Reads the existing document, runs the extraction command, loads the
/// defaults snapshot and writes the merged result back over the document.
pub struct DocsGenerator {
    config: GeneratorConfig,
    markers: Markers,
}

impl DocsGenerator {
    /// Creates a generator for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `OptrefError::ConfigValidation` if an anchor pattern is invalid.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let markers = config.markers()?;
        Ok(Self { config, markers })
    }

    /// Path of the target document.
    pub fn document_path(&self) -> &Path {
        &self.config.document.path
    }

    /// Renders the regenerated document without writing it.
    ///
    /// # Errors
    ///
    /// Only a failing extraction step is an error. A missing document or
    /// snapshot degrades to the fallback header and `nil` defaults.
    pub fn render(&self) -> Result<String> {
        let existing = read_existing(self.document_path());
        let graph = extract_type_graph(&self.config.extraction)?;
        let snapshot = self.load_snapshot();

        Ok(regenerate(
            existing.as_deref(),
            &graph,
            &snapshot,
            &self.config.sections,
            &self.markers,
            &self.config.document.fallback_header,
        ))
    }

    /// Regenerates the document and overwrites it in full.
    ///
    /// # Errors
    ///
    /// Returns the extraction error untouched (nothing is written in that
    /// case), or `OptrefError::WriteFailed` if the document cannot be written.
    pub fn generate(&self) -> Result<PathBuf> {
        let content = self.render()?;
        let path = self.document_path();

        fs::write(path, content).map_err(|e| OptrefError::write_failed(e, path))?;

        info!(path = %path.display(), "Wrote options reference");
        Ok(path.to_path_buf())
    }

    /// Whether the document on disk already matches a fresh regeneration.
    ///
    /// # Errors
    ///
    /// Returns the extraction error if the extraction step fails.
    pub fn is_up_to_date(&self) -> Result<bool> {
        let rendered = self.render()?;
        let current = read_existing(self.document_path());

        Ok(current.as_deref() == Some(rendered.as_str()))
    }

    fn load_snapshot(&self) -> ConfigSnapshot {
        let snapshot = &self.config.snapshot;
        let loaded = match (&snapshot.command, &snapshot.path) {
            (Some(command), _) => {
                let source_name = command.display();
                info!(command = %source_name, "Loading defaults snapshot from command");
                run_command(command)
                    .map_err(|e| OptrefError::snapshot_load(e, &source_name))
                    .and_then(|output| ConfigSnapshot::from_json_str(&output, &source_name))
            }
            (None, Some(path)) => {
                info!(path = %path.display(), "Loading defaults snapshot");
                ConfigSnapshot::load_file(path)
            }
            (None, None) => {
                debug!("No snapshot source configured");
                return ConfigSnapshot::empty();
            }
        };

        loaded.unwrap_or_else(|error| {
            warn!(%error, "Defaults snapshot unavailable, every default renders as nil");
            ConfigSnapshot::empty()
        })
    }
}

fn read_existing(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(error) if error.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "No existing document, starting from the fallback header");
            None
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "Existing document unreadable, starting from the fallback header");
            None
        }
    }
}

/// Merges the preserved regions of `existing` with freshly rendered sections.
///
/// The output is the preamble (or `fallback_header` when the section anchor
/// is missing), a blank separator line, the generated sections and the
/// trailer. The generated region starts at the first entry or at the
/// heading of any of `sections`, whichever comes first. Feeding the result
/// back in with the same graph and snapshot reproduces it byte for byte.
/// Line endings are normalised to `\n`.
pub fn regenerate(
    existing: Option<&str>,
    graph: &TypeGraph,
    snapshot: &ConfigSnapshot,
    sections: &[SectionSpec],
    markers: &Markers,
    fallback_header: &str,
) -> String {
    let lines: Vec<&str> = existing.map(|text| text.lines().collect()).unwrap_or_default();
    let markers = markers.clone().with_section_headings(sections);
    let parts = split_document(&lines, &markers);

    let mut output: Vec<String> = match parts.preamble {
        Some(preamble) => preamble.iter().map(|line| line.to_string()).collect(),
        None => {
            debug!("Section anchor missing, using the fallback header");
            fallback_header.trim_end().lines().map(str::to_string).collect()
        }
    };

    output.push(String::new());
    output.extend(SectionBuilder::new(graph, snapshot).render_sections(sections));

    match parts.trailer {
        Some(trailer) => output.extend(trailer.iter().map(|line| line.to_string())),
        None => {
            while output.last().is_some_and(|line| line.is_empty()) {
                output.pop();
            }
        }
    }

    let mut document = output.join("\n");
    document.push('\n');
    document
}
