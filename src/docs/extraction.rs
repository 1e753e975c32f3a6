//! Boundary with the external schema extraction and snapshot commands.

use std::process::{Command, Stdio};

use serde::Deserialize;
use tracing::{debug, info};

use super::graph::{TypeDefinition, TypeGraph};
use crate::{OptrefError, Result, config::CommandConfig};

/// Structured output of the extraction collaborator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Extraction {
    /// Every extracted type, in emission order.
    #[serde(default)]
    pub types: Vec<TypeDefinition>,
}

impl Extraction {
    /// Parses the collaborator's stdout.
    ///
    /// # Errors
    ///
    /// Returns `OptrefError::ExtractionParse` if the buffer is not valid JSON
    /// or lacks a `types` collection of the expected shape.
    pub fn parse(output: &str) -> Result<Self> {
        serde_json::from_str(output).map_err(|e| OptrefError::ExtractionParse {
            details: e.to_string(),
        })
    }

    /// Indexes the extracted types.
    pub fn into_graph(self) -> TypeGraph {
        TypeGraph::index(self.types)
    }
}

/// Runs the extraction command and indexes its output.
///
/// # Errors
///
/// Fails if the command cannot be started, exits non-zero, or prints
/// output that does not parse.
pub fn extract_type_graph(command: &CommandConfig) -> Result<TypeGraph> {
    let output = run_command(command)?;
    let graph = Extraction::parse(&output)?.into_graph();

    info!(types = graph.len(), "Indexed extracted types");
    Ok(graph)
}

/// Runs a command to completion and returns its stdout as text.
///
/// Blocks until the process exits; there is no timeout.
///
/// # Errors
///
/// Returns `OptrefError::ExtractionSpawn` if the process cannot be started
/// and `OptrefError::ExtractionFailed` with the captured stderr if it exits
/// with a non-zero status.
pub fn run_command(command: &CommandConfig) -> Result<String> {
    let command_line = command.display();
    debug!(command = %command_line, "Running external command");

    let mut process = Command::new(&command.program);
    process
        .args(&command.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = &command.dir {
        process.current_dir(dir);
    }

    let output = process.output().map_err(|e| OptrefError::ExtractionSpawn {
        command: command_line.clone(),
        details: e.to_string(),
    })?;

    if !output.status.success() {
        return Err(OptrefError::ExtractionFailed {
            command: command_line,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
