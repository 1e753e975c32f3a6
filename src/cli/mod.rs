//! Command-line entry point.
//!
//! Running without arguments regenerates the document described by the
//! compiled-in configuration (or `optref.toml` when present).

pub mod formatting;

#[cfg(test)]
mod tests;

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing::error;

use crate::{OptrefError, Result, config::GeneratorConfig, docs::DocsGenerator};
use formatting::{format_error, format_success, format_warning};

/// Regenerate the options reference document.
#[derive(Parser, Debug)]
#[command(name = "optref")]
#[command(about = "Regenerate the options reference from extracted schema types and defaults")]
pub struct Cli {
    /// Configuration override file (defaults to ./optref.toml when it exists)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exit with a failure status if the document is stale instead of writing it
    #[arg(long, conflicts_with = "stdout")]
    pub check: bool,

    /// Print the regenerated document instead of writing it
    #[arg(long)]
    pub stdout: bool,
}

/// Runs the generator and reports the outcome on the terminal.
///
/// A failing extraction step (or an invalid configuration) exits with a
/// failure status and leaves the document untouched. A document that cannot
/// be written is reported but does not change the exit status.
pub fn run(cli: &Cli) -> ExitCode {
    match execute(cli) {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "Regeneration aborted");
            eprintln!("{}: {}", format_error("Error"), e);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<ExitCode> {
    let config = GeneratorConfig::load(cli.config.as_deref())?;
    let generator = DocsGenerator::new(config)?;

    if cli.check {
        let path = generator.document_path().display().to_string();
        return if generator.is_up_to_date()? {
            println!("{} {path}", format_success("Up to date:"));
            Ok(ExitCode::SUCCESS)
        } else {
            eprintln!("{} {path} (run optref to regenerate)", format_warning("Stale:"));
            Ok(ExitCode::FAILURE)
        };
    }

    if cli.stdout {
        print!("{}", generator.render()?);
        return Ok(ExitCode::SUCCESS);
    }

    match generator.generate() {
        Ok(path) => {
            println!("{} {}", format_success("Generated"), path.display());
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ OptrefError::WriteFailed { .. }) => {
            eprintln!("{}: {}", format_error("Error"), e);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Err(e),
    }
}
