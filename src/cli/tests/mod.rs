//! Unit tests for CLI module
//!
//! Tests argument parsing and output formatting.
//! No generator runs or filesystem access.

#![allow(clippy::unwrap_used)]

use std::path::Path;

use clap::Parser;

use crate::cli::{
    Cli,
    formatting::{Colors, format_error, format_success, format_warning},
};

#[test]
fn parses_without_arguments() {
    let cli = Cli::try_parse_from(["optref"]).unwrap();

    assert!(cli.config.is_none());
    assert!(!cli.check);
    assert!(!cli.stdout);
}

#[test]
fn parses_config_path() {
    let cli = Cli::try_parse_from(["optref", "--config", "docs/optref.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(Path::new("docs/optref.toml")));

    let cli = Cli::try_parse_from(["optref", "-c", "other.toml", "--check"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(Path::new("other.toml")));
    assert!(cli.check);
}

#[test]
fn check_conflicts_with_stdout() {
    let result = Cli::try_parse_from(["optref", "--check", "--stdout"]);
    assert!(result.is_err());
}

#[test]
fn rejects_positional_arguments() {
    let result = Cli::try_parse_from(["optref", "OPTIONS.md"]);
    assert!(result.is_err());
}

#[test]
fn formatting_wraps_text_in_color_codes() {
    let error = format_error("Error");
    assert!(error.starts_with(Colors::BOLD));
    assert!(error.contains(Colors::RED));
    assert!(error.contains("Error"));
    assert!(error.ends_with(Colors::RESET));

    assert!(format_success("Generated").contains(Colors::GREEN));
    assert!(format_warning("Stale:").contains(Colors::YELLOW));
}
