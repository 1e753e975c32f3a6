//! Unit tests for config module
//!
//! Tests defaults, override merging and marker compilation.
//! No filesystem dependencies - all in-memory.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use toml::Value;

use super::loading::merge_two_toml_configs;
use crate::{
    OptrefError,
    config::{GeneratorConfig, SectionSpec, default_sections},
};

#[test]
fn default_layout_follows_fixed_emission_order() {
    let prefixes: Vec<String> = default_sections()
        .into_iter()
        .map(|section| section.prefix)
        .collect();

    assert_eq!(
        prefixes,
        vec![
            "globals",
            "globals.winopts",
            "globals.winopts.preview",
            "globals.previewers.builtin",
            "globals.hls",
        ]
    );
}

#[test]
fn default_globals_use_an_allow_list() {
    let sections = default_sections();
    let globals = &sections[0];

    let allow = globals.allow.as_ref().unwrap();
    assert!(allow.iter().any(|name| name == "prompt"));
    assert!(globals.heading.is_none());
    assert!(globals.snapshot_path.is_empty());
}

#[test]
fn default_routes_nested_schemas_out_of_the_generic_loop() {
    let sections = default_sections();

    assert_eq!(sections[1].skip, vec!["preview".to_string()]);
    assert_eq!(sections[2].snapshot_path, vec!["winopts", "preview"]);

    let registry = sections[4].registry.as_ref().unwrap();
    assert_eq!(registry.member, "fzf");
    assert_eq!(registry.snapshot_key, "fzf_colors");
}

#[test]
fn default_markers_compile() {
    let markers = GeneratorConfig::default().markers().unwrap();

    assert!(markers.is_section_start("## Global Options"));
    assert!(!markers.is_section_start("### Global Options"));
    assert!(markers.is_entry("#### globals.prompt"));
    assert!(!markers.is_entry("### Window Options"));
    assert!(markers.is_trailer_start("## Pickers"));
}

#[test]
fn fallback_header_contains_section_anchor() {
    let config = GeneratorConfig::default();
    let markers = config.markers().unwrap();

    assert!(
        config
            .document
            .fallback_header
            .lines()
            .any(|line| markers.is_section_start(line))
    );
}

#[test]
fn empty_override_keeps_defaults() {
    let config = GeneratorConfig::from_toml_str("", None).unwrap();
    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn override_merges_nested_tables() {
    let toml_str = r#"
        [document]
        path = "doc/reference.md"

        [extraction]
        program = "lua-doc-extract"
    "#;

    let config = GeneratorConfig::from_toml_str(toml_str, None).unwrap();

    assert_eq!(config.document.path, PathBuf::from("doc/reference.md"));
    assert_eq!(
        config.document.section_start,
        GeneratorConfig::default().document.section_start
    );
    assert_eq!(config.extraction.program, "lua-doc-extract");
    assert_eq!(config.extraction.args, GeneratorConfig::default().extraction.args);
    assert_eq!(config.sections, default_sections());
}

#[test]
fn override_replaces_section_list() {
    let toml_str = r#"
        [[sections]]
        type_name = "Base"
        prefix = "globals"
        allow = ["prompt"]
    "#;

    let config = GeneratorConfig::from_toml_str(toml_str, None).unwrap();

    let mut expected = SectionSpec::new("Base", "globals", &[]);
    expected.allow = Some(vec!["prompt".to_string()]);
    assert_eq!(config.sections, vec![expected]);
}

#[test]
fn override_with_snapshot_command() {
    let toml_str = r#"
        [snapshot.command]
        program = "nvim"
        args = ["--headless", "-l", "scripts/dump_defaults.lua"]
    "#;

    let config = GeneratorConfig::from_toml_str(toml_str, None).unwrap();
    let command = config.snapshot.command.unwrap();

    assert_eq!(command.program, "nvim");
    assert_eq!(command.display(), "nvim --headless -l scripts/dump_defaults.lua");
    assert_eq!(config.snapshot.path, GeneratorConfig::default().snapshot.path);
}

#[test]
fn invalid_toml_is_reported_with_location() {
    let result = GeneratorConfig::from_toml_str("[document\npath = ", Some(Path::new("x.toml")));

    match result {
        Err(OptrefError::TomlParseError { location, .. }) => assert!(location.ends_with("x.toml")),
        other => panic!("expected TOML parse error, got {other:?}"),
    }
}

#[test]
fn mistyped_override_fails_validation() {
    let result = GeneratorConfig::from_toml_str("sections = 3", None);
    assert!(matches!(result, Err(OptrefError::ConfigValidation { .. })));
}

#[test]
fn invalid_marker_pattern_names_the_marker() {
    let config =
        GeneratorConfig::from_toml_str("[document]\nfirst_entry = \"^(####\"", None).unwrap();

    match config.markers() {
        Err(OptrefError::ConfigValidation { component, .. }) => {
            assert_eq!(component, "document.markers.first_entry");
        }
        other => panic!("expected marker validation error, got {other:?}"),
    }
}

#[test]
fn merge_prefers_overlay_and_keeps_base_keys() {
    let base: Value = toml::from_str(
        r#"
        [a]
        x = 1
        y = 2
        list = [1, 2]
    "#,
    )
    .unwrap();
    let overlay: Value = toml::from_str(
        r#"
        [a]
        y = 20
        list = [3]
    "#,
    )
    .unwrap();

    let merged = merge_two_toml_configs(base, overlay);
    let table = merged.get("a").unwrap();

    assert_eq!(table.get("x").and_then(Value::as_integer), Some(1));
    assert_eq!(table.get("y").and_then(Value::as_integer), Some(20));
    assert_eq!(table.get("list").and_then(Value::as_array).map(Vec::len), Some(1));
}
