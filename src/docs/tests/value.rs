use serde_json::json;

use crate::docs::{DefaultValue, MAX_INLINE_WIDTH, format_value};

fn formatted(value: serde_json::Value) -> String {
    format_value(&DefaultValue::from_json(&value))
}

#[test]
fn absent_reads_as_nil() {
    assert_eq!(format_value(&DefaultValue::Absent), "nil");
    assert_eq!(formatted(json!(null)), "nil");
}

#[test]
fn text_is_not_quoted() {
    assert_eq!(formatted(json!("> ")), "> ");
    assert_eq!(formatted(json!("")), "");
}

#[test]
fn scalars_use_canonical_form() {
    assert_eq!(formatted(json!(true)), "true");
    assert_eq!(formatted(json!(false)), "false");
    assert_eq!(formatted(json!(42)), "42");
    assert_eq!(formatted(json!(-0.5)), "-0.5");
}

#[test]
fn callables_render_as_placeholder() {
    assert_eq!(formatted(json!({ "__function": "" })), "<function>");
    assert_eq!(formatted(json!({ "__function": null })), "<function>");
    assert_eq!(formatted(json!({ "__function": "on_create" })), "<function on_create>");
}

#[test]
fn object_with_function_key_and_more_is_plain_data() {
    let value = DefaultValue::from_json(&json!({ "__function": "x", "other": 1 }));
    assert!(matches!(value, DefaultValue::Structured(_)));
}

#[test]
fn small_structures_render_inline() {
    assert_eq!(formatted(json!([1, 2, 3])), "{ 1, 2, 3 }");
    assert_eq!(formatted(json!([])), "{}");
    assert_eq!(formatted(json!({})), "{}");
    assert_eq!(
        formatted(json!({ "border": "rounded", "height": 0.85 })),
        "{ border = \"rounded\", height = 0.85 }"
    );
}

#[test]
fn non_identifier_keys_are_bracketed() {
    assert_eq!(
        formatted(json!({ "ctrl-q": "select-all", "fn": { "__function": "" } })),
        "{ [\"ctrl-q\"] = \"select-all\", fn = <function> }"
    );
}

#[test]
fn nested_structures_stay_on_one_line() {
    let rendered = formatted(json!({ "a": { "b": [true, null] } }));
    assert_eq!(rendered, "{ a = { b = { true, nil } } }");
    assert!(!rendered.contains('\n'));
}

#[test]
fn oversized_structures_are_truncated_with_ellipsis() {
    let numbers: Vec<u32> = (1..=25).collect();
    let rendered = formatted(json!(numbers));

    assert_eq!(rendered.chars().count(), MAX_INLINE_WIDTH);
    assert!(rendered.ends_with("..."));
    assert!(rendered.starts_with("{ 1, 2, 3,"));
    assert!(!rendered.contains('\n'));
}

#[test]
fn fifteen_element_sequence_fits_inline() {
    let numbers: Vec<u32> = (1..=15).collect();

    assert_eq!(
        formatted(json!(numbers)),
        "{ 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15 }"
    );
}

#[test]
fn structure_at_the_limit_is_kept_whole() {
    let value = json!({ "key": "x".repeat(48) });
    let rendered = formatted(value);

    assert_eq!(rendered.chars().count(), MAX_INLINE_WIDTH);
    assert!(rendered.ends_with(" }"));
}

#[test]
fn truncation_counts_characters_not_bytes() {
    let value = json!(["ééééééééééééééééééééééééééééééé", "ééééééééééééééééééééééééééééééé"]);
    let rendered = formatted(value);

    assert_eq!(rendered.chars().count(), MAX_INLINE_WIDTH);
    assert!(rendered.ends_with("..."));
}

#[test]
fn long_text_is_never_truncated() {
    let text = "x".repeat(120);
    assert_eq!(formatted(json!(text.clone())), text);
}
