//! Display formatting for resolved default values.
//!
//! Defaults read from the snapshot are classified into a small closed set of
//! kinds and rendered as the short single-line strings shown next to each
//! documented option.

use serde_json::{Map, Number, Value};

/// Key a snapshot producer uses to mark a callable value.
///
/// A callable is encoded as an object with this single key; its value is an
/// optional name for the function.
pub const CALLABLE_KEY: &str = "__function";

/// Longest rendering of a structured value before it gets truncated.
pub const MAX_INLINE_WIDTH: usize = 60;

const ELLIPSIS: &str = "...";

/// A default value in effect for one configuration path.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// No value at the path (unset branch or explicit null).
    Absent,
    /// Plain text, rendered without quotes.
    Text(String),
    /// A boolean flag.
    Boolean(bool),
    /// An integer or floating point number.
    Number(Number),
    /// A nested table or sequence.
    Structured(Value),
    /// A function value, carried as its placeholder tag.
    Callable(String),
}

impl DefaultValue {
    /// Classifies a raw snapshot node.
    pub fn from_json(value: &Value) -> Self {
        if let Some(tag) = callable_placeholder(value) {
            return DefaultValue::Callable(tag);
        }

        match value {
            Value::Null => DefaultValue::Absent,
            Value::Bool(b) => DefaultValue::Boolean(*b),
            Value::Number(n) => DefaultValue::Number(n.clone()),
            Value::String(s) => DefaultValue::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => DefaultValue::Structured(value.clone()),
        }
    }
}

/// Returns the placeholder for a callable-encoded node, if it is one.
///
/// ```
/// use serde_json::json;
/// use optref::docs::callable_placeholder;
///
/// assert_eq!(callable_placeholder(&json!({ "__function": "" })).as_deref(), Some("<function>"));
/// assert_eq!(
///     callable_placeholder(&json!({ "__function": "on_close" })).as_deref(),
///     Some("<function on_close>")
/// );
/// assert_eq!(callable_placeholder(&json!({ "a": 1 })), None);
/// ```
pub fn callable_placeholder(value: &Value) -> Option<String> {
    let table = value.as_object()?;
    if table.len() != 1 {
        return None;
    }

    let tag = table.get(CALLABLE_KEY)?;
    match tag.as_str() {
        Some(name) if !name.is_empty() => Some(format!("<function {name}>")),
        _ => Some("<function>".to_string()),
    }
}

/// Formats a default value for display.
///
/// Absent values read as `nil`, text is returned untouched and nested
/// structures collapse to a single line of at most [`MAX_INLINE_WIDTH`]
/// characters.
pub fn format_value(value: &DefaultValue) -> String {
    match value {
        DefaultValue::Absent => "nil".to_string(),
        DefaultValue::Text(s) => s.clone(),
        DefaultValue::Boolean(b) => b.to_string(),
        DefaultValue::Number(n) => n.to_string(),
        DefaultValue::Callable(tag) => tag.clone(),
        DefaultValue::Structured(nested) => truncate_inline(inspect_inline(nested)),
    }
}

fn truncate_inline(rendered: String) -> String {
    if rendered.chars().count() <= MAX_INLINE_WIDTH {
        return rendered;
    }

    let keep = MAX_INLINE_WIDTH - ELLIPSIS.len();
    let mut truncated: String = rendered.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

fn inspect_inline(value: &Value) -> String {
    if let Some(tag) = callable_placeholder(value) {
        return tag;
    }

    match value {
        Value::Null => "nil".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(_) => value.to_string(),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(inspect_inline).collect();
            wrap_braces(&parts)
        }
        Value::Object(table) => wrap_braces(&inspect_entries(table)),
    }
}

fn inspect_entries(table: &Map<String, Value>) -> Vec<String> {
    table
        .iter()
        .map(|(key, nested)| {
            if is_identifier(key) {
                format!("{key} = {}", inspect_inline(nested))
            } else {
                format!("[{}] = {}", Value::String(key.clone()), inspect_inline(nested))
            }
        })
        .collect()
}

fn wrap_braces(parts: &[String]) -> String {
    if parts.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {} }}", parts.join(", "))
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
