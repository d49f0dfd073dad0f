//! Field coercion for raw operator input.
//!
//! Admin requests arrive as loosely-typed key/value maps (form posts or JSON
//! objects). Each helper here takes the raw value of one field, or `None`
//! when the field was not sent, and applies a fixed cleaning rule.

use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

use crate::Choice;

/// Raw, unsanitized input for one record.
pub type RawInput = Map<String, Value>;

lazy_static! {
    static ref SCRIPT_OR_STYLE: Regex =
        Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>").unwrap();
    static ref SCRIPT_ELEMENT: Regex =
        Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<script\b[^>]*/?>").unwrap();
    static ref TAG: Regex = Regex::new(r"(?s)<[^>]*>").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Scalar input rendered as text; arrays and objects are not text.
pub fn raw_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) => Some(String::new()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Remove every tag, dropping `<script>`/`<style>` elements with their bodies.
pub fn strip_all_tags(text: &str) -> String {
    let without_code = SCRIPT_OR_STYLE.replace_all(text, "");
    TAG.replace_all(&without_code, "").trim().to_string()
}

/// Remove `<script>` elements only, leaving other markup in place.
pub fn strip_script_elements(markup: &str) -> String {
    SCRIPT_ELEMENT.replace_all(markup, "").into_owned()
}

/// Single-line text: tags stripped, whitespace runs collapsed, trimmed.
pub fn sanitize_text(text: &str) -> String {
    let stripped = strip_all_tags(text);
    WHITESPACE_RUN.replace_all(&stripped, " ").trim().to_string()
}

/// Multi-line text: tags stripped, line breaks kept, trimmed.
pub fn sanitize_textarea(text: &str) -> String {
    strip_all_tags(&text.replace("\r\n", "\n"))
}

/// Identifier keys: lowercase ASCII letters, digits, `_` and `-` only.
pub fn sanitize_key(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

/// URL fields keep only absolute http(s) URLs.
pub fn sanitize_url(text: &str) -> String {
    let trimmed = text.trim();
    let lower = trimmed.to_ascii_lowercase();
    let allowed_scheme = lower.starts_with("http://") || lower.starts_with("https://");
    let clean = !trimmed
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '"' | '\''));

    if allowed_scheme && clean {
        trimmed.to_string()
    } else {
        String::new()
    }
}

/// The text of a field, sanitized as single-line text.
pub fn text_field(value: Option<&Value>) -> Option<String> {
    value.and_then(raw_string).map(|s| sanitize_text(&s))
}

/// The text of a field, sanitized as multi-line text.
pub fn textarea_field(value: Option<&Value>) -> Option<String> {
    value.and_then(raw_string).map(|s| sanitize_textarea(&s))
}

/// The text of a field, untouched.
pub fn verbatim_field(value: Option<&Value>) -> Option<String> {
    value.and_then(raw_string)
}

/// Truthiness of a checkbox-style field.
///
/// Absent, `null`, `false`, `0`, `""`, `"0"`, `[]` and `{}` are false.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !(s.is_empty() || s == "0"),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
    }
}

/// Base-10 integer with a default for absent or unparseable input.
pub fn int_field(value: Option<&Value>, default: i64) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(default),
        Some(Value::String(s)) => s.trim().parse::<i64>().unwrap_or(default),
        Some(Value::Bool(b)) => i64::from(*b),
        _ => default,
    }
}

/// A list of non-empty single-line strings.
///
/// A lone string counts as a one-element list.
pub fn list_field(value: Option<&Value>) -> Option<Vec<String>> {
    let items: Vec<String> = match value? {
        Value::Array(items) => items.iter().filter_map(raw_string).collect(),
        Value::Null => Vec::new(),
        scalar => raw_string(scalar).into_iter().collect(),
    };

    Some(
        items
            .iter()
            .map(|item| sanitize_text(item))
            .filter(|item| !item.is_empty())
            .collect(),
    )
}

/// A keyword list sent either as a list or as a comma-separated string.
pub fn keywords_field(value: Option<&Value>) -> BTreeSet<String> {
    match value {
        Some(Value::String(s)) => s
            .split(',')
            .map(sanitize_text)
            .filter(|item| !item.is_empty())
            .collect(),
        other => list_field(other).unwrap_or_default().into_iter().collect(),
    }
}

/// One value out of a closed set, or `default` on anything else.
pub fn choice_field<T: Choice>(value: Option<&Value>, default: T) -> T {
    value
        .and_then(raw_string)
        .and_then(|s| T::parse(s.trim()))
        .unwrap_or(default)
}

/// A set of values out of a closed set.
///
/// An absent field takes `default`; unknown members are dropped.
pub fn choice_set_field<T: Choice + Ord>(value: Option<&Value>, default: &[T]) -> BTreeSet<T> {
    match list_field(value) {
        None => default.iter().copied().collect(),
        Some(items) => items.iter().filter_map(|item| T::parse(item)).collect(),
    }
}

/// A JSON object, sent either as an object or as a JSON-encoded string.
pub fn json_object_field(value: Option<&Value>) -> Map<String, Value> {
    match value {
        Some(Value::Object(map)) => map.clone(),
        Some(Value::String(s)) => match serde_json::from_str(s) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        },
        _ => Map::new(),
    }
}

/// A JSON array, sent either as an array or as a JSON-encoded string.
pub fn json_array_field(value: Option<&Value>) -> Vec<Value> {
    match value {
        Some(Value::Array(items)) => items.clone(),
        Some(Value::String(s)) => match serde_json::from_str(s) {
            Ok(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// The record id from input, or a freshly generated one.
pub fn id_field(value: Option<&Value>, generate: impl FnOnce() -> String) -> String {
    let id = value.and_then(raw_string).map(|s| sanitize_key(&s)).unwrap_or_default();
    if id.is_empty() {
        generate()
    } else {
        id
    }
}
