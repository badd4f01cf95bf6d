//! Elm identifier derivation.
//!
//! Schema names are arbitrary JSON strings; everything rendered into a
//! module goes through these helpers so the output is always a valid Elm
//! identifier.

use std::sync::OnceLock;

use heck::{ToLowerCamelCase, ToUpperCamelCase};
use jsonschema_codegen_core::SchemaDefinition;
use regex::Regex;
use serde_json::Value;

/// Elm reserved words that cannot be used as record field names.
const KEYWORDS: &[&str] = &[
    "as", "case", "else", "exposing", "if", "import", "in", "let", "module", "of", "port",
    "then", "type", "where",
];

fn non_word() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Word characters and whitespace survive; whitespace acts as a word
    // break for the case conversion below.
    RE.get_or_init(|| Regex::new(r"[^\w\s]+").expect("static pattern compiles"))
}

/// Upper-camel type name for a node name.
pub(crate) fn type_name(raw: &str) -> String {
    let cleaned = non_word().replace_all(raw, " ");
    let name = cleaned.to_upper_camel_case();
    if name.is_empty() {
        "Unnamed".to_string()
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        // Positional composition children are named "0", "1", ….
        format!("Alt{}", name)
    } else {
        name
    }
}

/// Lower-camel record field name, kept clear of Elm keywords.
pub(crate) fn field_name(raw: &str) -> String {
    let cleaned = non_word().replace_all(raw, " ");
    let mut name = cleaned.to_lower_camel_case();
    if name.is_empty() {
        name = "field".to_string();
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name = format!("field{}", name);
    }
    if KEYWORDS.contains(&name.as_str()) {
        name.push('_');
    }
    name
}

pub(crate) fn decoder_name(type_name: &str) -> String {
    format!("{}Decoder", type_name.to_lower_camel_case())
}

pub(crate) fn encoder_name(type_name: &str) -> String {
    format!("encode{}", type_name)
}

/// Constructor name for one enum literal, prefixed with the enum type name
/// whenever the literal alone would not form a valid constructor.
pub(crate) fn constructor_name(enum_type: &str, value: &Value) -> String {
    if let Value::Bool(flag) = value {
        // Bare True/False would collide with Basics.
        return format!("{}{}", enum_type, if *flag { "True" } else { "False" });
    }
    let raw = match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    let name = non_word().replace_all(&raw, " ").to_upper_camel_case();
    if name.is_empty() {
        format!("{}Value", enum_type)
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("{}{}", enum_type, name)
    } else {
        name
    }
}

/// Module title for a schema: the title, capitalized with non-word
/// characters stripped; falls back to the file stem of the schema id.
pub(crate) fn module_title(schema: &SchemaDefinition) -> String {
    let cleaned = non_word().replace_all(&schema.title, " ");
    let title = cleaned.to_upper_camel_case();
    if !title.is_empty() && !title.starts_with(|c: char| c.is_ascii_digit()) {
        return title;
    }
    let stem = schema
        .id
        .path_segments()
        .and_then(|segments| segments.filter(|segment| !segment.is_empty()).last())
        .map(|segment| segment.split('.').next().unwrap_or(segment))
        .unwrap_or_default();
    type_name(stem)
}

/// Full module name under the configured root.
pub(crate) fn module_name(root_module: &str, title: &str) -> String {
    if root_module.is_empty() {
        title.to_string()
    } else {
        format!("{}.{}", root_module, title)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
