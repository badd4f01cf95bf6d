//! Shape-based node classification.
//!
//! Decides, from the shape of a raw schema node, which IR kind it should be
//! parsed as. Rules are tried in a fixed order so ambiguous nodes resolve
//! deterministically; falling off the list yields `None` and the caller
//! reports `unknown_node_type`.

use serde_json::Value;

use crate::ir::PrimitiveType;

/// IR kind a node should be parsed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    AllOf,
    AnyOf,
    OneOf,
    Enum,
    Tuple,
    Array,
    Object,
    Union,
    Primitive,
    Reference,
    Definitions,
}

/// Classify a raw schema node.
///
/// `at_root` enables the `definitions`-document rule, which only applies to
/// the document root.
pub fn classify(node: &Value, at_root: bool) -> Option<NodeKind> {
    let object = node.as_object()?;

    if object.contains_key("allOf") {
        return Some(NodeKind::AllOf);
    }
    if object.contains_key("anyOf") {
        return Some(NodeKind::AnyOf);
    }
    if object.contains_key("oneOf") {
        return Some(NodeKind::OneOf);
    }
    if object.contains_key("enum") {
        return Some(NodeKind::Enum);
    }

    let type_field = object.get("type");
    if type_field.and_then(Value::as_str) == Some("array") {
        return match object.get("items") {
            Some(Value::Array(_)) => Some(NodeKind::Tuple),
            _ => Some(NodeKind::Array),
        };
    }
    if type_field.and_then(Value::as_str) == Some("object") || object.contains_key("properties") {
        return Some(NodeKind::Object);
    }
    if matches!(type_field, Some(Value::Array(_))) {
        return Some(NodeKind::Union);
    }
    if let Some(keyword) = type_field.and_then(Value::as_str) {
        if PrimitiveType::from_keyword(keyword).is_some() {
            return Some(NodeKind::Primitive);
        }
    }

    if object.contains_key("$ref") {
        return Some(NodeKind::Reference);
    }
    if at_root && object.contains_key("definitions") {
        return Some(NodeKind::Definitions);
    }

    None
}

/// Compact shape fingerprint used in `unknown_node_type` messages: the
/// node's key set, or its JSON type for non-objects.
pub fn fingerprint(node: &Value) -> String {
    match node {
        Value::Object(object) => {
            let keys: Vec<&str> = object.keys().map(String::as_str).collect();
            format!("{{{}}}", keys.join(", "))
        }
        Value::Array(_) => "array".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Null => "null".to_string(),
    }
}

// ===========================================================================
// Tests
// ===========================================================================
