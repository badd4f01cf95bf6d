//! Sub-parser for object nodes.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::ir::TypeDef;
use crate::parser::{parse_node, ParseContext, ParserResult};
use crate::path::TypePath;

/// Properties are parsed as child nodes named by property name; the emitted
/// IR holds only their paths. `required` defaults to the empty set; entries
/// that name no declared property are reported.
pub(super) fn parse(ctx: &ParseContext<'_>, out: &mut ParserResult) {
    let mut properties: BTreeMap<String, TypePath> = BTreeMap::new();
    if let Some(Value::Object(raw_properties)) = ctx.node.get("properties") {
        for (property_name, property_node) in raw_properties {
            let child_path = ctx.path.child(property_name);
            properties.insert(property_name.clone(), child_path.clone());
            out.merge(parse_node(
                property_node,
                ctx.child_base(),
                child_path,
                property_name,
                None,
            ));
        }
    }

    let mut required: BTreeSet<String> = BTreeSet::new();
    if let Some(Value::Array(entries)) = ctx.node.get("required") {
        for entry in entries.iter().filter_map(Value::as_str) {
            if properties.contains_key(entry) {
                required.insert(entry.to_string());
            } else {
                out.errors.push(Diagnostic::new(
                    DiagnosticKind::MissingRequiredPropertyTarget,
                    ctx.path.to_string(),
                    format!("required property `{}` is not declared in `properties`", entry),
                ));
            }
        }
    }

    out.register(
        TypeDef::Object {
            name: ctx.name.clone(),
            path: ctx.path.clone(),
            required,
            properties,
        },
        ctx.alias(),
    );
}

// ===========================================================================
// Tests
// ===========================================================================
