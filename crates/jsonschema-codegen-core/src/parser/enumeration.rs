//! Sub-parser for enum nodes.
//!
//! Enum children are not recursed; the primitive base and the raw value list
//! are captured directly.

use serde_json::Value;

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::ir::{PrimitiveType, TypeDef};
use crate::parser::{ParseContext, ParserResult};

pub(super) fn parse(ctx: &ParseContext<'_>, out: &mut ParserResult) {
    let base = ctx
        .node
        .get("type")
        .and_then(Value::as_str)
        .and_then(PrimitiveType::from_keyword)
        .unwrap_or(PrimitiveType::String);

    let mut values: Vec<Value> = Vec::new();
    if let Some(Value::Array(entries)) = ctx.node.get("enum") {
        for entry in entries {
            if !base.matches(entry) {
                out.errors.push(Diagnostic::new(
                    DiagnosticKind::InvalidEnumValue,
                    ctx.path.to_string(),
                    format!("enum value {} does not match declared base `{}`", entry, base),
                ));
                continue;
            }
            if values.contains(entry) {
                out.errors.push(Diagnostic::new(
                    DiagnosticKind::InvalidEnumValue,
                    ctx.path.to_string(),
                    format!("enum value {} is listed more than once", entry),
                ));
                continue;
            }
            values.push(entry.clone());
        }
    }
    if values.is_empty() {
        out.errors.push(Diagnostic::new(
            DiagnosticKind::InvalidEnumValue,
            ctx.path.to_string(),
            "enum has no usable values",
        ));
    }

    out.register(
        TypeDef::Enum {
            name: ctx.name.clone(),
            path: ctx.path.clone(),
            base,
            values,
        },
        ctx.alias(),
    );
}

// ===========================================================================
// Tests
// ===========================================================================
