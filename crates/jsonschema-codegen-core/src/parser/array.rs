//! Sub-parsers for array and tuple nodes.
//!
//! `items` as an object yields an array with one child named `items`; `items`
//! as an array yields a tuple with children named `"0"`, `"1"`, ….

use serde_json::Value;

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::ir::TypeDef;
use crate::parser::{parse_node, ParseContext, ParserResult};
use crate::path::TypePath;

pub(super) fn parse_array(ctx: &ParseContext<'_>, out: &mut ParserResult) {
    let items_path = ctx.path.child("items");
    match ctx.node.get("items") {
        Some(items_node) => out.merge(parse_node(
            items_node,
            ctx.child_base(),
            items_path.clone(),
            "items",
            None,
        )),
        None => out.errors.push(Diagnostic::new(
            DiagnosticKind::UnknownNodeType,
            items_path.to_string(),
            "array schema is missing `items`",
        )),
    }

    out.register(
        TypeDef::Array {
            name: ctx.name.clone(),
            path: ctx.path.clone(),
            items: items_path,
        },
        ctx.alias(),
    );
}

pub(super) fn parse_tuple(ctx: &ParseContext<'_>, out: &mut ParserResult) {
    let mut items: Vec<TypePath> = Vec::new();
    if let Some(Value::Array(entries)) = ctx.node.get("items") {
        for (index, entry) in entries.iter().enumerate() {
            let child_name = index.to_string();
            let child_path = ctx.path.child(&child_name);
            items.push(child_path.clone());
            out.merge(parse_node(
                entry,
                ctx.child_base(),
                child_path,
                &child_name,
                None,
            ));
        }
    }

    out.register(
        TypeDef::Tuple {
            name: ctx.name.clone(),
            path: ctx.path.clone(),
            items,
        },
        ctx.alias(),
    );
}

// ===========================================================================
// Tests
// ===========================================================================
