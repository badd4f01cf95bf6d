//! Sub-parser for `allOf` / `anyOf` / `oneOf` composition nodes.
//!
//! Alternatives are parsed as child nodes named by positional index; the
//! composition itself stores only their paths.

use serde_json::Value;

use crate::ir::TypeDef;
use crate::parser::{parse_node, ParseContext, ParserResult};
use crate::path::TypePath;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Keyword {
    AllOf,
    AnyOf,
    OneOf,
}

impl Keyword {
    fn field(&self) -> &'static str {
        match self {
            Keyword::AllOf => "allOf",
            Keyword::AnyOf => "anyOf",
            Keyword::OneOf => "oneOf",
        }
    }
}

pub(super) fn parse(ctx: &ParseContext<'_>, out: &mut ParserResult, keyword: Keyword) {
    let mut alternatives: Vec<TypePath> = Vec::new();
    if let Some(Value::Array(entries)) = ctx.node.get(keyword.field()) {
        for (index, entry) in entries.iter().enumerate() {
            let child_name = index.to_string();
            let child_path = ctx.path.child(&child_name);
            alternatives.push(child_path.clone());
            out.merge(parse_node(
                entry,
                ctx.child_base(),
                child_path,
                &child_name,
                None,
            ));
        }
    }

    let name = ctx.name.clone();
    let path = ctx.path.clone();
    let def = match keyword {
        Keyword::AllOf => TypeDef::AllOf {
            name,
            path,
            alternatives,
        },
        Keyword::AnyOf => TypeDef::AnyOf {
            name,
            path,
            alternatives,
        },
        Keyword::OneOf => TypeDef::OneOf {
            name,
            path,
            alternatives,
        },
    };
    out.register(def, ctx.alias());
}

// ===========================================================================
// Tests
// ===========================================================================
