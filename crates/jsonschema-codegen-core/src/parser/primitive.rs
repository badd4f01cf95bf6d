//! Sub-parsers for primitive nodes and primitive unions.

use serde_json::Value;

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::ir::{PrimitiveType, TypeDef};
use crate::parser::{ParseContext, ParserResult};

/// `{"type": "<primitive>"}`: no children.
pub(super) fn parse(ctx: &ParseContext<'_>, out: &mut ParserResult) {
    let base = ctx
        .node
        .get("type")
        .and_then(Value::as_str)
        .and_then(PrimitiveType::from_keyword)
        .unwrap_or(PrimitiveType::String);

    out.register(
        TypeDef::Primitive {
            name: ctx.name.clone(),
            path: ctx.path.clone(),
            base,
        },
        ctx.alias(),
    );
}

/// `{"type": ["string", "integer", ...]}`: an ordered union of primitive
/// bases. Non-primitive members are reported and dropped.
pub(super) fn parse_union(ctx: &ParseContext<'_>, out: &mut ParserResult) {
    let mut members: Vec<PrimitiveType> = Vec::new();
    if let Some(Value::Array(entries)) = ctx.node.get("type") {
        for entry in entries {
            match entry.as_str().and_then(PrimitiveType::from_keyword) {
                Some(member) if members.contains(&member) => {
                    out.warnings.push(Diagnostic::new(
                        DiagnosticKind::UnknownNodeType,
                        ctx.path.to_string(),
                        format!("union member `{}` listed more than once", member),
                    ));
                }
                Some(member) => members.push(member),
                None => out.errors.push(Diagnostic::new(
                    DiagnosticKind::UnknownNodeType,
                    ctx.path.to_string(),
                    format!("union member {} is not a primitive type keyword", entry),
                )),
            }
        }
    }

    out.register(
        TypeDef::Union {
            name: ctx.name.clone(),
            path: ctx.path.clone(),
            types: members,
        },
        ctx.alias(),
    );
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use url::Url;

    use crate::ir::{PrimitiveType, TypeDef};
    use crate::parser::parse_node;
    use crate::path::TypePath;

    fn base_uri() -> Url {
        Url::parse("http://example.com/schema.json").unwrap()
    }

    #[test]
    fn test_primitive_node() {
        let node = json!({"type": "number"});
        let result = parse_node(&node, &base_uri(), TypePath::root().child("x"), "x", None);

        assert!(result.errors.is_empty());
        match &result.types["#/x"] {
            TypeDef::Primitive { name, base, .. } => {
                assert_eq!(name, "x");
                assert_eq!(*base, PrimitiveType::Number);
            }
            other => panic!("unexpected def: {:?}", other),
        }
    }

    #[test]
    fn test_union_preserves_member_order() {
        let node = json!({"type": ["null", "string", "integer"]});
        let result = parse_node(&node, &base_uri(), TypePath::root().child("id"), "id", None);

        match &result.types["#/id"] {
            TypeDef::Union { types, .. } => {
                assert_eq!(
                    types,
                    &[
                        PrimitiveType::Null,
                        PrimitiveType::String,
                        PrimitiveType::Integer
                    ]
                );
            }
            other => panic!("unexpected def: {:?}", other),
        }
    }

    #[test]
    fn test_union_rejects_non_primitive_members() {
        let node = json!({"type": ["string", "object"]});
        let result = parse_node(&node, &base_uri(), TypePath::root().child("id"), "id", None);

        assert_eq!(result.errors.len(), 1);
        match &result.types["#/id"] {
            TypeDef::Union { types, .. } => assert_eq!(types, &[PrimitiveType::String]),
            other => panic!("unexpected def: {:?}", other),
        }
    }
}
