//! Sub-parser for `definitions` documents.
//!
//! The definitions node is a transparent grouping: its members are parsed
//! and registered individually (each under its path and an absolute-URI
//! alias), while the node itself carries no emitted output.

use serde_json::Value;

use crate::ir::TypeDef;
use crate::parser::{parse_node, ParseContext, ParserResult};

pub(super) fn parse(ctx: &ParseContext<'_>, out: &mut ParserResult) {
    parse_members(ctx, out);
    out.register(
        TypeDef::Definitions {
            name: ctx.name.clone(),
            path: ctx.path.clone(),
        },
        ctx.alias(),
    );
}

/// Parse the members of a `definitions` map, naming children by their map
/// keys. Members without an explicit `id` still receive a `<base>#<name>`
/// URI alias so absolute refs against the containing document resolve.
pub(super) fn parse_members(ctx: &ParseContext<'_>, out: &mut ParserResult) {
    let Some(Value::Object(members)) = ctx.node.get("definitions") else {
        return;
    };

    let mut alias_base = ctx.child_base().clone();
    alias_base.set_fragment(None);

    for (member_name, member_node) in members {
        let child_path = ctx.path.child("definitions").child(member_name);
        let fallback_alias = Some(format!("{}#{}", alias_base, member_name));
        out.merge(parse_node(
            member_node,
            ctx.child_base(),
            child_path,
            member_name,
            fallback_alias,
        ));
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use serde_json::json;
    use url::Url;

    use crate::ir::TypeDef;
    use crate::parser::parse_schema;

    #[test]
    fn test_members_register_path_and_uri_alias() {
        let document = json!({
            "id": "http://example.com/definitions.json",
            "title": "Definitions",
            "definitions": {
                "color": {"type": "string", "enum": ["red", "green"]},
                "point": {
                    "type": "object",
                    "properties": {"x": {"type": "number"}, "y": {"type": "number"}},
                    "required": ["x", "y"]
                }
            }
        });
        let uri = Url::parse("http://example.com/definitions.json").unwrap();
        let parsed = parse_schema(&document, &uri);

        assert!(parsed.errors.is_empty(), "errors: {:?}", parsed.errors);
        let types = &parsed.schema.types;
        assert!(types.contains_key("#/definitions/color"));
        assert!(types.contains_key("http://example.com/definitions.json#color"));
        assert!(types.contains_key("#/definitions/point"));
        assert!(types.contains_key("http://example.com/definitions.json#point"));
        // The grouping node itself registers under the root keys only.
        assert!(matches!(types["#"], TypeDef::Definitions { .. }));
        assert!(matches!(
            types["http://example.com/definitions.json"],
            TypeDef::Definitions { .. }
        ));
    }

    #[test]
    fn test_explicit_fragment_ids_take_precedence() {
        let document = json!({
            "id": "http://example.com/definitions.json",
            "definitions": {
                "color": {"id": "#colour", "type": "string", "enum": ["red"]}
            }
        });
        let uri = Url::parse("http://example.com/definitions.json").unwrap();
        let parsed = parse_schema(&document, &uri);

        assert!(parsed
            .schema
            .types
            .contains_key("http://example.com/definitions.json#colour"));
        assert!(!parsed
            .schema
            .types
            .contains_key("http://example.com/definitions.json#color"));
    }

    #[test]
    fn test_object_root_with_definitions_registers_members() {
        let document = json!({
            "id": "http://example.com/root.json",
            "title": "Root",
            "type": "object",
            "properties": {"size": {"$ref": "#/definitions/size"}},
            "definitions": {"size": {"type": "integer"}}
        });
        let uri = Url::parse("http://example.com/root.json").unwrap();
        let parsed = parse_schema(&document, &uri);

        assert!(parsed.errors.is_empty(), "errors: {:?}", parsed.errors);
        assert!(matches!(parsed.schema.types["#"], TypeDef::Object { .. }));
        assert!(parsed.schema.types.contains_key("#/definitions/size"));
        assert!(parsed
            .schema
            .types
            .contains_key("http://example.com/root.json#size"));
    }
}
