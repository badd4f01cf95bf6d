//! Whole-document parser tests: dictionary laws, identity aliases, and
//! duplicate handling.

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;

use jsonschema_codegen_core::{
    parse_schema, parse_schemas, DiagnosticKind, PrimitiveType, TypeDef,
};

fn uri(raw: &str) -> Url {
    Url::parse(raw).unwrap()
}

#[test]
fn primitive_document_has_single_root_entry() {
    let document = json!({ "title": "N", "type": "number" });
    let parsed = parse_schema(&document, &uri("http://example.com/n.json"));

    assert!(parsed.errors.is_empty(), "errors: {:?}", parsed.errors);
    assert_eq!(parsed.schema.title, "N");
    match &parsed.schema.types["#"] {
        TypeDef::Primitive { name, base, .. } => {
            assert_eq!(name, "#");
            assert_eq!(*base, PrimitiveType::Number);
        }
        other => panic!("unexpected root: {:?}", other),
    }
    // Root also registers under the schema id.
    assert!(parsed.schema.types.contains_key("http://example.com/n.json"));
    assert_eq!(parsed.schema.order, vec!["#".to_string()]);
}

#[test]
fn explicit_id_field_overrides_document_uri() {
    let document = json!({ "id": "http://example.com/actual.json", "type": "number" });
    let parsed = parse_schema(&document, &uri("file:///tmp/whatever.json"));

    assert_eq!(parsed.schema.id.as_str(), "http://example.com/actual.json");
    assert!(parsed
        .schema
        .types
        .contains_key("http://example.com/actual.json"));
}

#[test]
fn every_node_is_registered_under_its_own_path() {
    let document = json!({
        "id": "http://example.com/book.json",
        "title": "Book",
        "type": "object",
        "properties": {
            "title": {"type": "string"},
            "authors": {"type": "array", "items": {"type": "string"}},
            "edition": {
                "type": "object",
                "properties": {"year": {"type": "integer"}}
            }
        },
        "required": ["title"]
    });
    let parsed = parse_schema(&document, &uri("http://example.com/book.json"));
    assert!(parsed.errors.is_empty(), "errors: {:?}", parsed.errors);

    for (key, def) in &parsed.schema.types {
        if key.starts_with('#') {
            assert_eq!(
                def.path().to_string(),
                *key,
                "canonical key must round-trip through the node's path"
            );
            assert_eq!(def.name(), def.path().name());
        }
    }
    assert!(parsed.schema.types.contains_key("#/authors/items"));
    assert!(parsed.schema.types.contains_key("#/edition/year"));
}

#[test]
fn uri_alias_fragment_matches_node_name() {
    let document = json!({
        "id": "http://example.com/defs.json",
        "title": "Defs",
        "definitions": {
            "color": {"type": "string", "enum": ["red"]},
            "point": {
                "id": "#point",
                "type": "object",
                "properties": {"x": {"type": "number"}}
            }
        }
    });
    let parsed = parse_schema(&document, &uri("http://example.com/defs.json"));
    assert!(parsed.errors.is_empty(), "errors: {:?}", parsed.errors);

    for (key, def) in &parsed.schema.types {
        let Some((_, fragment)) = key.split_once('#') else {
            continue;
        };
        if key.starts_with('#') || fragment.is_empty() {
            continue;
        }
        assert_eq!(
            def.path().name(),
            fragment,
            "alias key {} must point at a node named after its fragment",
            key
        );
    }
    assert!(parsed
        .schema
        .types
        .contains_key("http://example.com/defs.json#color"));
    assert!(parsed
        .schema
        .types
        .contains_key("http://example.com/defs.json#point"));
}

#[test]
fn parser_is_deterministic() {
    let document = json!({
        "title": "Sample",
        "type": "object",
        "properties": {
            "b": {"type": "string"},
            "a": {"oneOf": [{"type": "integer"}, {"type": "null"}]}
        }
    });
    let first = parse_schema(&document, &uri("http://example.com/sample.json"));
    let second = parse_schema(&document, &uri("http://example.com/sample.json"));

    assert_eq!(first.schema, second.schema);
    assert_eq!(first.errors, second.errors);
    assert_eq!(first.warnings, second.warnings);
}

#[test]
fn duplicate_schema_id_keeps_first_and_reports_once() {
    let shared = "http://example.com/shared.json";
    let first_doc = json!({ "id": shared, "title": "First", "type": "number" });
    let second_doc = json!({ "id": shared, "title": "Second", "type": "string" });

    let corpus = parse_schemas(&[
        (uri("http://example.com/a.json"), first_doc),
        (uri("http://example.com/b.json"), second_doc),
    ]);

    let duplicates: Vec<_> = corpus
        .errors
        .iter()
        .filter(|diagnostic| diagnostic.kind == DiagnosticKind::DuplicateTypeKey)
        .collect();
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].identifier, shared);

    assert_eq!(corpus.schemas.len(), 1);
    assert_eq!(corpus.schemas[shared].title, "First");
}

#[test]
fn unclassifiable_root_reports_unknown_node_type() {
    let document = json!({ "title": "Odd", "type": "frobnicate" });
    let parsed = parse_schema(&document, &uri("http://example.com/odd.json"));

    assert_eq!(parsed.errors.len(), 1);
    assert_eq!(parsed.errors[0].kind, DiagnosticKind::UnknownNodeType);
    assert_eq!(parsed.errors[0].identifier, "#");
    // The schema is still returned, just without a usable root type.
    assert_eq!(parsed.schema.title, "Odd");
}

#[test]
fn sibling_errors_are_all_reported_in_one_run() {
    let document = json!({
        "title": "Broken",
        "type": "object",
        "properties": {
            "good": {"type": "string"},
            "bad": {"type": "frobnicate"},
            "worse": {"enum": []}
        },
        "required": ["good", "ghost"]
    });
    let parsed = parse_schema(&document, &uri("http://example.com/broken.json"));

    let kinds: Vec<DiagnosticKind> = parsed.errors.iter().map(|d| d.kind).collect();
    assert!(kinds.contains(&DiagnosticKind::UnknownNodeType));
    assert!(kinds.contains(&DiagnosticKind::InvalidEnumValue));
    assert!(kinds.contains(&DiagnosticKind::MissingRequiredPropertyTarget));
    // The good parts still parsed.
    assert!(parsed.schema.types.contains_key("#/good"));
}

#[test]
fn urn_ids_are_kept_verbatim() {
    let document = json!({
        "id": "urn:example:vehicle",
        "title": "Vehicle",
        "type": "object",
        "properties": {"wheels": {"type": "integer"}}
    });
    let parsed = parse_schema(&document, &uri("http://example.com/vehicle.json"));

    assert!(parsed.errors.is_empty(), "errors: {:?}", parsed.errors);
    assert_eq!(parsed.schema.id.as_str(), "urn:example:vehicle");
    assert!(parsed.schema.types.contains_key("urn:example:vehicle"));
}

#[test]
fn invalid_id_is_reported_and_parsing_continues() {
    let document = json!({
        "title": "Sloppy",
        "type": "object",
        "properties": {
            "x": {"id": "http://[broken", "type": "number"}
        }
    });
    let parsed = parse_schema(&document, &uri("http://example.com/sloppy.json"));

    assert_eq!(parsed.errors.len(), 1);
    assert_eq!(parsed.errors[0].kind, DiagnosticKind::InvalidIdUri);
    assert!(parsed.schema.types.contains_key("#/x"));
}
