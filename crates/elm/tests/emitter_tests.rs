//! End-to-end emission tests over the full parse-then-emit pipeline.

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;

use jsonschema_codegen_core::{generate, DiagnosticKind, EmitSort, GenerateOptions};
use jsonschema_codegen_elm::ElmEmitter;

fn uri(raw: &str) -> Url {
    Url::parse(raw).unwrap()
}

fn definitions_document() -> (Url, serde_json::Value) {
    (
        uri("http://example.com/definitions.json"),
        json!({
            "id": "http://example.com/definitions.json",
            "title": "Definitions",
            "definitions": {
                "color": {
                    "type": "string",
                    "enum": ["red", "yellow", "green", "blue"]
                },
                "point": {
                    "type": "object",
                    "properties": {"x": {"type": "number"}, "y": {"type": "number"}},
                    "required": ["x", "y"]
                }
            }
        }),
    )
}

fn circle_document(color_ref: &str) -> (Url, serde_json::Value) {
    (
        uri("http://example.com/circle.json"),
        json!({
            "id": "http://example.com/circle.json",
            "title": "Circle",
            "type": "object",
            "properties": {
                "center": {"$ref": "http://example.com/definitions.json#point"},
                "color": {"$ref": color_ref},
                "radius": {"type": "number"}
            },
            "required": ["center", "radius"]
        }),
    )
}

fn domain_options() -> GenerateOptions {
    GenerateOptions {
        root_module: "Domain".to_string(),
        ..GenerateOptions::default()
    }
}

#[test]
fn primitive_schema_emits_module_without_declarations() {
    let documents = vec![(
        uri("http://example.com/n.json"),
        json!({ "title": "N", "type": "number" }),
    )];
    let result = generate(&documents, &ElmEmitter, &GenerateOptions::default());

    assert!(result.errors.is_empty(), "errors: {:?}", result.errors);
    assert_eq!(result.files.len(), 1);
    let source = &result.files["N.elm"];
    assert!(source.starts_with("module N exposing (..)"));
    assert!(!source.contains("type alias"));
    assert!(!source.contains("type "));
}

#[test]
fn enum_round_trip_constructors_and_failure_message() {
    let documents = vec![definitions_document()];
    let result = generate(&documents, &ElmEmitter, &GenerateOptions::default());

    assert!(result.errors.is_empty(), "errors: {:?}", result.errors);
    let source = &result.files["Definitions.elm"];
    assert!(source.contains("type Color\n    = Red\n    | Yellow\n    | Green\n    | Blue"));
    assert!(source.contains("Decode.fail (\"Unknown color type: \" ++ value)"));
    assert!(source.contains("Red ->\n            Encode.string \"red\""));
    assert!(source.contains("Blue ->\n            Encode.string \"blue\""));
}

#[test]
fn object_with_required_and_optional_properties() {
    let documents = vec![(
        uri("http://example.com/point.json"),
        json!({
            "title": "Point",
            "type": "object",
            "properties": {"x": {"type": "number"}, "y": {"type": "number"}},
            "required": ["x"]
        }),
    )];
    let result = generate(&documents, &ElmEmitter, &GenerateOptions::default());

    assert!(result.errors.is_empty(), "errors: {:?}", result.errors);
    let source = &result.files["Point.elm"];
    assert!(source.contains("{ x : Float\n    , y : Maybe Float\n    }"));
    assert!(source.contains("|> required \"x\" Decode.float"));
    assert!(source.contains("|> optional \"y\" (Decode.nullable Decode.float) Nothing"));
    // x is encoded unconditionally, y only when present.
    assert!(source.contains("x =\n            [ ( \"x\", Encode.float point.x ) ]"));
    assert!(source.contains("case point.y of"));
    assert!(source.contains("Nothing ->\n                    []"));
}

#[test]
fn cross_schema_references_are_module_qualified() {
    let documents = vec![
        definitions_document(),
        circle_document("http://example.com/definitions.json#color"),
    ];
    let result = generate(&documents, &ElmEmitter, &domain_options());

    assert!(result.errors.is_empty(), "errors: {:?}", result.errors);
    let circle = &result.files["Domain/Circle.elm"];
    assert!(circle.starts_with("module Domain.Circle exposing (..)"));
    assert!(circle.contains("import Domain.Definitions\n"));
    assert!(circle.contains("center : Domain.Definitions.Point"));
    assert!(circle.contains("color : Maybe Domain.Definitions.Color"));
    assert!(circle.contains("|> required \"center\" Domain.Definitions.pointDecoder"));
    assert!(circle
        .contains("|> optional \"color\" (Decode.nullable Domain.Definitions.colorDecoder) Nothing"));
    assert!(circle.contains("Domain.Definitions.encodePoint circle.center"));

    let definitions = &result.files["Domain/Definitions.elm"];
    assert!(definitions.starts_with("module Domain.Definitions exposing (..)"));
    assert!(definitions.contains("type alias Point"));
    assert!(definitions.contains("type Color"));
}

#[test]
fn dangling_reference_emits_placeholder_and_one_diagnostic() {
    let documents = vec![
        definitions_document(),
        circle_document("http://example.com/definitions.json#square"),
    ];
    let result = generate(&documents, &ElmEmitter, &domain_options());

    let unresolved: Vec<_> = result
        .errors
        .iter()
        .filter(|diagnostic| diagnostic.kind == DiagnosticKind::UnresolvedReference)
        .collect();
    assert_eq!(unresolved.len(), 1);
    assert_eq!(
        unresolved[0].identifier,
        "http://example.com/definitions.json#square"
    );

    let circle = &result.files["Domain/Circle.elm"];
    assert!(circle.contains("color : Maybe Unknown"));
    assert!(circle.contains("type Unknown\n    = Unknown"));
    assert!(circle.contains("unknownDecoder"));
}

#[test]
fn emission_is_deterministic() {
    let documents = vec![
        definitions_document(),
        circle_document("http://example.com/definitions.json#color"),
    ];
    let first = generate(&documents, &ElmEmitter, &domain_options());
    let second = generate(&documents, &ElmEmitter, &domain_options());

    assert_eq!(first.files, second.files);
}

#[test]
fn declaration_order_emits_types_in_parse_order() {
    let documents = vec![(
        uri("http://example.com/zoo.json"),
        json!({
            "title": "Zoo",
            "type": "object",
            "properties": {
                "z": {"type": "string", "enum": ["a"]},
                "a": {"type": "string", "enum": ["b"]}
            }
        }),
    )];
    let options = GenerateOptions {
        emit_sort: EmitSort::DeclarationOrder,
        ..GenerateOptions::default()
    };
    let result = generate(&documents, &ElmEmitter, &options);
    let source = &result.files["Zoo.elm"];

    // Children register before their parent: A, Z, then the Zoo record.
    let a_at = source.find("type A\n").unwrap();
    let z_at = source.find("type Z\n").unwrap();
    let zoo_at = source.find("type alias Zoo").unwrap();
    assert!(a_at < z_at && z_at < zoo_at);

    let lexicographic = generate(&documents, &ElmEmitter, &GenerateOptions::default());
    let source = &lexicographic.files["Zoo.elm"];
    let zoo_at = source.find("type alias Zoo").unwrap();
    let a_at = source.find("type A\n").unwrap();
    assert!(zoo_at < a_at);
}

#[test]
fn intra_document_pointer_refs_resolve() {
    let documents = vec![(
        uri("http://example.com/library.json"),
        json!({
            "title": "Library",
            "type": "object",
            "properties": {
                "head": {"$ref": "#/definitions/book"},
                "shelf": {"type": "array", "items": {"$ref": "#/definitions/book"}}
            },
            "required": ["head"],
            "definitions": {
                "book": {
                    "type": "object",
                    "properties": {"title": {"type": "string"}},
                    "required": ["title"]
                }
            }
        }),
    )];
    let result = generate(&documents, &ElmEmitter, &GenerateOptions::default());

    assert!(result.errors.is_empty(), "errors: {:?}", result.errors);
    let source = &result.files["Library.elm"];
    assert!(source.contains("head : Book"));
    assert!(source.contains("|> required \"head\" bookDecoder"));
    assert!(source.contains("type alias Shelf =\n    List Book"));
    assert!(source.contains("type alias Book"));
}

#[test]
fn strict_mode_escalates_warnings_to_errors() {
    let documents = vec![(
        uri("http://example.com/id.json"),
        json!({ "title": "Id", "type": ["string", "string"] }),
    )];

    let relaxed = generate(&documents, &ElmEmitter, &GenerateOptions::default());
    assert_eq!(relaxed.warnings.len(), 1);
    assert!(relaxed.errors.is_empty());

    let strict = generate(
        &documents,
        &ElmEmitter,
        &GenerateOptions {
            strict: true,
            ..GenerateOptions::default()
        },
    );
    assert!(strict.warnings.is_empty());
    assert_eq!(strict.errors.len(), 1);
}
