//! Sub-parser for `$ref` nodes.
//!
//! The `$ref` string is stored as a path when it is a JSON-pointer form
//! (`#`, `#/...`), as an absolute URI when it carries a scheme, and is
//! otherwise merged onto the inherited base URI (covering both fragment
//! refs like `#point` and relative document refs like `defs.json#point`).

use serde_json::Value;
use url::Url;

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::ir::{TypeDef, TypeIdentifier};
use crate::parser::{ParseContext, ParserResult};
use crate::path::TypePath;

pub(super) fn parse(ctx: &ParseContext<'_>, out: &mut ParserResult) {
    let raw = ctx
        .node
        .get("$ref")
        .and_then(Value::as_str)
        .unwrap_or_default();

    match parse_target(raw, ctx.child_base()) {
        Ok(target) => out.register(
            TypeDef::Reference {
                name: ctx.name.clone(),
                path: ctx.path.clone(),
                target,
            },
            ctx.alias(),
        ),
        Err(message) => out.errors.push(Diagnostic::new(
            DiagnosticKind::UnresolvedReference,
            ctx.path.to_string(),
            message,
        )),
    }
}

fn parse_target(raw: &str, base: &Url) -> Result<TypeIdentifier, String> {
    if raw == "#" || raw.starts_with("#/") {
        return TypePath::from_string(raw)
            .map(TypeIdentifier::Path)
            .map_err(|error| format!("malformed $ref `{}`: {}", raw, error));
    }
    if let Ok(uri) = Url::parse(raw) {
        return Ok(TypeIdentifier::Uri(uri));
    }
    base.join(raw)
        .map(TypeIdentifier::Uri)
        .map_err(|error| format!("malformed $ref `{}`: {}", raw, error))
}

// ===========================================================================
// Tests
// ===========================================================================
