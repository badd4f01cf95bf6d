//! Recursive descent over raw schema documents.
//!
//! Each IR kind has a dedicated sub-parser; [`parse_node`] classifies the raw
//! node and dispatches. All sub-parsers share one contract: they receive the
//! raw JSON node together with the identity threaded down from the root
//! (inherited parent URI, resolved own id, path, name) and add a
//! [`ParserResult`] fragment that the caller merges. Parsing never aborts on
//! the first problem; independent sibling errors are all reported in one run.

mod array;
mod composition;
mod definitions;
mod enumeration;
mod object;
mod primitive;
mod reference;
pub mod result;

use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::classify::{classify, fingerprint, NodeKind};
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::ir::{SchemaDefinition, SchemaDictionary};
use crate::path::TypePath;

pub use result::ParserResult;

/// Result of parsing one document.
#[derive(Debug, Clone)]
pub struct ParsedSchema {
    pub schema: SchemaDefinition,
    pub warnings: Vec<Diagnostic>,
    pub errors: Vec<Diagnostic>,
}

/// Result of parsing a whole input set.
#[derive(Debug, Clone, Default)]
pub struct ParsedCorpus {
    pub schemas: SchemaDictionary,
    pub warnings: Vec<Diagnostic>,
    pub errors: Vec<Diagnostic>,
}

/// Identity of the node currently being parsed.
#[derive(Debug, Clone)]
pub(crate) struct ParseContext<'a> {
    pub node: &'a Value,
    /// Nearest ancestor's absolute URI.
    pub parent_uri: Url,
    /// This node's own `id`, already merged onto `parent_uri`.
    pub id: Option<Url>,
    pub path: TypePath,
    pub name: String,
    /// URI alias imposed by the surrounding container (`definitions`
    /// members); the node's own id takes precedence.
    pub fallback_alias: Option<String>,
}

impl ParseContext<'_> {
    /// Base URI inherited by children: the node's own id when it carries one
    /// with a non-`urn` scheme, the inherited parent URI otherwise.
    pub fn child_base(&self) -> &Url {
        match &self.id {
            Some(id) if id.scheme() != "urn" => id,
            _ => &self.parent_uri,
        }
    }

    /// Absolute-URI alias this node registers under, if any.
    pub fn alias(&self) -> Option<String> {
        if let Some(id) = &self.id {
            if self.path.is_root() {
                return Some(id.to_string());
            }
            if id.fragment().is_some_and(|fragment| !fragment.is_empty()) {
                return Some(id.to_string());
            }
            return Some(format!("{}#{}", id, self.name));
        }
        self.fallback_alias.clone()
    }
}

/// Read and resolve a node's `id` field (`$id` accepted as an alias).
///
/// `urn:` ids are used as-is; everything else is RFC 3986-merged onto the
/// inherited parent URI.
fn node_id(node: &Value, parent_uri: &Url, path: &TypePath) -> Result<Option<Url>, Diagnostic> {
    let raw = node
        .get("id")
        .or_else(|| node.get("$id"))
        .and_then(Value::as_str);
    let Some(raw) = raw else {
        return Ok(None);
    };

    let resolved = if raw.starts_with("urn:") {
        Url::parse(raw)
    } else {
        parent_uri.join(raw)
    };
    match resolved {
        Ok(uri) => Ok(Some(uri)),
        Err(parse_error) => Err(Diagnostic::new(
            DiagnosticKind::InvalidIdUri,
            path.to_string(),
            format!("id `{}` is not a valid URI: {}", raw, parse_error),
        )),
    }
}

/// Parse one node and its descendants.
pub(crate) fn parse_node(
    node: &Value,
    parent_uri: &Url,
    path: TypePath,
    name: &str,
    fallback_alias: Option<String>,
) -> ParserResult {
    let mut result = ParserResult::new();
    let id = match node_id(node, parent_uri, &path) {
        Ok(id) => id,
        Err(diagnostic) => {
            result.errors.push(diagnostic);
            None
        }
    };
    let ctx = ParseContext {
        node,
        parent_uri: parent_uri.clone(),
        id,
        path,
        name: name.to_string(),
        fallback_alias,
    };
    dispatch(&ctx, &mut result);
    result
}

fn dispatch(ctx: &ParseContext<'_>, result: &mut ParserResult) {
    match classify(ctx.node, ctx.path.is_root()) {
        Some(NodeKind::AllOf) => composition::parse(ctx, result, composition::Keyword::AllOf),
        Some(NodeKind::AnyOf) => composition::parse(ctx, result, composition::Keyword::AnyOf),
        Some(NodeKind::OneOf) => composition::parse(ctx, result, composition::Keyword::OneOf),
        Some(NodeKind::Enum) => enumeration::parse(ctx, result),
        Some(NodeKind::Tuple) => array::parse_tuple(ctx, result),
        Some(NodeKind::Array) => array::parse_array(ctx, result),
        Some(NodeKind::Object) => object::parse(ctx, result),
        Some(NodeKind::Union) => primitive::parse_union(ctx, result),
        Some(NodeKind::Primitive) => primitive::parse(ctx, result),
        Some(NodeKind::Reference) => reference::parse(ctx, result),
        Some(NodeKind::Definitions) => definitions::parse(ctx, result),
        None => {
            result.errors.push(Diagnostic::new(
                DiagnosticKind::UnknownNodeType,
                ctx.path.to_string(),
                format!(
                    "node `{}` with shape {} does not match any supported schema form",
                    ctx.name,
                    fingerprint(ctx.node)
                ),
            ));
        }
    }
}

/// Parse one document into a [`SchemaDefinition`] plus diagnostics.
///
/// The root's id is its explicit `id` field when present, the supplied
/// `document_uri` otherwise.
pub fn parse_schema(document: &Value, document_uri: &Url) -> ParsedSchema {
    let mut pre_errors = Vec::new();
    let root_path = TypePath::root();
    let root_id = match node_id(document, document_uri, &root_path) {
        Ok(Some(id)) => id,
        Ok(None) => document_uri.clone(),
        Err(diagnostic) => {
            pre_errors.push(diagnostic);
            document_uri.clone()
        }
    };
    debug!(id = %root_id, "parsing schema document");

    let mut result = ParserResult::new();
    result.errors.append(&mut pre_errors);
    let ctx = ParseContext {
        node: document,
        parent_uri: root_id.clone(),
        id: Some(root_id.clone()),
        path: root_path,
        name: "#".to_string(),
        fallback_alias: None,
    };
    dispatch(&ctx, &mut result);

    // A root of any kind may carry a `definitions` map alongside its own
    // shape; the classifier only reaches the definitions rule when nothing
    // else matched, so the members are registered here.
    if document.get("definitions").is_some()
        && classify(document, true) != Some(NodeKind::Definitions)
    {
        definitions::parse_members(&ctx, &mut result);
    }

    let title = document
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let description = document
        .get("description")
        .and_then(Value::as_str)
        .map(String::from);

    ParsedSchema {
        schema: SchemaDefinition {
            id: root_id,
            title,
            description,
            types: result.types,
            order: result.order,
        },
        warnings: result.warnings,
        errors: result.errors,
    }
}

/// Parse a whole input set, collecting a schema dictionary.
///
/// Two documents asserting the same id produce one `duplicate_type_key`
/// diagnostic; the first-seen schema is retained.
pub fn parse_schemas(documents: &[(Url, Value)]) -> ParsedCorpus {
    let mut corpus = ParsedCorpus::default();
    for (document_uri, document) in documents {
        let parsed = parse_schema(document, document_uri);
        corpus.warnings.extend(parsed.warnings);
        corpus.errors.extend(parsed.errors);

        let key = parsed.schema.id.to_string();
        match corpus.schemas.entry(key) {
            std::collections::btree_map::Entry::Occupied(entry) => {
                corpus.errors.push(Diagnostic::new(
                    DiagnosticKind::DuplicateTypeKey,
                    entry.key().clone(),
                    "schema id is declared by more than one document; keeping the first",
                ));
            }
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(parsed.schema);
            }
        }
    }
    corpus
}
