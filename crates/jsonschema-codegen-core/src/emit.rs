//! Emitter interface and the generation driver.
//!
//! The core is target-agnostic: it parses documents into schema dictionaries
//! and hands them, schema by schema, to a pluggable [`Emitter`]. Each schema
//! yields exactly one output file keyed by the emitter-chosen file name.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::GenerateOptions;
use crate::diagnostic::Diagnostic;
use crate::ir::{SchemaDefinition, SchemaDictionary};
use crate::parser::parse_schemas;

/// A target-language backend.
///
/// Implementations walk a schema's type dictionary in deterministic order
/// and produce source text; emission problems (unresolved references) are
/// recoverable and pushed onto `diagnostics` while rendering continues with
/// a placeholder.
pub trait Emitter {
    /// Output-file key for one schema, e.g. `Domain/Circle.elm`.
    fn file_name(&self, schema: &SchemaDefinition, root_module: &str) -> String;

    /// Render one schema into target-language source.
    fn render_schema(
        &self,
        schema: &SchemaDefinition,
        schemas: &SchemaDictionary,
        options: &GenerateOptions,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> String;
}

/// Result of a whole generation run: output file name → source text, plus
/// the diagnostics gathered across parsing and emission.
#[derive(Debug, Clone, Default)]
pub struct SchemaResult {
    pub files: BTreeMap<String, String>,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

/// Run the full pipeline: parse every document, then emit one file per
/// schema. Partial output is returned alongside diagnostics; the embedding
/// application decides whether to discard it.
pub fn generate(
    documents: &[(Url, Value)],
    emitter: &dyn Emitter,
    options: &GenerateOptions,
) -> SchemaResult {
    let corpus = parse_schemas(documents);
    let mut result = SchemaResult {
        errors: corpus.errors,
        warnings: corpus.warnings,
        ..SchemaResult::default()
    };

    for schema in corpus.schemas.values() {
        let mut diagnostics = Vec::new();
        let source = emitter.render_schema(schema, &corpus.schemas, options, &mut diagnostics);
        let file_name = emitter.file_name(schema, &options.root_module);
        debug!(schema = %schema.id, file = %file_name, "rendered schema");
        result.errors.extend(diagnostics);
        result.files.insert(file_name, source);
    }

    if options.strict {
        result.errors.append(&mut result.warnings);
    }
    result
}

// ===========================================================================
// Tests
// ===========================================================================
