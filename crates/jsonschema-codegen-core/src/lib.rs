//! Core pipeline for generating typed modules from JSON Schema documents.
//!
//! Two stages do the real work:
//!
//! 1. The **parser** recursively traverses each document, classifies every
//!    sub-node into a small set of IR kinds, assigns it a canonical path
//!    identity, and builds a per-schema type dictionary keyed by both path
//!    and, where applicable, absolute URI.
//! 2. The **emitter**, a pluggable [`Emitter`] implementation, walks the
//!    resolved dictionaries and produces a mapping from output file name to
//!    source text.
//!
//! The pipeline is single-threaded and pure over its inputs: dictionaries
//! are built once during parsing and read-only during emission, and
//! recoverable problems are collected as [`Diagnostic`] values instead of
//! aborting.
//!
//! ## Usage
//!
//! ```rust
//! use jsonschema_codegen_core::parse_schema;
//! use serde_json::json;
//! use url::Url;
//!
//! let document = json!({
//!     "title": "Point",
//!     "type": "object",
//!     "properties": { "x": { "type": "number" } },
//!     "required": ["x"]
//! });
//! let uri = Url::parse("http://example.com/point.json").unwrap();
//!
//! let parsed = parse_schema(&document, &uri);
//! assert!(parsed.errors.is_empty());
//! assert!(parsed.schema.types.contains_key("#"));
//! assert!(parsed.schema.types.contains_key("#/x"));
//! ```

pub mod classify;
pub mod config;
pub mod diagnostic;
pub mod emit;
pub mod error;
pub mod ir;
pub mod parser;
pub mod path;
pub mod resolver;

pub use config::{EmitSort, GenerateOptions};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use emit::{generate, Emitter, SchemaResult};
pub use error::GenerateError;
pub use ir::{
    PrimitiveType, SchemaDefinition, SchemaDictionary, TypeDef, TypeIdentifier,
};
pub use parser::{parse_schema, parse_schemas, ParsedCorpus, ParsedSchema, ParserResult};
pub use path::TypePath;
pub use resolver::{resolve, ResolvedType};
