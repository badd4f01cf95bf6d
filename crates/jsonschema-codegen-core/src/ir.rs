//! Intermediate representation produced by the parser and consumed by
//! emitters.
//!
//! The IR is a closed set of tagged variants. Use sites (object properties,
//! array items, composition alternatives, reference targets) store only
//! identifiers (a [`TypePath`] or URI), never inlined node values, so the IR
//! is a forest by ownership and a graph only under resolution. Cycles are
//! therefore expressible without cyclic owning references.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::config::EmitSort;
use crate::path::TypePath;

/// JSON Schema primitive base types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    String,
    Integer,
    Number,
    Boolean,
    Null,
}

impl PrimitiveType {
    /// Parse a JSON Schema `type` keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "string" => Some(PrimitiveType::String),
            "integer" => Some(PrimitiveType::Integer),
            "number" => Some(PrimitiveType::Number),
            "boolean" => Some(PrimitiveType::Boolean),
            "null" => Some(PrimitiveType::Null),
            _ => None,
        }
    }

    pub fn as_keyword(&self) -> &'static str {
        match self {
            PrimitiveType::String => "string",
            PrimitiveType::Integer => "integer",
            PrimitiveType::Number => "number",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Null => "null",
        }
    }

    /// Whether `value`'s runtime type matches this base.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            PrimitiveType::String => value.is_string(),
            PrimitiveType::Integer => value.is_i64() || value.is_u64(),
            PrimitiveType::Number => value.is_number(),
            PrimitiveType::Boolean => value.is_boolean(),
            PrimitiveType::Null => value.is_null(),
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_keyword())
    }
}

/// Identifier stored at a use site: a path within the current schema, or an
/// absolute URI into some schema in the corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypeIdentifier {
    Path(TypePath),
    Uri(Url),
}

impl fmt::Display for TypeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeIdentifier::Path(path) => write!(f, "{}", path),
            TypeIdentifier::Uri(uri) => write!(f, "{}", uri),
        }
    }
}

/// One parsed schema node.
///
/// Every variant carries its name (the last segment of its path, `#` at the
/// root) and its canonical path. Child types are referenced by path, never
/// owned.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDef {
    Primitive {
        name: String,
        path: TypePath,
        base: PrimitiveType,
    },
    Enum {
        name: String,
        path: TypePath,
        base: PrimitiveType,
        values: Vec<Value>,
    },
    Object {
        name: String,
        path: TypePath,
        required: BTreeSet<String>,
        properties: BTreeMap<String, TypePath>,
    },
    Array {
        name: String,
        path: TypePath,
        items: TypePath,
    },
    Tuple {
        name: String,
        path: TypePath,
        items: Vec<TypePath>,
    },
    Union {
        name: String,
        path: TypePath,
        types: Vec<PrimitiveType>,
    },
    OneOf {
        name: String,
        path: TypePath,
        alternatives: Vec<TypePath>,
    },
    AnyOf {
        name: String,
        path: TypePath,
        alternatives: Vec<TypePath>,
    },
    AllOf {
        name: String,
        path: TypePath,
        alternatives: Vec<TypePath>,
    },
    Reference {
        name: String,
        path: TypePath,
        target: TypeIdentifier,
    },
    /// Transparent grouping node for a `definitions` map; its members are
    /// registered individually and the node itself emits nothing.
    Definitions { name: String, path: TypePath },
}

impl TypeDef {
    pub fn name(&self) -> &str {
        match self {
            TypeDef::Primitive { name, .. }
            | TypeDef::Enum { name, .. }
            | TypeDef::Object { name, .. }
            | TypeDef::Array { name, .. }
            | TypeDef::Tuple { name, .. }
            | TypeDef::Union { name, .. }
            | TypeDef::OneOf { name, .. }
            | TypeDef::AnyOf { name, .. }
            | TypeDef::AllOf { name, .. }
            | TypeDef::Reference { name, .. }
            | TypeDef::Definitions { name, .. } => name,
        }
    }

    pub fn path(&self) -> &TypePath {
        match self {
            TypeDef::Primitive { path, .. }
            | TypeDef::Enum { path, .. }
            | TypeDef::Object { path, .. }
            | TypeDef::Array { path, .. }
            | TypeDef::Tuple { path, .. }
            | TypeDef::Union { path, .. }
            | TypeDef::OneOf { path, .. }
            | TypeDef::AnyOf { path, .. }
            | TypeDef::AllOf { path, .. }
            | TypeDef::Reference { path, .. }
            | TypeDef::Definitions { path, .. } => path,
        }
    }
}

/// One parsed schema: identity, documentation, and the type dictionary.
///
/// The dictionary maps identifier strings to IR nodes. Each node appears
/// under its canonical path key; nodes carrying an `id` (and `definitions`
/// members) also appear under an absolute-URI alias key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaDefinition {
    /// Absolute URI identifying this schema in the corpus.
    pub id: Url,
    pub title: String,
    pub description: Option<String>,
    pub types: BTreeMap<String, TypeDef>,
    /// Canonical path keys in parser registration (DFS) order.
    pub order: Vec<String>,
}

impl SchemaDefinition {
    /// Look up a node by its dictionary key (path string or URI alias).
    pub fn node_at(&self, key: &str) -> Option<&TypeDef> {
        self.types.get(key)
    }

    /// Canonical entries in the requested emission order, with URI aliases
    /// skipped so nothing is visited twice.
    pub fn canonical_types(&self, sort: EmitSort) -> Vec<&TypeDef> {
        match sort {
            EmitSort::Lexicographic => self
                .types
                .iter()
                .filter(|(key, def)| def.path().to_string() == **key)
                .map(|(_, def)| def)
                .collect(),
            EmitSort::DeclarationOrder => self
                .order
                .iter()
                .filter_map(|key| self.types.get(key))
                .collect(),
        }
    }
}

/// Top-level state: absolute schema URI string → parsed schema. Built once
/// during parsing, read-only during emission.
pub type SchemaDictionary = BTreeMap<String, SchemaDefinition>;

// ===========================================================================
// Tests
// ===========================================================================
