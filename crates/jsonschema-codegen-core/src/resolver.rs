//! Identifier resolution across schema dictionaries.
//!
//! A use site stores only a [`TypeIdentifier`]; this module chases it
//! through reference chains and URI aliases to a concrete IR node,
//! or returns an `unresolved_reference` / `cyclic_reference` diagnostic.

use std::collections::HashSet;

use tracing::debug;
use url::Url;

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::ir::{SchemaDefinition, SchemaDictionary, TypeDef, TypeIdentifier};

/// A concrete node together with the schema that defines it. Emitters need
/// the defining schema to module-qualify cross-schema use sites.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedType<'a> {
    pub def: &'a TypeDef,
    pub schema: &'a SchemaDefinition,
}

/// Resolve an identifier from the viewpoint of `current`.
///
/// Paths are looked up in the current schema's dictionary; URIs are split
/// into base and fragment, the base selects a schema from `schemas`, and the
/// fragment selects a key within it. Reference chains are followed; a cycle
/// or a missing key yields `Err`.
pub fn resolve<'a>(
    identifier: &TypeIdentifier,
    current: &'a SchemaDefinition,
    schemas: &'a SchemaDictionary,
) -> Result<ResolvedType<'a>, Diagnostic> {
    let mut visited: HashSet<String> = HashSet::new();
    resolve_inner(identifier, current, schemas, &mut visited)
}

fn resolve_inner<'a>(
    identifier: &TypeIdentifier,
    current: &'a SchemaDefinition,
    schemas: &'a SchemaDictionary,
    visited: &mut HashSet<String>,
) -> Result<ResolvedType<'a>, Diagnostic> {
    let identifier_string = identifier.to_string();
    if !visited.insert(identifier_string.clone()) {
        return Err(Diagnostic::new(
            DiagnosticKind::CyclicReference,
            identifier_string,
            "reference cycle detected",
        ));
    }

    match identifier {
        TypeIdentifier::Path(path) => {
            let key = path.to_string();
            let def = current.types.get(&key).ok_or_else(|| {
                debug!(key = %key, schema = %current.id, "path lookup missed");
                Diagnostic::new(
                    DiagnosticKind::UnresolvedReference,
                    key.clone(),
                    format!("no type registered at `{}` in schema `{}`", key, current.id),
                )
            })?;
            follow(def, current, schemas, visited)
        }
        TypeIdentifier::Uri(uri) => {
            let (base, fragment) = split_fragment(uri);
            let schema = schemas.get(&base).ok_or_else(|| {
                Diagnostic::new(
                    DiagnosticKind::UnresolvedReference,
                    identifier_string.clone(),
                    format!("no schema in the input set has id `{}`", base),
                )
            })?;
            let key = match &fragment {
                // Pointer fragments address a path inside the target schema.
                Some(fragment) if fragment.starts_with('/') => format!("#{}", fragment),
                Some(fragment) => format!("{}#{}", base, fragment),
                None => base.clone(),
            };
            let def = schema.types.get(&key).ok_or_else(|| {
                Diagnostic::new(
                    DiagnosticKind::UnresolvedReference,
                    identifier_string.clone(),
                    format!("schema `{}` has no type under key `{}`", base, key),
                )
            })?;
            follow(def, schema, schemas, visited)
        }
    }
}

fn follow<'a>(
    def: &'a TypeDef,
    schema: &'a SchemaDefinition,
    schemas: &'a SchemaDictionary,
    visited: &mut HashSet<String>,
) -> Result<ResolvedType<'a>, Diagnostic> {
    match def {
        TypeDef::Reference { target, .. } => resolve_inner(target, schema, schemas, visited),
        _ => Ok(ResolvedType { def, schema }),
    }
}

/// Decompose a URI into its fragment-free base string and, when non-empty,
/// its fragment.
fn split_fragment(uri: &Url) -> (String, Option<String>) {
    let fragment = uri
        .fragment()
        .filter(|fragment| !fragment.is_empty())
        .map(String::from);
    let mut base = uri.clone();
    base.set_fragment(None);
    (base.to_string(), fragment)
}

// ===========================================================================
// Tests
// ===========================================================================
