//! Accumulating result shared by all sub-parsers.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::ir::TypeDef;

/// Type dictionary fragment produced by one node and its descendants, plus
/// the warnings and errors gathered along the way.
///
/// Results from siblings merge by dictionary union (duplicate key =
/// `duplicate_type_key` error, first registration wins) and list
/// concatenation.
#[derive(Debug, Clone, Default)]
pub struct ParserResult {
    pub types: BTreeMap<String, TypeDef>,
    /// Canonical path keys in registration order.
    pub order: Vec<String>,
    pub warnings: Vec<Diagnostic>,
    pub errors: Vec<Diagnostic>,
}

impl ParserResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `def` under its canonical path key and, when present, under
    /// an absolute-URI alias as well.
    pub fn register(&mut self, def: TypeDef, alias: Option<String>) {
        let key = def.path().to_string();
        if let Some(alias) = alias {
            if alias != key {
                self.insert(alias, def.clone());
            }
        }
        if self.insert(key.clone(), def) {
            self.order.push(key);
        }
    }

    /// Merge a sibling or child result into this one.
    pub fn merge(&mut self, other: ParserResult) {
        let ParserResult {
            types,
            order,
            warnings,
            errors,
        } = other;
        let mut inserted: Vec<String> = Vec::new();
        for (key, def) in types {
            if self.insert(key.clone(), def) {
                inserted.push(key);
            }
        }
        for key in order {
            if inserted.contains(&key) {
                self.order.push(key);
            }
        }
        self.warnings.extend(warnings);
        self.errors.extend(errors);
    }

    fn insert(&mut self, key: String, def: TypeDef) -> bool {
        match self.types.entry(key) {
            Entry::Occupied(entry) => {
                self.errors.push(Diagnostic::new(
                    DiagnosticKind::DuplicateTypeKey,
                    entry.key().clone(),
                    format!(
                        "type `{}` is already registered under this key; keeping the first",
                        entry.get().name()
                    ),
                ));
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(def);
                true
            }
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
