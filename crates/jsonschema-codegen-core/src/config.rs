//! Generation options.

use serde::{Deserialize, Serialize};

/// Order in which a schema's type declarations are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmitSort {
    /// Sort canonical dictionary keys lexicographically (default).
    #[default]
    Lexicographic,
    /// Emit types in the order the parser registered them (DFS order).
    DeclarationOrder,
}

/// Options for module generation.
///
/// Fields serialize in `kebab-case` (e.g. `root-module`, `emit-sort`); the
/// naming convention is part of the public contract for config files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct GenerateOptions {
    /// Module prefix applied to every emitted module. Default: empty.
    pub root_module: String,
    /// Declaration emission order. Default: lexicographic.
    pub emit_sort: EmitSort,
    /// If `true`, every warning escalates to an error.
    pub strict: bool,
}

// ===========================================================================
// Tests
// ===========================================================================
