//! Recoverable problems surfaced by parsing, resolution, and emission.
//!
//! The pipeline never aborts on the first problem: sub-parsers return partial
//! IR plus diagnostics, and the driver merges everything so that independent
//! errors are all reported in one run. Kinds serialize in `snake_case` and
//! form a stable contract for embedding applications.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable, machine-readable diagnostic kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum DiagnosticKind {
    /// The classifier could not match a schema node to any IR kind.
    UnknownNodeType,
    /// Two IR nodes would register under the same dictionary key.
    DuplicateTypeKey,
    /// The resolver could not find an identifier.
    UnresolvedReference,
    /// The resolver detected a reference cycle.
    CyclicReference,
    /// An enum entry's runtime type mismatches the declared base, or the
    /// value list is empty or contains duplicates.
    InvalidEnumValue,
    /// An `id` field is not parseable as a URI.
    InvalidIdUri,
    /// A `required` name is not declared in `properties`.
    MissingRequiredPropertyTarget,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::UnknownNodeType => "unknown_node_type",
            DiagnosticKind::DuplicateTypeKey => "duplicate_type_key",
            DiagnosticKind::UnresolvedReference => "unresolved_reference",
            DiagnosticKind::CyclicReference => "cyclic_reference",
            DiagnosticKind::InvalidEnumValue => "invalid_enum_value",
            DiagnosticKind::InvalidIdUri => "invalid_id_uri",
            DiagnosticKind::MissingRequiredPropertyTarget => "missing_required_property_target",
        }
    }
}

/// One reported problem: kind, the identifier of the offending node (path or
/// URI string), and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub identifier: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        kind: DiagnosticKind,
        identifier: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            identifier: identifier.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}: {}",
            self.kind.as_str(),
            self.identifier,
            self.message
        )
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(DiagnosticKind::UnknownNodeType).unwrap(),
            serde_json::json!("unknown_node_type")
        );
        assert_eq!(
            serde_json::to_value(DiagnosticKind::MissingRequiredPropertyTarget).unwrap(),
            serde_json::json!("missing_required_property_target")
        );
    }

    #[test]
    fn test_display_includes_kind_identifier_and_message() {
        let diagnostic = Diagnostic::new(
            DiagnosticKind::UnresolvedReference,
            "#/center",
            "no type registered for this key",
        );
        assert_eq!(
            diagnostic.to_string(),
            "unresolved_reference at #/center: no type registered for this key"
        );
    }
}
