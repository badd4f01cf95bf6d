//! JSON-pointer-like path identity for IR nodes.
//!
//! A [`TypePath`] is an ordered list of string segments whose first segment is
//! always the document root marker `#`. Paths are the canonical identity of
//! every IR node within one schema and double as type dictionary keys in
//! their string form (`#/definitions/point`).
//!
//! Segments are compared as raw strings; no percent-decoding is performed.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::GenerateError;

/// First segment of every path: the document root marker.
pub const ROOT_MARKER: &str = "#";

/// Ordered sequence of string segments identifying a node within one schema.
///
/// The string form round-trips: `TypePath::from_string(&p.to_string()) == p`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypePath {
    segments: Vec<String>,
}

impl TypePath {
    /// The root path `["#"]`.
    pub fn root() -> Self {
        Self {
            segments: vec![ROOT_MARKER.to_string()],
        }
    }

    /// Parse a path from its string form (`"#"` or `"#/a/b"`).
    ///
    /// The bare-root shorthand `"#"` canonicalizes to the segment list
    /// `["#"]`; empty segments (`"#/a//b"`) are rejected.
    pub fn from_string(raw: &str) -> Result<Self, GenerateError> {
        let mut parts = raw.split('/');
        if parts.next() != Some(ROOT_MARKER) {
            return Err(GenerateError::MalformedPath {
                raw: raw.to_string(),
            });
        }
        let mut segments = vec![ROOT_MARKER.to_string()];
        for part in parts {
            if part.is_empty() {
                return Err(GenerateError::MalformedPath {
                    raw: raw.to_string(),
                });
            }
            segments.push(part.to_string());
        }
        Ok(Self { segments })
    }

    /// A new path with `name` appended.
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Self { segments }
    }

    /// The containing path, or `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// The last segment. For the root path this is `#`.
    pub fn name(&self) -> &str {
        self.segments
            .last()
            .map(String::as_str)
            .unwrap_or(ROOT_MARKER)
    }

    pub fn is_root(&self) -> bool {
        self.segments.len() == 1
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for TypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

impl Serialize for TypePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
