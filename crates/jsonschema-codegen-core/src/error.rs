//! Hard errors for the generation pipeline.
//!
//! Almost everything the pipeline encounters is recoverable and reported as a
//! [`Diagnostic`](crate::diagnostic::Diagnostic); this enum covers the few
//! cases where a value simply cannot be constructed.

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerateError {
    /// A type path string did not start with the `#` root marker or
    /// contained an empty segment.
    #[error("malformed type path: {raw}")]
    MalformedPath { raw: String },
}
