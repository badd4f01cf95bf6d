//! Elm emitter.
//!
//! Walks each schema's type dictionary and produces one Elm module per
//! schema: a type declaration, a `Json.Decode` decoder, and a `Json.Encode`
//! encoder for every named type. Cross-schema references are module-
//! qualified and surface as `import` lines.
//!
//! ## Usage
//!
//! ```rust
//! use jsonschema_codegen_core::{generate, GenerateOptions};
//! use jsonschema_codegen_elm::ElmEmitter;
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
//! let result = generate(&[(uri, document)], &ElmEmitter, &GenerateOptions::default());
//! assert!(result.errors.is_empty());
//! assert!(result.files["Point.elm"].contains("type alias Point"));
//! ```

mod emitter;
mod names;

pub use emitter::ElmEmitter;
