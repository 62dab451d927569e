//! Model interchange formats.
//!
//! Resolved models are exported as a document of classes whose links are
//! JSON-pointer style `$ref` objects:
//!
//! ```text
//! { "classes": [
//!     { "name": "A",
//!       "attrs": [ { "name": "b", "type": { "$ref": "#/classes[1]" } } ],
//!       "refs":  [ { "path": "b.a", "ref": { "$ref": "#/classes[1]/attrs[0]" } } ] },
//!     ...
//! ] }
//! ```
//!
//! Reading a document gives back a [`SourceModel`](crate::syntax::SourceModel),
//! which is resolved again with [`Model::from_ast`](crate::hir::Model::from_ast).
//! Only the `load` path checks that each ref's `$ref` agrees with what its
//! path resolves to.
//!
//! ## Usage
//!
//! ```ignore
//! use classref::interchange::{Json, ModelFormat};
//!
//! let bytes = Json.write(&model)?;
//! let again = Json.load(&bytes, &LoadOptions::default())?;
//! ```

mod document;
mod error;
mod format;
mod json;
mod yaml;

pub use document::{AttributeDoc, ClassDoc, Document, Pointer, RefDoc};
pub use error::InterchangeError;
pub use format::{ModelFormat, format_for_extension};
pub use json::Json;
pub use yaml::Yaml;
