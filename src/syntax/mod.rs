//! Syntax: the data-only schema AST consumed by the resolver.
//!
//! A [`SourceModel`] is what a front end hands to [`crate::hir::Model::from_ast`].
//! It can come from text ([`lower`] over a [`crate::parser::Parse`]) or be
//! built directly with the `with_*` builder methods.

mod lower;
mod source;
mod text_utils;

pub use lower::{lower, parse_source};
pub use source::{AttributeDecl, ClassDecl, RefDecl, SourceModel};
pub use text_utils::{PathSegment, is_identifier, split_path};
