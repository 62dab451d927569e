//! # classref-base
//!
//! Schema model loading: classes with typed attributes and dotted-path refs,
//! resolved into an immutable, queryable model.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! interchange → JSON/YAML export and import (feature `interchange`)
//!   ↓
//! project     → Load models from strings and files
//!   ↓
//! hir         → Symbol table, type linking, path resolution, Model
//!   ↓
//! syntax      → AST (SourceModel), CST lowering, path utilities
//!   ↓
//! parser      → Logos lexer, recursive-descent rowan parser, typed CST
//!   ↓
//! base        → Primitives (TextRange, LineIndex, Span)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → hir → project)
// ============================================================================

/// Foundation types: TextRange, LineIndex, Span
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, typed CST wrappers
pub mod parser;

/// Syntax: AST types, lowering from the CST
pub mod syntax;

/// High-level IR: symbol table, type linker, path resolver, model
pub mod hir;

/// Project loading: text and files to models
pub mod project;

/// Model interchange formats: JSON, YAML
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export foundation types
pub use base::{LineCol, LineIndex, Span, TextRange, TextSize};

// Re-export the model API
pub use hir::{Attribute, Class, LoadError, LoadOptions, Model, Ref};
pub use project::{ProjectError, load_file, load_str};
pub use syntax::{AttributeDecl, ClassDecl, RefDecl, SourceModel};
