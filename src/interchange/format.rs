//! Common trait for model interchange formats.

use super::InterchangeError;
use super::document::Document;
use super::json::Json;
use super::yaml::Yaml;
use crate::hir::{LoadOptions, Model};
use crate::syntax::SourceModel;

/// Trait for model interchange formats.
///
/// Writing takes a resolved [`Model`]. [`read`](ModelFormat::read) yields the
/// unresolved [`SourceModel`] and only checks ref pointers for shape and
/// bounds; [`load`](ModelFormat::load) also resolves it and rejects ref
/// pointers that disagree with their paths.
pub trait ModelFormat: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension(s) for this format.
    fn extensions(&self) -> &'static [&'static str];

    /// MIME type for this format.
    fn mime_type(&self) -> &'static str;

    /// Parse a document from bytes.
    fn read_document(&self, input: &[u8]) -> Result<Document, InterchangeError>;

    /// Read a model document from bytes.
    fn read(&self, input: &[u8]) -> Result<SourceModel, InterchangeError> {
        self.read_document(input)?.into_source()
    }

    /// Read and resolve a model document, checking every ref pointer.
    fn load(&self, input: &[u8], options: &LoadOptions) -> Result<Model, InterchangeError> {
        self.read_document(input)?.load(options)
    }

    /// Write a model to bytes.
    fn write(&self, model: &Model) -> Result<Vec<u8>, InterchangeError>;
}

static FORMATS: [&dyn ModelFormat; 2] = [&Json, &Yaml];

/// The format handling files with extension `ext` (without the dot).
pub fn format_for_extension(ext: &str) -> Option<&'static dyn ModelFormat> {
    FORMATS
        .iter()
        .copied()
        .find(|format| format.extensions().iter().any(|e| e.eq_ignore_ascii_case(ext)))
}
