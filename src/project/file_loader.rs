//! Loading models from strings and files.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use super::error::{ProjectError, SyntaxDiagnostic};
use crate::base::LineIndex;
use crate::hir::{LoadOptions, Model};
use crate::parser::parse;
use crate::syntax::lower;

/// Conventional file extension for schema documents.
pub const MODEL_EXT: &str = "cref";

/// Name used in errors for text that did not come from a file.
const INPUT_NAME: &str = "<input>";

/// Parse, lower and resolve a schema document.
pub fn load_str(text: &str, options: &LoadOptions) -> Result<Model, ProjectError> {
    load_str_named(INPUT_NAME, text, options)
}

/// Like [`load_str`], naming the document `file` in errors.
pub fn load_str_named(file: &str, text: &str, options: &LoadOptions) -> Result<Model, ProjectError> {
    let parse = parse(text);
    let source = lower(&parse).map_err(|errors| {
        let index = LineIndex::new(text);
        ProjectError::Syntax {
            file: file.to_string(),
            errors: errors.iter().map(|e| SyntaxDiagnostic::new(&index, e)).collect(),
        }
    })?;

    tracing::debug!(
        "[LOAD] {}: {} classes, {} attributes, {} refs",
        file,
        source.classes.len(),
        source.attribute_count(),
        source.ref_count()
    );

    Model::from_ast(source, options).map_err(|error| ProjectError::Load {
        file: file.to_string(),
        position: error.range().map(|r| LineIndex::new(text).line_col(r.start())),
        error,
    })
}

/// Read and load a schema file.
pub fn load_file(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Model, ProjectError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ProjectError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_str_named(&path.display().to_string(), &text, options)
}

/// Load several independent schema files in parallel.
///
/// Results are returned in the order of `paths`.
pub fn load_files(
    paths: &[PathBuf],
    options: &LoadOptions,
) -> Vec<(PathBuf, Result<Model, ProjectError>)> {
    let results: Vec<_> = paths
        .par_iter()
        .map(|path| (path.clone(), load_file(path, options)))
        .collect();

    let failed = results.iter().filter(|(_, r)| r.is_err()).count();
    tracing::debug!("[LOAD] loaded {} files ({} failed)", results.len(), failed);
    results
}
