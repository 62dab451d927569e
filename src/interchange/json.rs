//! JSON format support.

use super::document::Document;
use super::{InterchangeError, ModelFormat};
use crate::hir::Model;

/// JSON format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl ModelFormat for Json {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn read_document(&self, input: &[u8]) -> Result<Document, InterchangeError> {
        serde_json::from_slice(input).map_err(|e| InterchangeError::json(format!("JSON parse error: {e}")))
    }

    fn write(&self, model: &Model) -> Result<Vec<u8>, InterchangeError> {
        let document = Document::from_model(model);
        tracing::debug!("[INTERCHANGE] writing {} classes as JSON", document.classes.len());
        serde_json::to_vec_pretty(&document)
            .map_err(|e| InterchangeError::json(format!("JSON write error: {e}")))
    }
}
