//! YAML format support.
//!
//! Same document structure as JSON, in YAML syntax:
//!
//! ```yaml
//! classes:
//! - name: A
//!   attrs:
//!   - name: b
//!     type:
//!       $ref: '#/classes[1]'
//!   refs:
//!   - path: b.a
//!     ref:
//!       $ref: '#/classes[1]/attrs[0]'
//! ```

use super::document::Document;
use super::{InterchangeError, ModelFormat};
use crate::hir::Model;

/// YAML format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yaml;

impl ModelFormat for Yaml {
    fn name(&self) -> &'static str {
        "YAML"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["yaml", "yml"]
    }

    fn mime_type(&self) -> &'static str {
        "application/x-yaml"
    }

    fn read_document(&self, input: &[u8]) -> Result<Document, InterchangeError> {
        let content = std::str::from_utf8(input)
            .map_err(|e| InterchangeError::yaml(format!("Invalid UTF-8: {e}")))?;
        if content.trim().is_empty() {
            return Err(InterchangeError::yaml("Empty YAML content"));
        }
        serde_yaml::from_str(content).map_err(|e| InterchangeError::yaml(format!("YAML parse error: {e}")))
    }

    fn write(&self, model: &Model) -> Result<Vec<u8>, InterchangeError> {
        let document = Document::from_model(model);
        tracing::debug!("[INTERCHANGE] writing {} classes as YAML", document.classes.len());
        serde_yaml::to_string(&document)
            .map(String::into_bytes)
            .map_err(|e| InterchangeError::yaml(format!("YAML write error: {e}")))
    }
}
