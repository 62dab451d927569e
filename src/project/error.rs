use std::path::PathBuf;

use text_size::TextRange;
use thiserror::Error;

use crate::base::{LineCol, LineIndex, Span};
use crate::hir::LoadError;
use crate::parser::SyntaxError;

/// A syntax error positioned as line and column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxDiagnostic {
    pub position: LineCol,
    /// Line/column extent of the offending token
    pub span: Span,
    pub range: TextRange,
    pub message: String,
}

impl SyntaxDiagnostic {
    pub fn new(index: &LineIndex, error: &SyntaxError) -> Self {
        Self {
            position: index.line_col(error.range.start()),
            span: Span::from_range(index, error.range),
            range: error.range,
            message: error.message.clone(),
        }
    }
}

impl std::fmt::Display for SyntaxDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.position, self.message)
    }
}

/// Failure to load a model from text or a file.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Every syntax error of the document, in source order.
    #[error("{file}: {}", describe_syntax(.errors))]
    Syntax {
        file: String,
        errors: Vec<SyntaxDiagnostic>,
    },

    #[error("{file}{}: {error}", describe_position(.position))]
    Load {
        file: String,
        position: Option<LineCol>,
        #[source]
        error: LoadError,
    },
}

impl ProjectError {
    /// The resolution error, if this is one.
    pub fn load_error(&self) -> Option<&LoadError> {
        match self {
            Self::Load { error, .. } => Some(error),
            _ => None,
        }
    }
}

fn describe_syntax(errors: &[SyntaxDiagnostic]) -> String {
    match errors {
        [] => "syntax error".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{first} (and {} more syntax errors)", rest.len()),
    }
}

fn describe_position(position: &Option<LineCol>) -> String {
    position.map(|p| format!(":{p}")).unwrap_or_default()
}
