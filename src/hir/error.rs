//! Errors raised while building a model.
//!
//! Every variant is terminal: the load is abandoned and no model is returned.

use smol_str::SmolStr;
use text_size::TextRange;
use thiserror::Error;

/// What kind of name failed identifier validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    Class,
    Attribute,
    Type,
}

impl NameKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class name",
            Self::Attribute => "attribute name",
            Self::Type => "type name",
        }
    }
}

impl std::fmt::Display for NameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure to turn a [`crate::syntax::SourceModel`] into a model.
///
/// Segment indices are 1-based: the first segment of `x.y` is segment 1.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Two classes share a name.
    #[error("duplicate class name '{name}'")]
    DuplicateClassName {
        name: SmolStr,
        first: Option<TextRange>,
        duplicate: Option<TextRange>,
    },

    /// Two attributes of one class share a name.
    #[error("duplicate attribute name '{name}' in class '{class}'")]
    DuplicateAttributeName {
        class: SmolStr,
        name: SmolStr,
        first: Option<TextRange>,
        duplicate: Option<TextRange>,
    },

    /// An attribute's type names no class.
    #[error("attribute '{class}.{attribute}' has unknown type '{type_name}'")]
    UnresolvedTypeReference {
        class: SmolStr,
        attribute: SmolStr,
        type_name: SmolStr,
        range: Option<TextRange>,
    },

    /// A ref path segment names no attribute of the class reached so far.
    #[error(
        "ref '{path}' in class '{class}': segment {segment_index} ('{segment}') not found in class '{searched}'"
    )]
    UnresolvedPathSegment {
        class: SmolStr,
        ref_index: usize,
        path: SmolStr,
        segment_index: usize,
        segment: SmolStr,
        /// Class whose attribute namespace was searched
        searched: SmolStr,
        range: Option<TextRange>,
    },

    /// A class, attribute or type name is not an identifier.
    #[error("invalid {kind} '{text}'")]
    InvalidIdentifier {
        kind: NameKind,
        text: SmolStr,
        range: Option<TextRange>,
    },

    /// A ref path has an empty or non-identifier segment.
    #[error("malformed ref path '{path}' in class '{class}': segment {segment_index} is not an identifier")]
    MalformedPath {
        class: SmolStr,
        path: SmolStr,
        segment_index: usize,
        range: Option<TextRange>,
    },
}

impl LoadError {
    /// Source range of the offending node, when the AST came from text.
    pub fn range(&self) -> Option<TextRange> {
        match self {
            Self::DuplicateClassName { duplicate, .. }
            | Self::DuplicateAttributeName { duplicate, .. } => *duplicate,
            Self::UnresolvedTypeReference { range, .. }
            | Self::UnresolvedPathSegment { range, .. }
            | Self::InvalidIdentifier { range, .. }
            | Self::MalformedPath { range, .. } => *range,
        }
    }

    /// Short machine-readable name of the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateClassName { .. } => "DuplicateClassName",
            Self::DuplicateAttributeName { .. } => "DuplicateAttributeName",
            Self::UnresolvedTypeReference { .. } => "UnresolvedTypeReference",
            Self::UnresolvedPathSegment { .. } => "UnresolvedPathSegment",
            Self::InvalidIdentifier { .. } => "InvalidIdentifier",
            Self::MalformedPath { .. } => "MalformedPath",
        }
    }
}
