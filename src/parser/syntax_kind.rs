//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree
//! of a schema document.

/// All syntax kinds (tokens and nodes) of the schema language
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation).
/// Nodes are composite (classes, attributes, refs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    COMMENT,            // # to end of line

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,            // {
    R_BRACE,            // }
    COLON,              // :
    DOT,                // .

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    CLASS_KW,
    REF_KW,

    // =========================================================================
    // NODES
    // =========================================================================
    SOURCE_FILE,
    CLASS_DEF,
    NAME,
    ATTRIBUTE_DEF,
    TYPE_NAME,
    REF_BLOCK,
    REF_DEF,
    PATH,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        matches!(self, Self::CLASS_KW | Self::REF_KW)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_BRACE as u16) && (self as u16) <= (Self::DOT as u16)
    }

    /// Human-readable description used in parse errors
    pub fn describe(self) -> &'static str {
        match self {
            Self::IDENT => "identifier",
            Self::L_BRACE => "'{'",
            Self::R_BRACE => "'}'",
            Self::COLON => "':'",
            Self::DOT => "'.'",
            Self::CLASS_KW => "'class'",
            Self::REF_KW => "'ref'",
            Self::WHITESPACE | Self::COMMENT => "trivia",
            _ => "unknown token",
        }
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SchemaLanguage {}

impl rowan::Language for SchemaLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<SchemaLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<SchemaLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<SchemaLanguage>;
