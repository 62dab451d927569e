//! Typed AST wrappers over the untyped rowan CST.
//!
//! This module provides strongly-typed accessors for schema syntax nodes.
//! Each struct wraps a SyntaxNode and provides methods to access children.

use rowan::TextRange;

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

fn first_ident(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| t.kind() == SyntaxKind::IDENT)
}

fn child<N: AstNode>(node: &SyntaxNode) -> Option<N> {
    node.children().find_map(N::cast)
}

// ============================================================================
// Root
// ============================================================================

ast_node!(SourceFile, SOURCE_FILE);

impl SourceFile {
    pub fn classes(&self) -> impl Iterator<Item = ClassDef> + '_ {
        self.0.children().filter_map(ClassDef::cast)
    }
}

// ============================================================================
// Declarations
// ============================================================================

ast_node!(ClassDef, CLASS_DEF);

impl ClassDef {
    pub fn name(&self) -> Option<Name> {
        child(&self.0)
    }

    pub fn attributes(&self) -> impl Iterator<Item = AttributeDef> + '_ {
        self.0.children().filter_map(AttributeDef::cast)
    }

    /// The ref block, if the class declares one.
    pub fn ref_block(&self) -> Option<RefBlock> {
        child(&self.0)
    }

    pub fn refs(&self) -> impl Iterator<Item = RefDef> + '_ {
        self.ref_block().into_iter().flat_map(|block| block.refs().collect::<Vec<_>>())
    }
}

ast_node!(AttributeDef, ATTRIBUTE_DEF);

impl AttributeDef {
    pub fn name(&self) -> Option<Name> {
        child(&self.0)
    }

    pub fn type_name(&self) -> Option<TypeName> {
        child(&self.0)
    }
}

ast_node!(RefBlock, REF_BLOCK);

impl RefBlock {
    pub fn refs(&self) -> impl Iterator<Item = RefDef> + '_ {
        self.0.children().filter_map(RefDef::cast)
    }
}

ast_node!(RefDef, REF_DEF);

impl RefDef {
    pub fn path(&self) -> Option<Path> {
        child(&self.0)
    }
}

// ============================================================================
// Names and paths
// ============================================================================

ast_node!(Name, NAME);

impl Name {
    pub fn ident(&self) -> Option<SyntaxToken> {
        first_ident(&self.0)
    }

    pub fn text(&self) -> Option<String> {
        self.ident().map(|t| t.text().to_string())
    }
}

ast_node!(TypeName, TYPE_NAME);

impl TypeName {
    pub fn ident(&self) -> Option<SyntaxToken> {
        first_ident(&self.0)
    }

    pub fn text(&self) -> Option<String> {
        self.ident().map(|t| t.text().to_string())
    }
}

ast_node!(Path, PATH);

impl Path {
    /// Identifier tokens of the path, in order.
    pub fn segments(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| t.kind() == SyntaxKind::IDENT)
    }

    /// Canonical dotted text, with any trivia between segments dropped.
    pub fn text(&self) -> String {
        self.segments()
            .map(|t| t.text().to_string())
            .collect::<Vec<_>>()
            .join(".")
    }

    pub fn range(&self) -> TextRange {
        self.0.text_range()
    }
}
