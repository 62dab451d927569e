//! Recursive descent parser for schema documents
//!
//! Builds a rowan GreenNode tree from tokens.
//! Supports error recovery and produces a lossless CST.

use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Parse a schema document into a CST
pub fn parse(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens, TextSize::of(input));
    parser.parse_source_file();
    parser.finish()
}

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    end: TextSize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>], end: TextSize) -> Self {
        Self {
            tokens,
            pos: 0,
            end,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::ERROR)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        !self.at_eof() && self.current_kind() == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        !self.at_eof() && kinds.contains(&self.current_kind())
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Look ahead, skipping trivia
    fn nth(&self, n: usize) -> Option<SyntaxKind> {
        self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
            .map(|t| t.kind)
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) {
        if let Some(token) = self.current() {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error(format!("expected {}", kind.describe()));
            false
        }
    }

    fn skip_trivia(&mut self) {
        while self.current().map(|t| t.kind.is_trivia()).unwrap_or(false) {
            self.bump();
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&mut self, message: impl Into<String>) {
        let range = self
            .current()
            .map(|t| TextRange::at(t.offset, TextSize::of(t.text)))
            .unwrap_or_else(|| TextRange::empty(self.end));
        self.errors.push(SyntaxError::new(message, range));
    }

    fn error_recover(&mut self, message: impl Into<String>, recovery: &[SyntaxKind]) {
        self.error(message);
        self.builder.start_node(SyntaxKind::ERROR.into());
        // Always consume at least one token to make progress
        let mut consumed = false;
        while !self.at_eof() && !self.at_any(recovery) {
            self.bump();
            consumed = true;
        }
        if !consumed && !self.at_eof() {
            self.bump();
        }
        self.builder.finish_node();
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    /// Wrap a single identifier token in a node of `kind`
    fn ident_node(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if self.at(SyntaxKind::IDENT) {
            self.start_node(kind);
            self.bump();
            self.finish_node();
            true
        } else {
            self.error(format!("expected {what}"));
            false
        }
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// SourceFile = ClassDef*
    fn parse_source_file(&mut self) {
        self.start_node(SyntaxKind::SOURCE_FILE);

        while !self.at_eof() {
            self.skip_trivia();
            if self.at_eof() {
                break;
            }
            if self.at(SyntaxKind::CLASS_KW) {
                self.parse_class_def();
            } else {
                self.error_recover("expected 'class'", &[SyntaxKind::CLASS_KW]);
            }
        }

        self.finish_node();
    }

    /// ClassDef = 'class' Name '{' AttributeDef* RefBlock? '}'
    fn parse_class_def(&mut self) {
        self.start_node(SyntaxKind::CLASS_DEF);

        self.expect(SyntaxKind::CLASS_KW);
        self.skip_trivia();
        self.ident_node(SyntaxKind::NAME, "class name");
        self.skip_trivia();

        if self.expect(SyntaxKind::L_BRACE) {
            let mut seen_ref_block = false;
            loop {
                self.skip_trivia();
                if self.at_eof() || self.at(SyntaxKind::CLASS_KW) {
                    self.error("expected '}' to close class body");
                    break;
                }
                match self.current_kind() {
                    SyntaxKind::R_BRACE => {
                        self.bump();
                        break;
                    }
                    SyntaxKind::IDENT => {
                        if seen_ref_block {
                            self.error("attributes must be declared before the ref block");
                        }
                        self.parse_attribute_def();
                    }
                    SyntaxKind::L_BRACE => {
                        if seen_ref_block {
                            self.error("a class has at most one ref block");
                        }
                        seen_ref_block = true;
                        self.parse_ref_block();
                    }
                    _ => self.error_recover(
                        "expected attribute, ref block or '}'",
                        &[
                            SyntaxKind::IDENT,
                            SyntaxKind::L_BRACE,
                            SyntaxKind::R_BRACE,
                            SyntaxKind::CLASS_KW,
                        ],
                    ),
                }
            }
        }

        self.finish_node();
    }

    /// AttributeDef = Name ':' TypeName
    fn parse_attribute_def(&mut self) {
        self.start_node(SyntaxKind::ATTRIBUTE_DEF);

        self.ident_node(SyntaxKind::NAME, "attribute name");
        self.skip_trivia();
        if self.expect(SyntaxKind::COLON) {
            self.skip_trivia();
            self.ident_node(SyntaxKind::TYPE_NAME, "type name");
        }

        self.finish_node();
    }

    /// RefBlock = '{' RefDef* '}'
    fn parse_ref_block(&mut self) {
        self.start_node(SyntaxKind::REF_BLOCK);

        self.expect(SyntaxKind::L_BRACE);
        loop {
            self.skip_trivia();
            if self.at_eof() || self.at(SyntaxKind::CLASS_KW) {
                self.error("expected '}' to close ref block");
                break;
            }
            match self.current_kind() {
                SyntaxKind::R_BRACE => {
                    self.bump();
                    break;
                }
                SyntaxKind::REF_KW => self.parse_ref_def(),
                _ => self.error_recover(
                    "expected 'ref' or '}'",
                    &[SyntaxKind::REF_KW, SyntaxKind::R_BRACE, SyntaxKind::CLASS_KW],
                ),
            }
        }

        self.finish_node();
    }

    /// RefDef = 'ref' Path
    fn parse_ref_def(&mut self) {
        self.start_node(SyntaxKind::REF_DEF);

        self.expect(SyntaxKind::REF_KW);
        self.skip_trivia();
        self.parse_path();

        self.finish_node();
    }

    /// Path = IDENT ('.' IDENT)*
    fn parse_path(&mut self) {
        self.start_node(SyntaxKind::PATH);

        if self.expect(SyntaxKind::IDENT) {
            // Trivia is only pulled into the path when a dot follows it
            while self.nth(0) == Some(SyntaxKind::DOT) {
                self.skip_trivia();
                self.bump();
                self.skip_trivia();
                if !self.expect(SyntaxKind::IDENT) {
                    break;
                }
            }
        }

        self.finish_node();
    }
}
