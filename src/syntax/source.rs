//! Schema AST nodes.
//!
//! Names are `SmolStr`: schema identifiers are short, so they stay inline
//! and clone without allocating.

use smol_str::SmolStr;
use text_size::TextRange;

/// A whole schema document: classes in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceModel {
    pub classes: Vec<ClassDecl>,
}

impl SourceModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class: ClassDecl) -> Self {
        self.classes.push(class);
        self
    }

    pub fn push_class(&mut self, class: ClassDecl) {
        self.classes.push(class);
    }

    /// Total number of attributes over all classes.
    pub fn attribute_count(&self) -> usize {
        self.classes.iter().map(|c| c.attributes.len()).sum()
    }

    /// Total number of refs over all classes.
    pub fn ref_count(&self) -> usize {
        self.classes.iter().map(|c| c.refs.len()).sum()
    }
}

/// `class Name { attributes… { refs… } }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub name: SmolStr,
    pub attributes: Vec<AttributeDecl>,
    pub refs: Vec<RefDecl>,
    /// Range of the class name in the source text, if parsed from text.
    pub range: Option<TextRange>,
}

impl ClassDecl {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            refs: Vec::new(),
            range: None,
        }
    }

    pub fn with_attribute(mut self, name: impl Into<SmolStr>, type_name: impl Into<SmolStr>) -> Self {
        self.attributes.push(AttributeDecl::new(name, type_name));
        self
    }

    pub fn with_ref(mut self, path: impl Into<SmolStr>) -> Self {
        self.refs.push(RefDecl::new(path));
        self
    }

    pub fn with_range(mut self, range: TextRange) -> Self {
        self.range = Some(range);
        self
    }
}

/// `name: TypeName`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDecl {
    pub name: SmolStr,
    pub type_name: SmolStr,
    pub range: Option<TextRange>,
}

impl AttributeDecl {
    pub fn new(name: impl Into<SmolStr>, type_name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            range: None,
        }
    }
}

/// `ref a.b.c`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefDecl {
    /// Dotted path text, segments joined by `.` with no whitespace.
    pub path: SmolStr,
    pub range: Option<TextRange>,
}

impl RefDecl {
    pub fn new(path: impl Into<SmolStr>) -> Self {
        Self {
            path: path.into(),
            range: None,
        }
    }
}
