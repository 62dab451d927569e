//! The resolved model and its borrowed handle views.
//!
//! A [`Model`] owns the symbol table, the type links and the matched path of
//! every ref. It is built all-or-nothing by [`Model::from_ast`] and never
//! changes afterwards, so handles ([`Class`], [`Attribute`], [`Ref`]) are
//! plain `Copy` views that borrow it.

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;
use text_size::TextRange;

use super::error::LoadError;
use super::ids::{AttrId, ClassId, RefId};
use super::link::{TypeLinks, link_types};
use super::options::LoadOptions;
use super::resolve::{PathResolver, ResolveStats};
use super::symbols::{AttributeEntry, ClassEntry, RefEntry, SymbolTable};
use crate::syntax::{PathSegment, SourceModel, is_identifier, split_path};

/// A fully resolved schema model.
#[derive(Clone, Debug)]
pub struct Model {
    table: SymbolTable,
    links: TypeLinks,
    /// Matched path of every ref, indexed by `RefId`.
    matched: Vec<Arc<[AttrId]>>,
    /// Refs targeting each attribute, indexed by `AttrId`.
    referrers: Vec<Vec<RefId>>,
    stats: ResolveStats,
}

impl Model {
    /// Build and resolve a model from its AST.
    ///
    /// Runs the symbol table builder, the type linker and the path resolver
    /// in that order. The first error aborts the load.
    pub fn from_ast(source: SourceModel, options: &LoadOptions) -> Result<Self, LoadError> {
        let table = SymbolTable::build(source)?;
        let links = link_types(&table, options)?;

        let (matched, stats) = {
            let resolver = PathResolver::new(&table, &links, options);
            let matched = resolver.resolve_all(options.parallel)?;
            (matched, resolver.stats())
        };

        let mut referrers = vec![Vec::new(); table.attributes().len()];
        for (index, chain) in matched.iter().enumerate() {
            if let Some(&target) = chain.last() {
                referrers[target.index()].push(RefId::new(index));
            }
        }

        tracing::debug!(
            "[MODEL] {} classes, {} attributes, {} refs",
            table.classes().len(),
            table.attributes().len(),
            table.refs().len()
        );
        Ok(Self {
            table,
            links,
            matched,
            referrers,
            stats,
        })
    }

    /// Classes in declaration order.
    pub fn classes(&self) -> impl ExactSizeIterator<Item = Class<'_>> + '_ {
        (0..self.table.classes().len()).map(move |i| self.class(ClassId::new(i)))
    }

    pub fn class_at(&self, index: usize) -> Option<Class<'_>> {
        (index < self.class_count()).then(|| self.class(ClassId::new(index)))
    }

    /// Look up a class by name (O(1)).
    pub fn class_by_name(&self, name: &str) -> Option<Class<'_>> {
        self.table.class_by_name(name).map(|id| self.class(id))
    }

    pub fn class_count(&self) -> usize {
        self.table.classes().len()
    }

    pub fn attribute_count(&self) -> usize {
        self.table.attributes().len()
    }

    pub fn ref_count(&self) -> usize {
        self.table.refs().len()
    }

    /// Handle for a class id of this model.
    pub fn class(&self, id: ClassId) -> Class<'_> {
        Class { model: self, id }
    }

    /// Handle for an attribute id of this model.
    pub fn attribute(&self, id: AttrId) -> Attribute<'_> {
        Attribute { model: self, id }
    }

    /// Handle for a ref id of this model.
    pub fn reference(&self, id: RefId) -> Ref<'_> {
        Ref { model: self, id }
    }

    /// Every ref whose target is `attr`, in declaration order.
    pub fn references_to(&self, attr: Attribute<'_>) -> impl ExactSizeIterator<Item = Ref<'_>> + '_ {
        self.referrers[attr.id.index()]
            .iter()
            .map(move |&id| self.reference(id))
    }

    /// Resolution counters recorded while this model was loaded.
    pub fn stats(&self) -> ResolveStats {
        self.stats
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.table
    }
}

// ============================================================================
// Handles
// ============================================================================

/// A class of a [`Model`].
#[derive(Clone, Copy)]
pub struct Class<'m> {
    model: &'m Model,
    id: ClassId,
}

impl<'m> Class<'m> {
    fn entry(&self) -> &'m ClassEntry {
        self.model.table.class(self.id)
    }

    pub fn id(&self) -> ClassId {
        self.id
    }

    pub fn name(&self) -> &'m SmolStr {
        &self.entry().name
    }

    /// Position in the model's declaration order.
    pub fn index(&self) -> usize {
        self.id.index()
    }

    pub fn attributes(self) -> impl ExactSizeIterator<Item = Attribute<'m>> + 'm {
        let model = self.model;
        self.entry().attributes.iter().map(move |&id| model.attribute(id))
    }

    pub fn attribute_at(&self, index: usize) -> Option<Attribute<'m>> {
        self.entry().attributes.get(index).map(|&id| self.model.attribute(id))
    }

    /// Look up an attribute declared in this class (O(1)).
    pub fn attribute(&self, name: &str) -> Option<Attribute<'m>> {
        self.entry().lookup(name).map(|id| self.model.attribute(id))
    }

    pub fn refs(self) -> impl ExactSizeIterator<Item = Ref<'m>> + 'm {
        let model = self.model;
        self.entry().refs.iter().map(move |&id| model.reference(id))
    }

    pub fn ref_at(&self, index: usize) -> Option<Ref<'m>> {
        self.entry().refs.get(index).map(|&id| self.model.reference(id))
    }

    /// Resolve an ad-hoc dotted path from this class with the same walk used
    /// for refs. Returns the target, or `None` if the path does not resolve.
    pub fn lookup_path(&self, path: &str) -> Option<Attribute<'m>> {
        let segments = split_path(path);
        if !segments.iter().all(|s| is_identifier(&s.name)) {
            return None;
        }
        let resolver = PathResolver::new(&self.model.table, &self.model.links, &LoadOptions::sequential());
        let chain = resolver.resolve_path(self.id, &segments).ok()?;
        chain.last().map(|&id| self.model.attribute(id))
    }

    pub fn range(&self) -> Option<TextRange> {
        self.entry().range
    }
}

/// An attribute of a [`Class`].
#[derive(Clone, Copy)]
pub struct Attribute<'m> {
    model: &'m Model,
    id: AttrId,
}

impl<'m> Attribute<'m> {
    fn entry(&self) -> &'m AttributeEntry {
        self.model.table.attribute(self.id)
    }

    pub fn id(&self) -> AttrId {
        self.id
    }

    pub fn name(&self) -> &'m SmolStr {
        &self.entry().name
    }

    /// The class declaring this attribute.
    pub fn owner(&self) -> Class<'m> {
        self.model.class(self.entry().owner)
    }

    /// The class this attribute's type resolved to.
    pub fn ty(&self) -> Class<'m> {
        self.model.class(self.model.links.type_of(self.id))
    }

    /// The type name as written.
    pub fn type_name(&self) -> &'m SmolStr {
        &self.entry().type_name
    }

    /// Position within the owning class.
    pub fn index(&self) -> usize {
        self.entry().index
    }

    pub fn range(&self) -> Option<TextRange> {
        self.entry().range
    }
}

/// A ref of a [`Class`], resolved to its target attribute.
#[derive(Clone, Copy)]
pub struct Ref<'m> {
    model: &'m Model,
    id: RefId,
}

impl<'m> Ref<'m> {
    fn entry(&self) -> &'m RefEntry {
        self.model.table.reference(self.id)
    }

    pub fn id(&self) -> RefId {
        self.id
    }

    /// The dotted path as written.
    pub fn path(&self) -> &'m SmolStr {
        &self.entry().path
    }

    pub fn segments(&self) -> &'m [PathSegment] {
        &self.entry().segments
    }

    pub fn owner(&self) -> Class<'m> {
        self.model.class(self.entry().owner)
    }

    /// Position within the owning class's refs.
    pub fn index(&self) -> usize {
        self.entry().index
    }

    /// The attribute the path resolved to.
    pub fn target(&self) -> Attribute<'m> {
        // Paths have at least one segment and resolution walks all of them.
        let chain = &self.model.matched[self.id.index()];
        self.model.attribute(chain[chain.len() - 1])
    }

    /// Every attribute matched along the path, one per segment.
    pub fn matched_path(self) -> impl ExactSizeIterator<Item = Attribute<'m>> + 'm {
        let model = self.model;
        model.matched[self.id.index()]
            .iter()
            .map(move |&id| model.attribute(id))
    }

    pub fn range(&self) -> Option<TextRange> {
        self.entry().range
    }
}

// Handles compare by identity within the same model.
macro_rules! handle_identity {
    ($($handle:ident),*) => {$(
        impl PartialEq for $handle<'_> {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id && std::ptr::eq(self.model, other.model)
            }
        }

        impl Eq for $handle<'_> {}
    )*};
}

handle_identity!(Class, Attribute, Ref);

impl fmt::Debug for Class<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("id", &self.id)
            .field("name", self.name())
            .finish()
    }
}

impl fmt::Debug for Attribute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("id", &self.id)
            .field("owner", self.owner().name())
            .field("name", self.name())
            .field("ty", self.ty().name())
            .finish()
    }
}

impl fmt::Debug for Ref<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ref")
            .field("id", &self.id)
            .field("owner", self.owner().name())
            .field("path", self.path())
            .field("target", &format_args!("{}.{}", self.target().owner().name(), self.target().name()))
            .finish()
    }
}

impl fmt::Display for Attribute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.owner().name(), self.name())
    }
}
