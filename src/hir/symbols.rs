//! Symbol table: the global class namespace and per-class attribute namespaces.
//!
//! This is the first resolution phase. It indexes names only: attribute
//! types and ref paths are stored as written and interpreted by later phases.
//!
//! Records are stored in three arenas (classes, attributes, refs). Attributes
//! and refs are allocated class by class, so each class owns a contiguous run
//! of ids and arena order is declaration order.
//!
//! Ref path suffixes are interned as `(first segment, rest)` pairs built from
//! the last segment backward, so equal suffixes of different refs share one
//! [`SuffixId`] and interning costs one hash per segment.

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};
use smol_str::SmolStr;
use text_size::TextRange;

use super::error::{LoadError, NameKind};
use super::ids::{AttrId, ClassId, RefId, SuffixId};
use crate::syntax::{PathSegment, SourceModel, is_identifier, split_path};

/// A class and its attribute namespace.
#[derive(Clone, Debug)]
pub struct ClassEntry {
    pub name: SmolStr,
    pub range: Option<TextRange>,
    pub attributes: Vec<AttrId>,
    pub refs: Vec<RefId>,
    /// Attribute name -> id, for O(1) path segment lookups.
    namespace: FxHashMap<SmolStr, AttrId>,
}

impl ClassEntry {
    /// Look up an attribute declared directly in this class.
    pub fn lookup(&self, name: &str) -> Option<AttrId> {
        self.namespace.get(name).copied()
    }
}

/// An attribute with its declared (not yet linked) type name.
#[derive(Clone, Debug)]
pub struct AttributeEntry {
    pub name: SmolStr,
    pub owner: ClassId,
    /// Position within the owning class.
    pub index: usize,
    pub type_name: SmolStr,
    pub range: Option<TextRange>,
}

/// A ref with its path split into segments.
#[derive(Clone, Debug)]
pub struct RefEntry {
    pub owner: ClassId,
    /// Position within the owning class's ref sequence.
    pub index: usize,
    pub path: SmolStr,
    pub segments: Box<[PathSegment]>,
    /// `suffixes[i]` is the interned id of `segments[i..]`.
    pub suffixes: Box<[SuffixId]>,
    pub range: Option<TextRange>,
}

impl RefEntry {
    /// Source range of one segment (0-based), falling back to the whole path
    /// when the source text had trivia between segments.
    pub fn segment_range(&self, segment: usize) -> Option<TextRange> {
        let range = self.range?;
        let seg = self.segments.get(segment)?;
        if usize::from(range.len()) != self.path.len() {
            return Some(range);
        }
        let start = range.start() + text_size::TextSize::new(seg.offset);
        Some(TextRange::at(start, text_size::TextSize::of(seg.name.as_str())))
    }
}

/// The global class namespace plus every class's attribute namespace.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    classes: Vec<ClassEntry>,
    attributes: Vec<AttributeEntry>,
    refs: Vec<RefEntry>,
    /// Class name -> id (IndexMap preserves declaration order).
    by_name: IndexMap<SmolStr, ClassId, FxBuildHasher>,
    /// (first segment, rest of suffix) -> suffix id
    suffixes: FxHashMap<(SmolStr, SuffixId), SuffixId>,
}

impl SymbolTable {
    /// Index a source model, taking ownership of it.
    ///
    /// Fails on the first duplicate class name, duplicate attribute name
    /// within a class, invalid identifier or malformed ref path, in
    /// declaration order.
    pub fn build(source: SourceModel) -> Result<Self, LoadError> {
        let mut table = SymbolTable {
            classes: Vec::with_capacity(source.classes.len()),
            attributes: Vec::with_capacity(source.attribute_count()),
            refs: Vec::with_capacity(source.ref_count()),
            by_name: IndexMap::with_capacity_and_hasher(source.classes.len(), FxBuildHasher),
            suffixes: FxHashMap::default(),
        };

        for class in source.classes {
            check_identifier(NameKind::Class, &class.name, class.range)?;
            let class_id = ClassId::new(table.classes.len());

            if let Some(&existing) = table.by_name.get(&class.name) {
                return Err(LoadError::DuplicateClassName {
                    name: class.name,
                    first: table.classes[existing.index()].range,
                    duplicate: class.range,
                });
            }

            let mut entry = ClassEntry {
                name: class.name.clone(),
                range: class.range,
                attributes: Vec::with_capacity(class.attributes.len()),
                refs: Vec::with_capacity(class.refs.len()),
                namespace: FxHashMap::default(),
            };
            entry.namespace.reserve(class.attributes.len());

            for (index, attr) in class.attributes.into_iter().enumerate() {
                check_identifier(NameKind::Attribute, &attr.name, attr.range)?;
                check_identifier(NameKind::Type, &attr.type_name, attr.range)?;

                let attr_id = AttrId::new(table.attributes.len());
                if let Some(&existing) = entry.namespace.get(&attr.name) {
                    return Err(LoadError::DuplicateAttributeName {
                        class: class.name,
                        name: attr.name,
                        first: table.attributes[existing.index()].range,
                        duplicate: attr.range,
                    });
                }
                entry.namespace.insert(attr.name.clone(), attr_id);
                entry.attributes.push(attr_id);
                table.attributes.push(AttributeEntry {
                    name: attr.name,
                    owner: class_id,
                    index,
                    type_name: attr.type_name,
                    range: attr.range,
                });
            }

            for (index, decl) in class.refs.into_iter().enumerate() {
                let segments = split_path(&decl.path);
                if let Some(bad) = segments.iter().position(|s| !is_identifier(&s.name)) {
                    return Err(LoadError::MalformedPath {
                        class: class.name,
                        path: decl.path,
                        segment_index: bad + 1,
                        range: decl.range,
                    });
                }
                let ref_id = RefId::new(table.refs.len());
                let suffixes = table.intern_suffixes(&segments);
                entry.refs.push(ref_id);
                table.refs.push(RefEntry {
                    owner: class_id,
                    index,
                    path: decl.path,
                    segments: segments.into_boxed_slice(),
                    suffixes,
                    range: decl.range,
                });
            }

            tracing::trace!(
                "[SYMBOLS] class '{}' -> {:?} ({} attributes, {} refs)",
                entry.name,
                class_id,
                entry.attributes.len(),
                entry.refs.len()
            );
            table.by_name.insert(entry.name.clone(), class_id);
            table.classes.push(entry);
        }

        tracing::debug!(
            "[SYMBOLS] indexed {} classes, {} attributes, {} refs, {} path suffixes",
            table.classes.len(),
            table.attributes.len(),
            table.refs.len(),
            table.suffixes.len()
        );
        Ok(table)
    }

    fn intern_suffixes(&mut self, segments: &[PathSegment]) -> Box<[SuffixId]> {
        let mut ids = vec![SuffixId::EMPTY; segments.len()];
        let mut rest = SuffixId::EMPTY;
        for (i, segment) in segments.iter().enumerate().rev() {
            // id 0 is the empty suffix
            let fresh = SuffixId::new(self.suffixes.len() + 1);
            rest = *self
                .suffixes
                .entry((segment.name.clone(), rest))
                .or_insert(fresh);
            ids[i] = rest;
        }
        ids.into_boxed_slice()
    }

    // ============================================================
    // Data Access Methods (for the linker and resolver)
    // ============================================================

    /// Look up a class in the global namespace (O(1)).
    pub fn class_by_name(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).copied()
    }

    /// Look up an attribute in one class's namespace (O(1)).
    pub fn lookup_attribute(&self, class: ClassId, name: &str) -> Option<AttrId> {
        self.classes.get(class.index())?.lookup(name)
    }

    pub fn class(&self, id: ClassId) -> &ClassEntry {
        &self.classes[id.index()]
    }

    pub fn attribute(&self, id: AttrId) -> &AttributeEntry {
        &self.attributes[id.index()]
    }

    pub fn reference(&self, id: RefId) -> &RefEntry {
        &self.refs[id.index()]
    }

    pub fn classes(&self) -> &[ClassEntry] {
        &self.classes
    }

    pub fn attributes(&self) -> &[AttributeEntry] {
        &self.attributes
    }

    pub fn refs(&self) -> &[RefEntry] {
        &self.refs
    }

    /// Number of distinct non-empty path suffixes over all refs.
    pub fn suffix_count(&self) -> usize {
        self.suffixes.len()
    }

    /// Class names in declaration order.
    pub fn class_names(&self) -> impl Iterator<Item = &SmolStr> {
        self.by_name.keys()
    }
}

fn check_identifier(kind: NameKind, text: &SmolStr, range: Option<TextRange>) -> Result<(), LoadError> {
    if is_identifier(text) {
        Ok(())
    } else {
        Err(LoadError::InvalidIdentifier {
            kind,
            text: text.clone(),
            range,
        })
    }
}
