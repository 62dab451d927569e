//! Type linking: resolving each attribute's type name to a class.
//!
//! Second resolution phase. Each attribute is linked independently against
//! the finished global namespace, so classes are linked as parallel tasks
//! with no shared mutable state; each task returns the links for its own
//! contiguous run of attributes.

use rayon::prelude::*;

use super::error::LoadError;
use super::ids::{AttrId, ClassId};
use super::options::LoadOptions;
use super::symbols::{ClassEntry, SymbolTable};

/// Resolved type of every attribute, indexed by [`AttrId`].
///
/// Only [`link_types`] constructs this, so holding one proves every
/// attribute of its symbol table has a type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeLinks {
    types: Box<[ClassId]>,
}

impl TypeLinks {
    /// The class an attribute's type names.
    pub fn type_of(&self, attr: AttrId) -> ClassId {
        self.types[attr.index()]
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Link every attribute of `table` to its type class.
///
/// On failure the error reported is the first unresolved type in
/// declaration order, independent of scheduling.
pub fn link_types(table: &SymbolTable, options: &LoadOptions) -> Result<TypeLinks, LoadError> {
    let link_class = |class: &ClassEntry| -> Result<Vec<ClassId>, LoadError> {
        class
            .attributes
            .iter()
            .map(|&attr_id| {
                let attr = table.attribute(attr_id);
                match table.class_by_name(&attr.type_name) {
                    Some(ty) => {
                        tracing::trace!(
                            "[LINK] {}.{} : {} -> {:?}",
                            class.name,
                            attr.name,
                            attr.type_name,
                            ty
                        );
                        Ok(ty)
                    }
                    None => Err(LoadError::UnresolvedTypeReference {
                        class: class.name.clone(),
                        attribute: attr.name.clone(),
                        type_name: attr.type_name.clone(),
                        range: attr.range,
                    }),
                }
            })
            .collect()
    };

    let per_class: Vec<Result<Vec<ClassId>, LoadError>> = if options.parallel {
        table.classes().par_iter().map(link_class).collect()
    } else {
        table.classes().iter().map(link_class).collect()
    };

    // Attribute ids are allocated class by class, so concatenating in class
    // order yields AttrId order.
    let mut types = Vec::with_capacity(table.attributes().len());
    for links in per_class {
        types.extend(links?);
    }
    debug_assert_eq!(types.len(), table.attributes().len());

    tracing::debug!("[LINK] linked {} attribute types", types.len());
    Ok(TypeLinks {
        types: types.into_boxed_slice(),
    })
}
