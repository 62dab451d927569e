//! Path resolution: resolving each ref's dotted path to an attribute.
//!
//! Third resolution phase. A path `seg1.seg2…segk` on a ref owned by class
//! `C` is walked iteratively:
//!
//! ```text
//! current = C
//! for i in 1..k:  attr = current.attrs[seg_i]; current = type_of(attr)
//! target = current.attrs[seg_k]
//! ```
//!
//! Every step is one O(1) namespace lookup, and the walk performs at most
//! `k` of them. The attribute-type graph may be cyclic; revisiting a class
//! is normal and cannot loop because the path is finite.
//!
//! # Memoization
//!
//! With memoization enabled, before each lookup the resolver consults a
//! [`ResolutionCache`] keyed by `(current class, interned suffix id)`. Each
//! entry holds one attribute; from the first hit the walk follows cached
//! entries instead of namespace lookups. After a successful walk every
//! missed `(class, suffix)` pair is cached, last segment first, so a cached
//! pair always has its whole tail cached. Keys and values are fixed size,
//! so each step costs O(1) however long the path is.
//!
//! Ad-hoc paths ([`PathResolver::resolve_path`]) have no interned suffixes
//! and are always walked without the cache.

mod cache;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use super::error::LoadError;
use super::ids::{AttrId, ClassId, RefId, SuffixId};
use super::link::TypeLinks;
use super::options::LoadOptions;
use super::symbols::{ClassEntry, SymbolTable};
use crate::syntax::PathSegment;

pub use cache::ResolutionCache;

/// Counters collected while resolving.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolveStats {
    /// Attribute namespace lookups performed
    pub lookups: usize,
    /// Walks whose remainder was answered by the cache
    pub cache_hits: usize,
    /// Cache reads that missed
    pub cache_misses: usize,
    /// Entries in the cache when the snapshot was taken
    pub cache_entries: usize,
}

/// Why a walk stopped: 0-based index of the segment that was not found,
/// and the class searched for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unresolved {
    pub segment: usize,
    pub searched: ClassId,
}

/// Resolves ref paths against a linked symbol table.
///
/// Constructing one requires the finished [`TypeLinks`], so no walk can
/// start before every attribute type is linked.
pub struct PathResolver<'a> {
    table: &'a SymbolTable,
    links: &'a TypeLinks,
    cache: Option<ResolutionCache>,
    lookups: AtomicUsize,
    cache_hits: AtomicUsize,
    cache_misses: AtomicUsize,
}

impl<'a> PathResolver<'a> {
    pub fn new(table: &'a SymbolTable, links: &'a TypeLinks, options: &LoadOptions) -> Self {
        Self {
            table,
            links,
            cache: options
                .memoize
                .then(|| ResolutionCache::new(options.shard_count())),
            lookups: AtomicUsize::new(0),
            cache_hits: AtomicUsize::new(0),
            cache_misses: AtomicUsize::new(0),
        }
    }

    /// Walk `segments` starting at `origin`, without the cache.
    ///
    /// Returns every attribute matched along the way; the last one is the
    /// target.
    pub fn resolve_path(&self, origin: ClassId, segments: &[PathSegment]) -> Result<Arc<[AttrId]>, Unresolved> {
        self.walk(origin, segments, None)
    }

    fn walk(
        &self,
        origin: ClassId,
        segments: &[PathSegment],
        suffixes: Option<&[SuffixId]>,
    ) -> Result<Arc<[AttrId]>, Unresolved> {
        let memo = self.cache.as_ref().zip(suffixes);
        let mut current = origin;
        let mut matched: Vec<AttrId> = Vec::with_capacity(segments.len());
        // (class, segment index) pairs the cache did not have
        let mut missed: Vec<(ClassId, usize)> = Vec::new();
        let mut following = false;

        for (i, segment) in segments.iter().enumerate() {
            if let Some((cache, suffixes)) = memo {
                if let Some(attr) = cache.get(current, suffixes[i]) {
                    if !following {
                        following = true;
                        self.cache_hits.fetch_add(1, Ordering::Relaxed);
                        tracing::trace!("[RESOLVE] cache hit {:?} at segment {}", current, i);
                    }
                    matched.push(attr);
                    current = self.links.type_of(attr);
                    continue;
                }
                following = false;
                self.cache_misses.fetch_add(1, Ordering::Relaxed);
                missed.push((current, i));
            }

            self.lookups.fetch_add(1, Ordering::Relaxed);
            let Some(attr) = self.table.lookup_attribute(current, &segment.name) else {
                tracing::trace!(
                    "[RESOLVE] '{}' not found in class '{}'",
                    segment.name,
                    self.table.class(current).name
                );
                return Err(Unresolved {
                    segment: i,
                    searched: current,
                });
            };
            matched.push(attr);
            current = self.links.type_of(attr);
        }

        if let Some((cache, suffixes)) = memo {
            for &(class, i) in missed.iter().rev() {
                cache.insert(class, suffixes[i], matched[i]);
            }
        }
        Ok(matched.into())
    }

    /// Resolve one ref of the symbol table.
    pub fn resolve_ref(&self, id: RefId) -> Result<Arc<[AttrId]>, LoadError> {
        let entry = self.table.reference(id);
        self.walk(entry.owner, &entry.segments, Some(&entry.suffixes[..]))
            .map_err(|unresolved| LoadError::UnresolvedPathSegment {
                class: self.table.class(entry.owner).name.clone(),
                ref_index: entry.index,
                path: entry.path.clone(),
                segment_index: unresolved.segment + 1,
                segment: entry.segments[unresolved.segment].name.clone(),
                searched: self.table.class(unresolved.searched).name.clone(),
                range: entry.segment_range(unresolved.segment),
            })
    }

    /// Resolve every ref, returning matched paths indexed by [`RefId`].
    ///
    /// On failure the error reported is the first failing ref in
    /// declaration order, independent of scheduling.
    pub fn resolve_all(&self, parallel: bool) -> Result<Vec<Arc<[AttrId]>>, LoadError> {
        let resolve_class = |class: &ClassEntry| -> Result<Vec<Arc<[AttrId]>>, LoadError> {
            class.refs.iter().map(|&id| self.resolve_ref(id)).collect()
        };

        let per_class: Vec<Result<Vec<Arc<[AttrId]>>, LoadError>> = if parallel {
            self.table.classes().par_iter().map(resolve_class).collect()
        } else {
            self.table.classes().iter().map(resolve_class).collect()
        };

        // Ref ids are allocated class by class, so class order is RefId order.
        let mut resolved = Vec::with_capacity(self.table.refs().len());
        for refs in per_class {
            resolved.extend(refs?);
        }

        let stats = self.stats();
        tracing::debug!(
            "[RESOLVE] resolved {} refs: {} lookups, {} cache hits, {} misses, {} entries",
            resolved.len(),
            stats.lookups,
            stats.cache_hits,
            stats.cache_misses,
            stats.cache_entries
        );
        Ok(resolved)
    }

    pub fn stats(&self) -> ResolveStats {
        ResolveStats {
            lookups: self.lookups.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            cache_entries: self.cache.as_ref().map_or(0, |c| c.len()),
        }
    }
}
