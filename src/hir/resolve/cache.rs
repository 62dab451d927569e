//! Sharded memoization cache for path resolution.
//!
//! Keys are `(class, interned suffix)`; the value is the attribute the
//! suffix's first segment names in that class. The rest of the chain is the
//! entry keyed by `(type of that attribute, next suffix)`, so an entry is a
//! link and never a copy of the tail. Values are pure functions of the
//! immutable symbol table, so a racing duplicate insert always carries an
//! equal value and the first stored one is kept.

use std::hash::BuildHasher;

use parking_lot::RwLock;
use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::hir::ids::{AttrId, ClassId, SuffixId};
use crate::hir::options::MAX_CACHE_SHARDS;

type CacheKey = (ClassId, SuffixId);
type Shard = RwLock<FxHashMap<CacheKey, AttrId>>;

/// Concurrent `(class, suffix) -> first matched attribute` map.
///
/// Partitioned into independently locked shards so concurrent resolvers
/// mostly take uncontended read locks.
pub struct ResolutionCache {
    shards: Box<[Shard]>,
    mask: usize,
}

impl ResolutionCache {
    /// `shards` is clamped to `1..=MAX_CACHE_SHARDS` and rounded up to a
    /// power of two.
    pub fn new(shards: usize) -> Self {
        let shards = shards.clamp(1, MAX_CACHE_SHARDS).next_power_of_two();
        Self {
            shards: (0..shards).map(|_| RwLock::new(FxHashMap::default())).collect(),
            mask: shards - 1,
        }
    }

    fn shard(&self, key: &CacheKey) -> &Shard {
        let hash = FxBuildHasher.hash_one(key) as usize;
        &self.shards[hash & self.mask]
    }

    pub fn get(&self, class: ClassId, suffix: SuffixId) -> Option<AttrId> {
        let key = (class, suffix);
        self.shard(&key).read().get(&key).copied()
    }

    pub fn insert(&self, class: ClassId, suffix: SuffixId, attr: AttrId) {
        let key = (class, suffix);
        self.shard(&key).write().entry(key).or_insert(attr);
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Number of cached entries over all shards.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| s.read().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for ResolutionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionCache")
            .field("shards", &self.shard_count())
            .field("entries", &self.len())
            .finish()
    }
}
