//! Load options

/// Upper bound on resolution cache shards.
pub(crate) const MAX_CACHE_SHARDS: usize = 1 << 16;

/// Options controlling how a model is resolved.
///
/// Results never depend on these settings; they only trade memory and
/// threads for speed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Memoize `(class, path suffix)` resolutions across refs
    pub memoize: bool,
    /// Link types and resolve refs on the rayon thread pool
    pub parallel: bool,
    /// Number of lock shards in the resolution cache (at most 65536, rounded
    /// up to a power of two)
    pub cache_shards: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            memoize: true,
            parallel: true,
            cache_shards: 16,
        }
    }
}

impl LoadOptions {
    /// Sequential, uncached resolution: the reference behaviour.
    pub fn sequential() -> Self {
        Self {
            memoize: false,
            parallel: false,
            ..Self::default()
        }
    }

    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_cache_shards(mut self, shards: usize) -> Self {
        self.cache_shards = shards;
        self
    }

    /// Shard count actually used: a power of two in `1..=MAX_CACHE_SHARDS`.
    pub(crate) fn shard_count(&self) -> usize {
        self.cache_shards.clamp(1, MAX_CACHE_SHARDS).next_power_of_two()
    }
}
