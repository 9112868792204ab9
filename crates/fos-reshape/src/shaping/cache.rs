//! Shaped Text Cache
//!
//! Caches shaped code units so repeated report labels are shaped once.

use std::collections::HashMap;

use super::shaper::TextShaper;

/// Shaped text cache with LRU eviction
///
/// Entries are keyed by input code units only, so one cache must not be
/// shared between shapers with different configurations. Values are the raw
/// shaped units, including any swapped surrogates.
pub struct ShapeCache {
    /// Shaped output by input units
    cache: HashMap<Vec<u16>, Vec<u16>>,
    /// Maximum entries
    max_entries: usize,
    /// Usage order for LRU (input -> last_used)
    usage: HashMap<Vec<u16>, u64>,
    /// Counter for usage tracking
    counter: u64,
    /// Stats
    hits: u64,
    misses: u64,
}

impl Default for ShapeCache {
    fn default() -> Self {
        Self::new(512)
    }
}

impl ShapeCache {
    /// Create a new cache holding at most `max_entries` strings
    pub fn new(max_entries: usize) -> Self {
        Self {
            cache: HashMap::with_capacity(max_entries),
            max_entries,
            usage: HashMap::with_capacity(max_entries),
            counter: 0,
            hits: 0,
            misses: 0,
        }
    }

    /// Get a cached result
    pub fn get(&mut self, units: &[u16]) -> Option<&[u16]> {
        if self.cache.contains_key(units) {
            self.counter += 1;
            self.usage.insert(units.to_vec(), self.counter);
            self.hits += 1;
            self.cache.get(units).map(Vec::as_slice)
        } else {
            self.misses += 1;
            None
        }
    }

    /// Insert a shaped result
    pub fn insert(&mut self, units: Vec<u16>, shaped: Vec<u16>) {
        if self.max_entries == 0 {
            return;
        }

        if self.cache.len() >= self.max_entries && !self.cache.contains_key(&units) {
            self.evict_lru();
        }

        self.counter += 1;
        self.usage.insert(units.clone(), self.counter);
        self.cache.insert(units, shaped);
    }

    /// Shape code units, reusing a cached result when present
    pub fn shape_units(&mut self, shaper: &TextShaper, units: &[u16]) -> Vec<u16> {
        if let Some(shaped) = self.get(units) {
            return shaped.to_vec();
        }

        let shaped = shaper.shape_units(units);
        self.insert(units.to_vec(), shaped.clone());
        shaped
    }

    /// Shape `text`, reusing a cached result when present
    pub fn shape(&mut self, shaper: &TextShaper, text: &str) -> String {
        let units: Vec<u16> = text.encode_utf16().collect();
        String::from_utf16_lossy(&self.shape_units(shaper, &units))
    }

    /// Evict least recently used entry
    fn evict_lru(&mut self) {
        if let Some(oldest) = self.usage.iter()
            .min_by_key(|&(_, used)| used)
            .map(|(units, _)| units.clone())
        {
            tracing::trace!(len = oldest.len(), "Evicting shaped text");
            self.cache.remove(&oldest);
            self.usage.remove(&oldest);
        }
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Get cache statistics
    pub fn stats(&self) -> ShapeCacheStats {
        ShapeCacheStats {
            size: self.cache.len(),
            max_size: self.max_entries,
            hits: self.hits,
            misses: self.misses,
            hit_rate: if self.hits + self.misses > 0 {
                self.hits as f64 / (self.hits + self.misses) as f64
            } else {
                0.0
            },
        }
    }

    /// Clear the cache and reset statistics
    pub fn clear(&mut self) {
        self.cache.clear();
        self.usage.clear();
        self.counter = 0;
        self.hits = 0;
        self.misses = 0;
    }
}

/// Cache statistics
#[derive(Debug, Clone)]
pub struct ShapeCacheStats {
    pub size: usize,
    pub max_size: usize,
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
}
