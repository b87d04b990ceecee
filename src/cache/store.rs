//! Cache Store Module
//!
//! Main cache engine combining the key index with the recency list.

use std::borrow::Borrow;
use std::hash::Hash;

use tracing::{debug, info, trace};

use crate::cache::{Cache, CacheStats, Entry, KeyIndex, RecencyList};
use crate::config::Config;
use crate::error::{CacheError, Result};

// == LRU Cache ==
/// Fixed-capacity cache that evicts the least recently used entry.
///
/// `set`, `get`, `remove` and `clear` run in O(1) (amortized for the hash
/// index). A capacity of zero is valid and stores nothing.
#[derive(Debug)]
pub struct LruCache<K, V> {
    /// Key to list handle
    index: KeyIndex<K>,
    /// Entries ordered from most to least recently used
    order: RecencyList<Entry<K, V>>,
    /// Activity counters
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            index: KeyIndex::with_capacity(capacity),
            order: RecencyList::with_capacity(capacity),
            stats: CacheStats::new(),
            capacity,
        }
    }

    /// Creates a cache from a signed capacity, rejecting negative values.
    pub fn try_new(capacity: i64) -> Result<Self> {
        let capacity =
            usize::try_from(capacity).map_err(|_| CacheError::InvalidCapacity(capacity))?;
        Ok(Self::new(capacity))
    }

    /// Creates a cache sized from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        info!("Creating LRU cache with capacity {}", config.capacity);
        Self::new(config.capacity)
    }

    // == Set ==
    /// Stores a key-value pair.
    ///
    /// If the key exists its value is replaced and it becomes the most
    /// recently used entry; returns `true`. Otherwise a new entry is created,
    /// evicting the least recently used one when the cache is full; returns
    /// `false`. A zero-capacity cache stores nothing and returns `false`.
    pub fn set(&mut self, key: K, value: V) -> bool {
        if let Some(id) = self.index.get(&key) {
            if let Some(entry) = self.order.get_mut(id) {
                entry.replace(value);
            }
            self.order.move_to_front(id);
            self.stats.record_update();
            trace!("Updated existing entry in place");
            return true;
        }

        if self.capacity == 0 {
            self.stats.record_rejection();
            trace!("Rejected insert into zero-capacity cache");
            return false;
        }

        if self.order.len() >= self.capacity {
            self.evict_lru();
        }

        let id = self.order.push_front(Entry::new(key.clone(), value));
        self.index.insert(key, id);

        self.stats.record_insertion();
        self.stats.set_total_entries(self.order.len());
        false
    }

    // == Get ==
    /// Retrieves a value by key and marks it most recently used.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.get(key) {
            Some(id) => {
                self.order.move_to_front(id);
                self.stats.record_hit();
                self.order.get(id).map(|entry| &entry.value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Peek ==
    /// Retrieves a value without changing its recency or the stats.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = self.index.get(key)?;
        self.order.get(id).map(|entry| &entry.value)
    }

    /// Checks whether `key` is cached without touching its recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains(key)
    }

    // == Remove ==
    /// Removes an entry by key, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = self.index.remove(key)?;
        let (_, value) = self.order.remove(id)?.into_parts();
        self.stats.set_total_entries(self.order.len());
        Some(value)
    }

    // == Clear ==
    /// Drops every entry. Capacity and lifetime counters are kept.
    pub fn clear(&mut self) {
        let dropped = self.order.len();
        self.order.clear();
        self.index.clear();
        self.stats.set_total_entries(0);
        debug!("Cleared cache: dropped {} entries", dropped);
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.order.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Evict ==
    /// Drops the tail of the recency list along with its index record.
    fn evict_lru(&mut self) {
        if let Some(entry) = self.order.pop_back() {
            self.index.remove(&entry.key);
            self.stats.record_eviction();
            debug!(
                "Evicted least recently used entry ({} of {} slots in use)",
                self.order.len(),
                self.capacity
            );
        }
    }

    /// Verifies that the index and the recency list describe the same keys.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) -> std::result::Result<(), String> {
        self.order.check_invariants()?;

        if self.index.len() != self.order.len() {
            return Err(format!(
                "index holds {} keys but list holds {}",
                self.index.len(),
                self.order.len()
            ));
        }
        if self.order.len() > self.capacity {
            return Err(format!(
                "{} entries exceed capacity {}",
                self.order.len(),
                self.capacity
            ));
        }
        for (key, id) in self.index.iter() {
            match self.order.get(id) {
                Some(entry) if entry.key == *key => {}
                Some(_) => return Err(format!("slot {} holds a different key", id.index())),
                None => return Err(format!("index points at dead slot {}", id.index())),
            }
        }
        Ok(())
    }

    /// Keys from most to least recently used.
    #[cfg(test)]
    pub(crate) fn keys_by_recency(&self) -> Vec<K> {
        self.order.iter().map(|(_, entry)| entry.key.clone()).collect()
    }

    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.order.slot_count()
    }
}

// == Cache Contract ==
impl<K, V> Cache<K, V> for LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    fn set(&mut self, key: K, value: V) -> bool {
        LruCache::set(self, key, value)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        LruCache::get(self, key)
    }

    fn clear(&mut self) {
        LruCache::clear(self)
    }
}
