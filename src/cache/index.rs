//! Key Index Module
//!
//! Maps each live key to the handle of its node in the recency list.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::cache::EntryId;

// == Key Index ==
/// O(1) translation from key to [`EntryId`].
#[derive(Debug)]
pub struct KeyIndex<K> {
    map: HashMap<K, EntryId>,
}

impl<K: Hash + Eq> KeyIndex<K> {
    // == Constructor ==
    /// Creates an empty index with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
        }
    }

    // == Get ==
    /// Returns the handle recorded for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<EntryId>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key).copied()
    }

    // == Insert ==
    /// Records `key` at `id`, returning the handle it replaced.
    pub fn insert(&mut self, key: K, id: EntryId) -> Option<EntryId> {
        self.map.insert(key, id)
    }

    // == Remove ==
    /// Drops `key`, returning its handle if it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<EntryId>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.remove(key)
    }

    /// Checks if a key is indexed.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Returns the number of indexed keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if no keys are indexed.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&K, EntryId)> + '_ {
        self.map.iter().map(|(k, id)| (k, *id))
    }
}
