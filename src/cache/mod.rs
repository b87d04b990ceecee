//! Cache Module
//!
//! Provides a capacity-bounded key/value cache with LRU eviction.

mod entry;
mod index;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::Entry;
pub use index::KeyIndex;
pub use lru::{EntryId, RecencyList};
pub use stats::CacheStats;
pub use store::LruCache;

// == Cache Contract ==
/// Operations every cache policy provides.
///
/// Implementations are single-threaded. Callers sharing one instance across
/// threads must serialize access themselves, e.g. behind a `Mutex`.
pub trait Cache<K, V> {
    /// Stores `value` under `key`.
    ///
    /// Returns `true` if the key was already present and its value was
    /// replaced, `false` if this was a new insertion (or the cache refused to
    /// store anything).
    fn set(&mut self, key: K, value: V) -> bool;

    /// Looks up `key`, marking it as recently used when found.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Drops every entry. Capacity is unchanged.
    fn clear(&mut self);
}
