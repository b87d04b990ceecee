//! Recency Cache - a capacity-bounded LRU key/value cache
//!
//! Lookups, inserts, updates and evictions all run in constant time. Entries
//! live in an arena-backed doubly-linked list ordered by recency, and a hash
//! index maps each key to its list handle.
//!
//! ```
//! use recency_cache::LruCache;
//!
//! let mut cache = LruCache::new(2);
//! cache.set("a", 1);
//! cache.set("b", 2);
//! cache.get("a");
//! cache.set("c", 3); // evicts "b"
//!
//! assert_eq!(cache.get("b"), None);
//! assert_eq!(cache.get("a"), Some(&1));
//! ```

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{Cache, CacheStats, LruCache};
pub use config::Config;
pub use error::{CacheError, Result};
