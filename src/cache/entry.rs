//! Cache Entry Module
//!
//! Defines the record stored for each live key.

// == Cache Entry ==
/// A single cached record.
///
/// The key is kept alongside the value so that evicting the tail of the
/// recency list can also drop the key from the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    /// The key this entry is indexed under
    pub key: K,
    /// The stored value
    pub value: V,
}

impl<K, V> Entry<K, V> {
    // == Constructor ==
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    // == Replace ==
    /// Swaps in a new value, returning the previous one.
    pub fn replace(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    // == Into Parts ==
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = Entry::new("key", 7);
        assert_eq!(entry.key, "key");
        assert_eq!(entry.value, 7);
    }

    #[test]
    fn test_entry_replace() {
        let mut entry = Entry::new("key", "old".to_string());
        let previous = entry.replace("new".to_string());

        assert_eq!(previous, "old");
        assert_eq!(entry.value, "new");
        assert_eq!(entry.key, "key");
    }

    #[test]
    fn test_entry_into_parts() {
        let entry = Entry::new(1u32, vec![1, 2, 3]);
        assert_eq!(entry.into_parts(), (1, vec![1, 2, 3]));
    }
}
