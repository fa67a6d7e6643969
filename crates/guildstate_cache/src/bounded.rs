//! Fixed-capacity LRU index.

use guildstate_error::CapacityError;
use lru::LruCache;
use std::fmt::Debug;
use std::hash::Hash;
use std::num::NonZeroUsize;

/// Owning map with least-recently-used eviction.
///
/// Capacity is fixed at construction. `put` and `get` both count as a use.
///
/// # Example
///
/// ```
/// use guildstate_cache::BoundedIndex;
///
/// let mut index = BoundedIndex::new("messages", 2).unwrap();
/// index.put(1_u64, "one");
/// index.put(2, "two");
/// index.get(&1);
///
/// // 2 is now the least recently used entry.
/// assert_eq!(index.put(3, "three"), Some((2, "two")));
/// assert!(index.contains(&1));
/// ```
pub struct BoundedIndex<K, V> {
    name: &'static str,
    entries: LruCache<K, V>,
}

impl<K, V> BoundedIndex<K, V>
where
    K: Hash + Eq + Clone + Debug,
{
    /// Create an index holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] when `capacity` is zero.
    #[track_caller]
    pub fn new(name: &'static str, capacity: usize) -> Result<Self, CapacityError> {
        let Some(capacity) = NonZeroUsize::new(capacity) else {
            return Err(CapacityError::new(name, capacity));
        };
        tracing::debug!(name, capacity = capacity.get(), "Creating new BoundedIndex");
        Ok(Self {
            name,
            entries: LruCache::new(capacity),
        })
    }

    /// Insert or refresh an entry.
    ///
    /// Returns the entry that was evicted to make room, if any. Replacing the
    /// value of an existing key is not an eviction.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        match self.entries.push(key.clone(), value) {
            Some((old_key, _)) if old_key == key => None,
            Some((evicted_key, evicted)) => {
                tracing::debug!(
                    index = self.name,
                    key = ?evicted_key,
                    "Evicting LRU entry"
                );
                Some((evicted_key, evicted))
            }
            None => None,
        }
    }

    /// Look up an entry, marking it most recently used.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Look up an entry without touching recency.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.entries.peek(key)
    }

    /// Remove an entry. Absent keys are ignored.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.pop(key)
    }

    /// Whether `key` is present. Does not touch recency.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains(key)
    }

    /// Keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Values from most to least recently used.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        let count = self.entries.len();
        self.entries.clear();
        tracing::info!(index = self.name, cleared = count, "Cleared bounded index");
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fixed capacity.
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    /// Name used in logs and errors.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<K: Hash + Eq, V> Debug for BoundedIndex<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedIndex")
            .field("name", &self.name)
            .field("len", &self.entries.len())
            .field("capacity", &self.entries.cap())
            .finish()
    }
}
