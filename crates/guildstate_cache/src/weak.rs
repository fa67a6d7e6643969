//! Non-owning lookup index.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{Arc, Weak};

/// Flat id lookup for entities owned by some other collection.
///
/// The index only stores [`Weak`] pointers, so it can never be the reason
/// an entity stays alive. Owners are still expected to call
/// [`WeakIndex::remove`] in the same operation that drops their strong
/// handle; the weak pointer is the backstop, not the mechanism.
///
/// # Example
///
/// ```
/// use guildstate_cache::WeakIndex;
/// use std::sync::Arc;
///
/// let mut index = WeakIndex::new("users");
/// let owner = Arc::new("alice");
/// index.put(1_u64, &owner);
/// assert!(index.get(&1).is_some());
///
/// drop(owner);
/// assert!(index.get(&1).is_none());
/// ```
pub struct WeakIndex<K, T> {
    name: &'static str,
    entries: HashMap<K, Weak<T>>,
}

impl<K, T> WeakIndex<K, T>
where
    K: Hash + Eq + Debug,
{
    /// Create an empty index.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: HashMap::new(),
        }
    }

    /// Associate `key` with `value` without taking ownership.
    pub fn put(&mut self, key: K, value: &Arc<T>) {
        self.entries.insert(key, Arc::downgrade(value));
    }

    /// Resolve `key` if some owner still holds the entity.
    pub fn get(&self, key: &K) -> Option<Arc<T>> {
        self.entries.get(key).and_then(Weak::upgrade)
    }

    /// Whether `key` resolves to a live entity.
    pub fn contains(&self, key: &K) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| entry.strong_count() > 0)
    }

    /// Drop the association for `key`. Absent keys are ignored.
    pub fn remove(&mut self, key: &K) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Forget every association whose entity has been released.
    pub fn purge(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.strong_count() > 0);
        let removed = before - self.entries.len();
        if removed > 0 {
            tracing::debug!(
                index = self.name,
                removed,
                remaining = self.entries.len(),
                "Purged dead weak entries"
            );
        }
        removed
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries
            .values()
            .filter(|entry| entry.strong_count() > 0)
            .count()
    }

    /// Whether no live entries remain.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name used in logs.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<K, T> Debug for WeakIndex<K, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeakIndex")
            .field("name", &self.name)
            .field("entries", &self.entries.len())
            .finish()
    }
}
