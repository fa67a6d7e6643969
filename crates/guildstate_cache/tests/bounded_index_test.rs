//! Tests for the bounded LRU index.

use guildstate_cache::BoundedIndex;

#[test]
fn test_zero_capacity_is_rejected() {
    let err = BoundedIndex::<u64, &str>::new("messages", 0).unwrap_err();
    assert_eq!(err.cache(), "messages");
    assert_eq!(*err.capacity(), 0);
}

#[test]
fn test_insertion_order_evicts_oldest() {
    let mut index = BoundedIndex::new("messages", 2).unwrap();
    assert_eq!(index.put(1_u64, "one"), None);
    assert_eq!(index.put(2, "two"), None);
    assert_eq!(index.put(3, "three"), Some((1, "one")));

    assert!(!index.contains(&1));
    assert!(index.contains(&2));
    assert!(index.contains(&3));
    assert_eq!(index.len(), 2);
}

#[test]
fn test_access_refreshes_recency() {
    let mut index = BoundedIndex::new("messages", 2).unwrap();
    index.put(1_u64, "one");
    index.put(2, "two");
    assert_eq!(index.get(&1), Some(&"one"));

    assert_eq!(index.put(3, "three"), Some((2, "two")));
    assert!(index.contains(&1));
    assert!(!index.contains(&2));
}

#[test]
fn test_peek_does_not_refresh_recency() {
    let mut index = BoundedIndex::new("messages", 2).unwrap();
    index.put(1_u64, "one");
    index.put(2, "two");
    assert_eq!(index.peek(&1), Some(&"one"));

    assert_eq!(index.put(3, "three"), Some((1, "one")));
}

#[test]
fn test_replacing_a_key_is_not_an_eviction() {
    let mut index = BoundedIndex::new("dm_channels", 2).unwrap();
    index.put(1_u64, "one");
    index.put(2, "two");
    assert_eq!(index.put(1, "uno"), None);

    assert_eq!(index.len(), 2);
    assert_eq!(index.peek(&1), Some(&"uno"));
    // 1 was refreshed by the replacement, so 2 goes next.
    assert_eq!(index.put(3, "three"), Some((2, "two")));
}

#[test]
fn test_remove_is_idempotent() {
    let mut index = BoundedIndex::new("messages", 4).unwrap();
    index.put(1_u64, "one");
    assert_eq!(index.remove(&1), Some("one"));
    assert_eq!(index.remove(&1), None);
    assert_eq!(index.remove(&42), None);
    assert!(index.is_empty());
}

#[test]
fn test_capacity_never_exceeded() {
    let mut index = BoundedIndex::new("messages", 3).unwrap();
    for id in 0..50_u64 {
        index.put(id, id * 10);
        assert!(index.len() <= 3);
    }
    assert_eq!(index.capacity(), 3);
    let keys: Vec<u64> = index.keys().copied().collect();
    assert_eq!(keys, vec![49, 48, 47]);
}

#[test]
fn test_clear_empties_index() {
    let mut index = BoundedIndex::new("messages", 3).unwrap();
    index.put(1_u64, 1);
    index.put(2, 2);
    index.clear();
    assert!(index.is_empty());
    assert_eq!(index.capacity(), 3);
}
