//! Shared entity handles.

use parking_lot::RwLock;
use std::sync::Arc;

/// Identifier of any entity; unique within its kind.
pub type Snowflake = u64;

/// Shared, interior-mutable reference to a live entity.
///
/// Every holder of a handle sees updates the registry applies in place.
pub type Handle<T> = Arc<RwLock<T>>;

/// Wrap a freshly built entity in a [`Handle`].
pub fn handle<T>(value: T) -> Handle<T> {
    Arc::new(RwLock::new(value))
}
