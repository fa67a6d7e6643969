//! Registry shared across threads.

use crate::{RegistryConfig, StateRegistry};
use guildstate_error::GuildStateResult;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// A [`StateRegistry`] behind one exclusive lock.
///
/// Every mutation holds the write lock for its whole call, so a cascade
/// (a guild channel entering both views, a role leaving every member)
/// is never observed halfway by another thread. Clones share the registry.
///
/// # Example
///
/// ```
/// use guildstate_registry::{RegistryConfig, SharedRegistry};
///
/// let shared = SharedRegistry::from_config(RegistryConfig::default()).unwrap();
/// let writer = shared.clone();
/// std::thread::spawn(move || writer.write().set_guild_unavailability(1, true))
///     .join()
///     .unwrap();
/// assert!(shared.read().guild_ids().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct SharedRegistry {
    inner: Arc<RwLock<StateRegistry>>,
}

impl SharedRegistry {
    /// Share an existing registry.
    pub fn new(registry: StateRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Build and share a registry.
    ///
    /// # Errors
    ///
    /// Returns a capacity error if either capacity is zero.
    pub fn from_config(config: RegistryConfig) -> GuildStateResult<Self> {
        Ok(Self::new(StateRegistry::new(config)?))
    }

    /// Shared access for queries that do not touch recency.
    pub fn read(&self) -> RwLockReadGuard<'_, StateRegistry> {
        self.inner.read()
    }

    /// Exclusive access for mutations and recency-refreshing lookups.
    pub fn write(&self) -> RwLockWriteGuard<'_, StateRegistry> {
        self.inner.write()
    }

    /// Run `f` with exclusive access and return its result.
    pub fn apply<R>(&self, f: impl FnOnce(&mut StateRegistry) -> R) -> R {
        f(&mut self.inner.write())
    }
}
