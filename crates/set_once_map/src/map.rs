//! The set-once map and its shared handle.
//!
//! # Overview
//!
//! - [`SetOnceMap`]: an insert-only key/value table guarded by one
//!   reader/writer lock owned by the instance.
//! - [`SharedSetOnceMap`]: a convenience wrapper around `Arc<SetOnceMap>` for
//!   sharing one map across threads and components.

use std::{
    collections::{HashMap, hash_map::Entry},
    hash::Hash,
    ops::Deref,
    sync::Arc,
};

use parking_lot::RwLock;

use crate::{
    config::{Config, DefaultConfig},
    error::Error,
};

/// A thread-safe map whose keys can be set only once.
///
/// A key that is present is never replaced: [`set`](Self::set) fails with
/// [`Error::DuplicateKey`] until the key has been removed with
/// [`delete`](Self::delete) or [`clear`](Self::clear).
///
/// # Locking
///
/// All entries are protected by a single [`RwLock`] that belongs to this
/// instance, so separate maps never contend with each other. Lookups take the
/// shared lock, mutations take the exclusive lock. Each operation acquires the
/// lock exactly once and never calls back into the map while holding it.
/// Values removed by [`delete`](Self::delete) or [`clear`](Self::clear) are
/// dropped after the lock has been released.
///
/// # Type Parameters
///
/// - `K`: The key type, compared by [`Eq`] and [`Hash`].
/// - `V`: The value type. [`get`](Self::get) returns clones, so reads require
///   `V: Clone`.
/// - `C`: The [`Config`] selecting the hasher and initial capacity.
pub struct SetOnceMap<K, V, C: Config = DefaultConfig> {
    entries: RwLock<HashMap<K, V, C::BuildHasher>>,
}

impl<K, V, C: Config> std::fmt::Debug for SetOnceMap<K, V, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetOnceMap").finish_non_exhaustive()
    }
}

impl<K, V, C: Config> Default for SetOnceMap<K, V, C> {
    fn default() -> Self { Self::new() }
}

impl<K, V, C: Config> SetOnceMap<K, V, C> {
    /// Creates an empty map reserving [`Config::initial_capacity`] entries.
    #[must_use]
    pub fn new() -> Self { Self::with_capacity(C::initial_capacity()) }

    /// Creates an empty map with room for at least `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity_and_hasher(
                capacity,
                C::BuildHasher::default(),
            )),
        }
    }

    /// Returns the number of entries currently stored.
    #[must_use]
    pub fn len(&self) -> usize { self.entries.read().len() }

    /// Returns `true` if the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.read().is_empty() }

    /// Removes every entry from the map.
    ///
    /// Clearing an empty map is a no-op.
    pub fn clear(&self) {
        let removed = std::mem::take(&mut *self.entries.write());

        if !removed.is_empty() {
            tracing::debug!(removed = removed.len(), "cleared set-once map");
        }
    }
}

impl<K: Eq + Hash, V, C: Config> SetOnceMap<K, V, C> {
    /// Inserts a key/value pair if the key is not present yet.
    ///
    /// # Parameters
    ///
    /// - `key`: The key to insert. `None` is rejected.
    /// - `value`: The value to associate with the key. `None` is rejected.
    ///
    /// # Errors
    ///
    /// - [`Error::NullKey`] if `key` is absent.
    /// - [`Error::NullValue`] if `value` is absent.
    /// - [`Error::DuplicateKey`] if the key is already present. The stored
    ///   value is left untouched.
    pub fn set(
        &self,
        key: impl Into<Option<K>>,
        value: impl Into<Option<V>>,
    ) -> Result<(), Error> {
        let key = key.into().ok_or(Error::NullKey)?;
        let value = value.into().ok_or(Error::NullValue)?;

        let mut entries = self.entries.write();

        match entries.entry(key) {
            Entry::Occupied(_) => Err(Error::DuplicateKey),
            Entry::Vacant(entry) => {
                entry.insert(value);
                tracing::trace!("inserted set-once entry");

                Ok(())
            }
        }
    }

    /// Returns a clone of the value stored under `key`.
    ///
    /// # Errors
    ///
    /// - [`Error::NullKey`] if `key` is absent.
    /// - [`Error::KeyNotFound`] if no value is stored under `key`.
    pub fn get<'k>(&self, key: impl Into<Option<&'k K>>) -> Result<V, Error>
    where
        K: 'k,
        V: Clone,
    {
        let key = key.into().ok_or(Error::NullKey)?;

        self.entries.read().get(key).cloned().ok_or(Error::KeyNotFound)
    }

    /// Returns `true` if a value is stored under `key`.
    ///
    /// # Errors
    ///
    /// [`Error::NullKey`] if `key` is absent.
    pub fn contains_key<'k>(
        &self,
        key: impl Into<Option<&'k K>>,
    ) -> Result<bool, Error>
    where
        K: 'k,
    {
        let key = key.into().ok_or(Error::NullKey)?;

        Ok(self.entries.read().contains_key(key))
    }

    /// Removes the entry stored under `key`, allowing it to be set again.
    ///
    /// # Errors
    ///
    /// - [`Error::NullKey`] if `key` is absent.
    /// - [`Error::KeyNotFound`] if no value is stored under `key`.
    pub fn delete<'k>(&self, key: impl Into<Option<&'k K>>) -> Result<(), Error>
    where
        K: 'k,
    {
        let key = key.into().ok_or(Error::NullKey)?;

        let removed = self.entries.write().remove(key);

        match removed {
            Some(_) => {
                tracing::trace!("deleted set-once entry");
                Ok(())
            }
            None => Err(Error::KeyNotFound),
        }
    }
}

/// A shared, reference-counted [`SetOnceMap`].
///
/// Cloning is cheap: every clone refers to the same underlying map and
/// therefore to the same lock. It implements [`Deref`] to give transparent
/// access to the map's operations.
///
/// # Example
///
/// ```rust
/// use qbice_set_once_map::SharedSetOnceMap;
///
/// let registry = SharedSetOnceMap::<&str, u64>::new();
/// let handle = registry.clone();
///
/// std::thread::spawn(move || handle.set("answer", 42).unwrap())
///     .join()
///     .unwrap();
///
/// assert_eq!(registry.get(&"answer"), Ok(42));
/// ```
pub struct SharedSetOnceMap<K, V, C: Config = DefaultConfig>(
    Arc<SetOnceMap<K, V, C>>,
);

impl<K, V, C: Config> SharedSetOnceMap<K, V, C> {
    /// Creates a new, empty shared map.
    #[must_use]
    pub fn new() -> Self { Self(Arc::new(SetOnceMap::new())) }

    /// Shares an existing map.
    #[must_use]
    pub fn from_map(map: SetOnceMap<K, V, C>) -> Self { Self(Arc::new(map)) }
}

impl<K, V, C: Config> Clone for SharedSetOnceMap<K, V, C> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<K, V, C: Config> Default for SharedSetOnceMap<K, V, C> {
    fn default() -> Self { Self::new() }
}

impl<K, V, C: Config> From<SetOnceMap<K, V, C>> for SharedSetOnceMap<K, V, C> {
    fn from(map: SetOnceMap<K, V, C>) -> Self { Self::from_map(map) }
}

impl<K, V, C: Config> Deref for SharedSetOnceMap<K, V, C> {
    type Target = SetOnceMap<K, V, C>;

    fn deref(&self) -> &Self::Target { &self.0 }
}

impl<K, V, C: Config> std::fmt::Debug for SharedSetOnceMap<K, V, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedSetOnceMap").field(&self.0).finish()
    }
}
