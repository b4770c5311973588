/*!
 * Concurrent List
 * Lock-guarded, growable indexed sequence
 *
 * Every operation holds the instance lock for its full duration. Operations
 * that hand out many elements (iteration, copies, clones, serialization)
 * copy under the lock and release it before the caller sees the copy.
 *
 * Slots are `Option<T>`: an absent value is legitimate payload.
 */

use super::guarded::Guarded;
use super::snapshot::Snapshot;
use crate::core::errors::{check_destination, check_index, check_insert_index};
use crate::core::{
    CollectionConfig, CollectionResult, IndexedCollection, SynchronizedCollection,
};
use parking_lot::MutexGuard;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::{debug, trace};

/// Thread-safe indexed sequence guarded by a single lock
///
/// # Example
///
/// ```
/// use concurrent_collections::ConcurrentList;
///
/// let list: ConcurrentList<i32> = ConcurrentList::new();
/// assert_eq!(list.add(10), 0);
/// assert_eq!(list.add(None), 1);
/// list.insert(1, 20).unwrap();
///
/// assert_eq!(list.get(1).unwrap(), Some(20));
/// assert_eq!(list.index_of(&10), Some(0));
/// assert!(!list.contains(None));
/// ```
pub struct ConcurrentList<T> {
    inner: Guarded<Vec<Option<T>>>,
}

impl<T> ConcurrentList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self::with_config(CollectionConfig::default())
    }

    /// Create an empty list with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(CollectionConfig::default().with_capacity(capacity))
    }

    pub fn with_config(config: CollectionConfig) -> Self {
        Self::from_parts(Vec::with_capacity(config.initial_capacity), config)
    }

    fn from_parts(items: Vec<Option<T>>, config: CollectionConfig) -> Self {
        Self {
            inner: Guarded::new(items, config),
        }
    }

    pub fn config(&self) -> &CollectionConfig {
        self.inner.config()
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.inner.with(|items| items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Always `true`: callers never need external locking
    pub const fn is_synchronized(&self) -> bool {
        true
    }

    /// Always `false`: the list grows without bound
    pub const fn is_fixed_size(&self) -> bool {
        false
    }

    /// Always `false`
    pub const fn is_read_only(&self) -> bool {
        false
    }

    /// Acquire the instance lock directly
    ///
    /// Every method already synchronizes, so this exists only for
    /// interoperability with code that locks externally. Do not call other
    /// methods on this list while holding the guard; the lock is not
    /// reentrant.
    pub fn lock(&self) -> MutexGuard<'_, Vec<Option<T>>> {
        self.inner.lock()
    }

    /// Consume the list and return its elements
    pub fn into_inner(self) -> Vec<Option<T>> {
        self.inner.into_inner()
    }

    /// Append `value` and return the index it now occupies
    pub fn add(&self, value: impl Into<Option<T>>) -> usize {
        let value = value.into();
        let index = self.inner.with(|items| {
            items.push(value);
            items.len() - 1
        });
        trace!(collection = self.inner.label(), index, "add");
        index
    }

    /// Insert `value` at `index`, shifting `index..len` one position toward the tail
    pub fn insert(&self, index: usize, value: impl Into<Option<T>>) -> CollectionResult<()> {
        let value = value.into();
        self.inner
            .with(|items| -> CollectionResult<()> {
                check_insert_index(index, items.len())?;
                items.insert(index, value);
                Ok(())
            })
            .map_err(|e| self.inner.rejected("insert", e))?;
        trace!(collection = self.inner.label(), index, "insert");
        Ok(())
    }

    /// Replace the element at `index` and return the previous one
    pub fn set(&self, index: usize, value: impl Into<Option<T>>) -> CollectionResult<Option<T>> {
        let value = value.into();
        let previous = self
            .inner
            .with(|items| -> CollectionResult<Option<T>> {
                check_index(index, items.len())?;
                Ok(std::mem::replace(&mut items[index], value))
            })
            .map_err(|e| self.inner.rejected("set", e))?;
        trace!(collection = self.inner.label(), index, "set");
        Ok(previous)
    }

    /// Remove the element at `index`, shifting later elements toward the head
    pub fn remove_at(&self, index: usize) -> CollectionResult<Option<T>> {
        let removed = self
            .inner
            .with(|items| -> CollectionResult<Option<T>> {
                check_index(index, items.len())?;
                Ok(items.remove(index))
            })
            .map_err(|e| self.inner.rejected("remove_at", e))?;
        trace!(collection = self.inner.label(), index, "remove_at");
        Ok(removed)
    }

    /// Remove all elements
    pub fn clear(&self) {
        let cleared = self.inner.with(|items| {
            let len = items.len();
            items.clear();
            len
        });
        trace!(collection = self.inner.label(), cleared, "clear");
    }
}

impl<T: PartialEq> ConcurrentList<T> {
    /// Whether an element equal to `value` is present
    ///
    /// An absent query never matches, even when absent slots are stored.
    pub fn contains<'a>(&self, value: impl Into<Option<&'a T>>) -> bool
    where
        T: 'a,
    {
        let value = value.into();
        self.inner.with(|items| match value {
            Some(value) => items.iter().any(|slot| slot.as_ref() == Some(value)),
            None => false,
        })
    }

    /// Index of the first element equal to `value`
    ///
    /// An absent query locates the first absent slot.
    pub fn index_of<'a>(&self, value: impl Into<Option<&'a T>>) -> Option<usize>
    where
        T: 'a,
    {
        let value = value.into();
        self.inner
            .with(|items| items.iter().position(|slot| slot.as_ref() == value))
    }

    /// Remove the first element equal to `value`, if any
    ///
    /// Returns whether an element was removed.
    pub fn remove<'a>(&self, value: impl Into<Option<&'a T>>) -> bool
    where
        T: 'a,
    {
        let value = value.into();
        let removed = self.inner.with(|items| {
            let position = items.iter().position(|slot| slot.as_ref() == value)?;
            items.remove(position);
            Some(position)
        });
        if let Some(index) = removed {
            trace!(collection = self.inner.label(), index, "remove");
        }
        removed.is_some()
    }
}

impl<T: Clone> ConcurrentList<T> {
    /// Copy of the element at `index`
    pub fn get(&self, index: usize) -> CollectionResult<Option<T>> {
        self.inner
            .with(|items| -> CollectionResult<Option<T>> {
                check_index(index, items.len())?;
                Ok(items[index].clone())
            })
            .map_err(|e| self.inner.rejected("get", e))
    }

    /// All elements in order, copied under the lock
    pub fn to_vec(&self) -> Vec<Option<T>> {
        let items = self.inner.snapshot();
        debug!(collection = self.inner.label(), len = items.len(), "snapshot taken");
        items
    }

    /// Iterate over a snapshot taken at call time
    ///
    /// Later mutation of the list does not affect the returned iterator.
    pub fn iter(&self) -> Snapshot<Option<T>> {
        Snapshot::new(self.to_vec())
    }

    /// Copy all elements into `dest` starting at `index`
    pub fn copy_to(&self, dest: &mut [Option<T>], index: usize) -> CollectionResult<()> {
        let items = self.to_vec();
        check_destination(index, dest.len(), items.len())
            .map_err(|e| self.inner.rejected("copy_to", e))?;
        dest[index..index + items.len()].clone_from_slice(&items);
        Ok(())
    }
}

impl<T> Default for ConcurrentList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shallow copy: fresh lock, structurally independent storage
impl<T: Clone> Clone for ConcurrentList<T> {
    fn clone(&self) -> Self {
        let items = self.inner.snapshot();
        debug!(collection = self.inner.label(), len = items.len(), "cloned");
        Self::from_parts(items, *self.inner.config())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for ConcurrentList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, V: Into<Option<T>>> FromIterator<V> for ConcurrentList<T> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let items = iter.into_iter().map(Into::into).collect();
        Self::from_parts(items, CollectionConfig::default())
    }
}

impl<T, V: Into<Option<T>>> Extend<V> for ConcurrentList<T> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        let values: Vec<Option<T>> = iter.into_iter().map(Into::into).collect();
        self.inner.with(|items| items.extend(values));
    }
}

impl<'a, T: Clone> IntoIterator for &'a ConcurrentList<T> {
    type Item = Option<T>;
    type IntoIter = Snapshot<Option<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for ConcurrentList<T> {
    type Item = Option<T>;
    type IntoIter = Snapshot<Option<T>>;

    fn into_iter(self) -> Self::IntoIter {
        Snapshot::new(self.into_inner())
    }
}

impl<T: Clone + Serialize> Serialize for ConcurrentList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_vec().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ConcurrentList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<Option<T>>::deserialize(deserializer)?;
        Ok(Self::from_parts(items, CollectionConfig::default()))
    }
}

impl<T: Clone + Send> SynchronizedCollection for ConcurrentList<T> {
    type Item = Option<T>;

    fn len(&self) -> usize {
        ConcurrentList::len(self)
    }

    fn snapshot(&self) -> Vec<Option<T>> {
        self.to_vec()
    }

    fn clear(&self) {
        ConcurrentList::clear(self)
    }
}

impl<T: Clone + Send> IndexedCollection for ConcurrentList<T> {
    fn add(&self, item: Option<T>) -> usize {
        ConcurrentList::add(self, item)
    }

    fn insert(&self, index: usize, item: Option<T>) -> CollectionResult<()> {
        ConcurrentList::insert(self, index, item)
    }

    fn get(&self, index: usize) -> CollectionResult<Option<T>> {
        ConcurrentList::get(self, index)
    }

    fn set(&self, index: usize, item: Option<T>) -> CollectionResult<Option<T>> {
        ConcurrentList::set(self, index, item)
    }

    fn remove_at(&self, index: usize) -> CollectionResult<Option<T>> {
        ConcurrentList::remove_at(self, index)
    }
}
