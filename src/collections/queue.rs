/*!
 * Concurrent Queue
 * Lock-guarded first-in-first-out queue
 *
 * Same locking discipline as the list. Unlike the list, the queue never
 * stores an absent item: `enqueue(None)` is rejected.
 */

use super::guarded::Guarded;
use super::snapshot::Snapshot;
use crate::core::errors::check_destination;
use crate::core::{
    CollectionConfig, CollectionError, CollectionResult, FifoCollection, SynchronizedCollection,
};
use parking_lot::MutexGuard;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::VecDeque;
use std::fmt;
use tracing::{debug, trace};

/// Thread-safe FIFO queue guarded by a single lock
///
/// Nothing ever waits for an item: an empty queue is reported immediately.
///
/// # Example
///
/// ```
/// use concurrent_collections::{CollectionError, ConcurrentQueue};
///
/// let queue: ConcurrentQueue<&str> = ConcurrentQueue::new();
/// queue.enqueue("first").unwrap();
/// queue.enqueue("second").unwrap();
///
/// assert_eq!(queue.peek().unwrap(), "first");
/// assert_eq!(queue.dequeue().unwrap(), "first");
/// assert_eq!(queue.try_dequeue(), Some("second"));
/// assert_eq!(queue.dequeue(), Err(CollectionError::EmptyContainer));
/// ```
pub struct ConcurrentQueue<T> {
    inner: Guarded<VecDeque<T>>,
}

impl<T> ConcurrentQueue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::with_config(CollectionConfig::default())
    }

    /// Create an empty queue with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(CollectionConfig::default().with_capacity(capacity))
    }

    pub fn with_config(config: CollectionConfig) -> Self {
        Self::from_parts(VecDeque::with_capacity(config.initial_capacity), config)
    }

    fn from_parts(items: VecDeque<T>, config: CollectionConfig) -> Self {
        Self {
            inner: Guarded::new(items, config),
        }
    }

    pub fn config(&self) -> &CollectionConfig {
        self.inner.config()
    }

    /// Number of queued items
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

    /// Acquire the instance lock directly
    ///
    /// Not reentrant: do not call other methods on this queue while holding
    /// the guard.
    pub fn lock(&self) -> MutexGuard<'_, VecDeque<T>> {
        self.inner.lock()
    }

    /// Consume the queue and return its items, head first
    pub fn into_inner(self) -> VecDeque<T> {
        self.inner.into_inner()
    }

    /// Append `item` to the tail
    ///
    /// Fails with [`CollectionError::InvalidArgument`] when `item` is absent.
    pub fn enqueue(&self, item: impl Into<Option<T>>) -> CollectionResult<()> {
        let Some(item) = item.into() else {
            return Err(self.inner.rejected(
                "enqueue",
                CollectionError::InvalidArgument("item must not be absent".into()),
            ));
        };

        let len = self.inner.with(|items| {
            items.push_back(item);
            items.len()
        });
        trace!(collection = self.inner.label(), len, "enqueue");
        Ok(())
    }

    /// Remove and return the head
    pub fn dequeue(&self) -> CollectionResult<T> {
        let head = self.inner.with(|items| items.pop_front());
        match head {
            Some(item) => {
                trace!(collection = self.inner.label(), "dequeue");
                Ok(item)
            }
            None => Err(self
                .inner
                .rejected("dequeue", CollectionError::EmptyContainer)),
        }
    }

    /// Remove and return the head, or `None` when the queue is empty
    pub fn try_dequeue(&self) -> Option<T> {
        let head = self.inner.with(|items| items.pop_front());
        trace!(
            collection = self.inner.label(),
            found = head.is_some(),
            "try_dequeue"
        );
        head
    }

    /// Remove all items
    pub fn clear(&self) {
        let cleared = self.inner.with(|items| {
            let len = items.len();
            items.clear();
            len
        });
        trace!(collection = self.inner.label(), cleared, "clear");
    }
}

impl<T: PartialEq> ConcurrentQueue<T> {
    /// Whether an item equal to `item` is queued
    ///
    /// An absent query returns `false` without taking the lock.
    pub fn contains<'a>(&self, item: impl Into<Option<&'a T>>) -> bool
    where
        T: 'a,
    {
        match item.into() {
            Some(item) => self.inner.with(|items| items.contains(item)),
            None => false,
        }
    }
}

impl<T: Clone> ConcurrentQueue<T> {
    /// Copy of the head without removing it
    pub fn peek(&self) -> CollectionResult<T> {
        self.inner
            .with(|items| items.front().cloned())
            .ok_or_else(|| self.inner.rejected("peek", CollectionError::EmptyContainer))
    }

    /// All items head first, copied under the lock
    pub fn to_vec(&self) -> Vec<T> {
        let items: Vec<T> = self.inner.with(|items| items.iter().cloned().collect());
        debug!(collection = self.inner.label(), len = items.len(), "snapshot taken");
        items
    }

    /// Iterate head first over a snapshot taken at call time
    pub fn iter(&self) -> Snapshot<T> {
        Snapshot::new(self.to_vec())
    }

    /// Copy all items, head first, into `dest` starting at `index`
    pub fn copy_to(&self, dest: &mut [T], index: usize) -> CollectionResult<()> {
        let items = self.to_vec();
        check_destination(index, dest.len(), items.len())
            .map_err(|e| self.inner.rejected("copy_to", e))?;
        dest[index..index + items.len()].clone_from_slice(&items);
        Ok(())
    }
}

impl<T> Default for ConcurrentQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shallow copy: fresh lock, structurally independent storage
impl<T: Clone> Clone for ConcurrentQueue<T> {
    fn clone(&self) -> Self {
        let items = self.inner.snapshot();
        debug!(collection = self.inner.label(), len = items.len(), "cloned");
        Self::from_parts(items, *self.inner.config())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for ConcurrentQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for ConcurrentQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_parts(iter.into_iter().collect(), CollectionConfig::default())
    }
}

impl<T> Extend<T> for ConcurrentQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let incoming: Vec<T> = iter.into_iter().collect();
        self.inner.with(|items| items.extend(incoming));
    }
}

impl<'a, T: Clone> IntoIterator for &'a ConcurrentQueue<T> {
    type Item = T;
    type IntoIter = Snapshot<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for ConcurrentQueue<T> {
    type Item = T;
    type IntoIter = Snapshot<T>;

    fn into_iter(self) -> Self::IntoIter {
        Snapshot::new(self.into_inner().into())
    }
}

impl<T: Clone + Serialize> Serialize for ConcurrentQueue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_vec().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ConcurrentQueue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = VecDeque::<T>::deserialize(deserializer)?;
        Ok(Self::from_parts(items, CollectionConfig::default()))
    }
}

impl<T: Clone + Send> SynchronizedCollection for ConcurrentQueue<T> {
    type Item = T;

    fn len(&self) -> usize {
        ConcurrentQueue::len(self)
    }

    fn snapshot(&self) -> Vec<T> {
        self.to_vec()
    }

    fn clear(&self) {
        ConcurrentQueue::clear(self)
    }
}

impl<T: Clone + Send> FifoCollection for ConcurrentQueue<T> {
    fn enqueue(&self, item: T) -> CollectionResult<()> {
        ConcurrentQueue::enqueue(self, item)
    }

    fn dequeue(&self) -> CollectionResult<T> {
        ConcurrentQueue::dequeue(self)
    }

    fn try_dequeue(&self) -> Option<T> {
        ConcurrentQueue::try_dequeue(self)
    }

    fn peek(&self) -> CollectionResult<T> {
        ConcurrentQueue::peek(self)
    }
}
