/*!
 * Core Traits
 * Capability sets shared by the guarded collections
 */

use super::errors::CollectionResult;

/// Collection whose every operation is serialized by an internal lock
///
/// Generic code written against this trait never needs external locking.
pub trait SynchronizedCollection: Send + Sync {
    /// Element type as stored and handed out by the collection
    type Item;

    /// Number of elements at the time of the call
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether access is synchronized. Always `true` for guarded collections.
    fn is_synchronized(&self) -> bool {
        true
    }

    /// Point-in-time copy of all elements, taken under the lock
    fn snapshot(&self) -> Vec<Self::Item>;

    /// Remove all elements
    fn clear(&self);
}

/// Indexable, growable sequence
pub trait IndexedCollection: SynchronizedCollection {
    /// Append an element and return the index it now occupies
    fn add(&self, item: Self::Item) -> usize;

    /// Insert at `index`, shifting later elements toward the tail
    fn insert(&self, index: usize, item: Self::Item) -> CollectionResult<()>;

    /// Element at `index`
    fn get(&self, index: usize) -> CollectionResult<Self::Item>;

    /// Replace the element at `index`, returning the previous one
    fn set(&self, index: usize, item: Self::Item) -> CollectionResult<Self::Item>;

    /// Remove the element at `index`, shifting later elements toward the head
    fn remove_at(&self, index: usize) -> CollectionResult<Self::Item>;
}

/// First-in-first-out queue
pub trait FifoCollection: SynchronizedCollection {
    /// Append to the tail
    fn enqueue(&self, item: Self::Item) -> CollectionResult<()>;

    /// Remove and return the head
    fn dequeue(&self) -> CollectionResult<Self::Item>;

    /// Remove and return the head, or `None` when empty
    fn try_dequeue(&self) -> Option<Self::Item>;

    /// Head without removing it
    fn peek(&self) -> CollectionResult<Self::Item>;
}
