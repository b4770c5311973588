/*!
 * Snapshot Iterator
 * One-shot iteration over a point-in-time copy of a collection
 */

use std::iter::FusedIterator;
use std::vec;

/// Owning iterator over elements copied under a collection's lock
///
/// The lock is already released when this value exists, so iterating never
/// blocks other operations and later mutation of the source is not visible.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    inner: vec::IntoIter<T>,
}

impl<T> Snapshot<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        Self {
            inner: items.into_iter(),
        }
    }

    /// Elements not yet yielded
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }
}

impl<T> Iterator for Snapshot<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Snapshot<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Snapshot<T> {}

impl<T> FusedIterator for Snapshot<T> {}
