/*!
 * Guarded State
 *
 * The single-lock wrapper both collections are built on: an inner
 * unsynchronized container plus one exclusive lock, entered through
 * scoped closures so the guard is released on every exit path.
 */

use crate::core::{CollectionConfig, CollectionError};
use parking_lot::{Mutex, MutexGuard};
use tracing::debug;

/// Inner container behind one exclusive lock
pub(crate) struct Guarded<C> {
    state: Mutex<C>,
    config: CollectionConfig,
}

impl<C> Guarded<C> {
    pub(crate) fn new(state: C, config: CollectionConfig) -> Self {
        Self {
            state: Mutex::new(state),
            config,
        }
    }

    #[inline]
    pub(crate) fn config(&self) -> &CollectionConfig {
        &self.config
    }

    #[inline]
    pub(crate) fn label(&self) -> &'static str {
        self.config.label
    }

    /// Run `f` with exclusive access to the inner container
    ///
    /// `f` must not call back into the owning collection; the lock is not
    /// reentrant.
    #[inline]
    pub(crate) fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut C) -> R,
    {
        let mut state = self.state.lock();
        f(&mut state)
    }

    /// Raw guard for callers that synchronize externally
    #[inline]
    pub(crate) fn lock(&self) -> MutexGuard<'_, C> {
        self.state.lock()
    }

    pub(crate) fn into_inner(self) -> C {
        self.state.into_inner()
    }

    /// Log a rejected operation and hand the error back
    pub(crate) fn rejected(
        &self,
        operation: &'static str,
        error: CollectionError,
    ) -> CollectionError {
        debug!(
            collection = self.config.label,
            operation,
            kind = error.kind(),
            error = %error,
            "operation rejected"
        );
        error
    }
}

impl<C: Clone> Guarded<C> {
    /// Structural copy of the inner container, taken under the lock
    pub(crate) fn snapshot(&self) -> C {
        self.with(|state| state.clone())
    }
}
