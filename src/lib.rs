/*!
 * Concurrent Collections Library
 * Lock-guarded list and queue for constrained runtimes
 */

pub mod collections;
pub mod core;
pub mod monitoring;
pub mod stress;

// Re-exports
pub use crate::collections::{ConcurrentList, ConcurrentQueue, Snapshot};
pub use crate::core::{
    CollectionConfig, CollectionError, CollectionResult, FifoCollection, IndexedCollection,
    SynchronizedCollection,
};
pub use crate::monitoring::{init_tracing, try_init_tracing};
pub use crate::stress::{run_list_stress, run_queue_stress, StressConfig, StressReport};
