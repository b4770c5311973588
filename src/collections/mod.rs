/*!
 * Guarded Collections
 *
 * Thread-safe containers for runtimes without richer concurrency
 * primitives.
 *
 * # Locking discipline
 *
 * - One exclusive lock per instance guards all state and all operations
 * - Reads serialize against writes exactly like writes do
 * - Nothing waits for data: emptiness and bad indices are reported at once
 * - Multi-element results are copied under the lock and handed out after
 *   release, so caller-driven iteration never holds the lock
 *
 * # Collections
 *
 * - **ConcurrentList**: indexed sequence, accepts absent values
 * - **ConcurrentQueue**: FIFO queue, rejects absent items
 */

mod guarded;
pub mod list;
pub mod queue;
pub mod snapshot;

pub use list::ConcurrentList;
pub use queue::ConcurrentQueue;
pub use snapshot::Snapshot;
