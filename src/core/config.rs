/*!
 * Collection Configuration
 *
 * Construction-time settings shared by both guarded collections
 */

/// Default label attached to tracing events
pub const DEFAULT_LABEL: &str = "collection";

/// Per-instance collection configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionConfig {
    /// Capacity reserved up front. Growth past it is unbounded.
    pub initial_capacity: usize,
    /// Name carried on every tracing event emitted by the instance
    pub label: &'static str,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectionConfig {
    /// Empty collection, no reservation
    pub const fn new() -> Self {
        Self {
            initial_capacity: 0,
            label: DEFAULT_LABEL,
        }
    }

    /// Configuration for a handful of elements
    pub const fn small() -> Self {
        Self {
            initial_capacity: 16,
            label: DEFAULT_LABEL,
        }
    }

    /// Configuration for collections expected to hold thousands of elements
    pub const fn large() -> Self {
        Self {
            initial_capacity: 4096,
            label: DEFAULT_LABEL,
        }
    }

    pub const fn with_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub const fn with_label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }
}
