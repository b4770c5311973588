/*!
 * Shared test fixtures
 */

#![allow(dead_code)]

use std::fmt;
use uuid::Uuid;

/// Item compared by a random id, so two mocks are equal only to their clones
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MockItem {
    pub id: Uuid,
}

impl MockItem {
    pub fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }
}

impl Default for MockItem {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MockItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MockItem: {}", self.id)
    }
}
