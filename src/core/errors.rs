/*!
 * Error Types
 * Collection error taxonomy with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for collection operations
pub type CollectionResult<T> = Result<T, CollectionError>;

/// Errors raised synchronously by guarded collection operations
///
/// No operation leaves a collection partially mutated when it returns one of
/// these; the instance lock is held for the whole call.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum CollectionError {
    #[error("Index {index} is out of range for length {len}")]
    #[diagnostic(
        code(collections::index_out_of_range),
        help("Valid indices are 0..len for access and removal, 0..=len for insertion.")
    )]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Collection is empty")]
    #[diagnostic(
        code(collections::empty_container),
        help("Use try_dequeue to treat an empty queue as a normal outcome.")
    )]
    EmptyContainer,

    #[error("Invalid argument: {0}")]
    #[diagnostic(
        code(collections::invalid_argument),
        help("Queues do not accept absent items. Enqueue a present value.")
    )]
    InvalidArgument(String),

    #[error("Destination too small: {required} slots required, {available} available")]
    #[diagnostic(
        code(collections::destination_too_small),
        help("Provide a larger destination slice or a smaller starting index.")
    )]
    DestinationTooSmall { required: usize, available: usize },
}

impl CollectionError {
    /// Stable snake_case name of the variant, used in log fields
    pub const fn kind(&self) -> &'static str {
        match self {
            CollectionError::IndexOutOfRange { .. } => "index_out_of_range",
            CollectionError::EmptyContainer => "empty_container",
            CollectionError::InvalidArgument(_) => "invalid_argument",
            CollectionError::DestinationTooSmall { .. } => "destination_too_small",
        }
    }
}

/// Check that `index` addresses an existing element
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> CollectionResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(CollectionError::IndexOutOfRange { index, len })
    }
}

/// Check that `index` is a valid insertion point (one past the end allowed)
#[inline]
pub(crate) fn check_insert_index(index: usize, len: usize) -> CollectionResult<()> {
    if index <= len {
        Ok(())
    } else {
        Err(CollectionError::IndexOutOfRange { index, len })
    }
}

/// Check that `required` elements fit into `dest_len` starting at `index`
pub(crate) fn check_destination(
    index: usize,
    dest_len: usize,
    required: usize,
) -> CollectionResult<()> {
    check_insert_index(index, dest_len)?;
    let available = dest_len - index;
    if required > available {
        return Err(CollectionError::DestinationTooSmall {
            required,
            available,
        });
    }
    Ok(())
}
