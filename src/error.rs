//! Error type for operations that need an element of an empty list.
//!
//! Every list operation that has to read an element or a continuation
//! (`head`, `tail`, `last`, `init`, `take`, `drop_first`) reports an
//! exhausted list with [`EmptyAccessError`]. It is a contract violation on
//! the caller's side: nothing in this crate retries or suppresses it.

use thiserror::Error;

/// Result alias for fallible list operations.
pub type ListResult<T> = Result<T, EmptyAccessError>;

/// Raised when an operation reaches the end of a list before it is done.
///
/// The error records which operation ran out of elements.
///
/// # Examples
///
/// ```rust
/// use lazylist::{EmptyAccessError, List};
///
/// let empty: List<i32> = List::new();
/// let error = empty.head().unwrap_err();
/// assert_eq!(error, EmptyAccessError::new("head"));
/// assert_eq!(error.to_string(), "head: cannot access an empty list");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{operation}: cannot access an empty list")]
pub struct EmptyAccessError {
    operation: &'static str,
}

impl EmptyAccessError {
    /// Creates an error for the named operation.
    ///
    /// # Arguments
    ///
    /// * `operation` - Name of the list operation that reached the end
    #[must_use]
    pub fn new(operation: &'static str) -> Self {
        tracing::trace!(operation, "empty list access");
        Self { operation }
    }

    /// Returns the name of the operation that failed.
    #[inline]
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        self.operation
    }
}
