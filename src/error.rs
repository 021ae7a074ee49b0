//! Errors shared by every container in the crate.
//!
//! Only genuine misuse is an error. Looking for (or deleting) a value that
//! isn't there, or inserting a value a [`BinarySearchTree`][crate::BinarySearchTree]
//! already holds, is an expected outcome and is reported through `None` or
//! `false` instead.

/// Errors triggered by container operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An index or position was outside the range the operation accepts.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange {
        /// The index that was passed in.
        index: usize,
        /// The length (or capacity) of the container at the time of the call.
        len: usize,
    },
    /// The operation needs at least one element and the container has none.
    #[error("collection is empty")]
    EmptyCollection,
}

/// A `Result` whose error is always an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
