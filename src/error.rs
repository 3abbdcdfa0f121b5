//! Failures reported by tree operations.
//!
//! Not finding a value is never an error: lookups return `Option`s and removals return `bool`s.
//! A [`TreeError`] means the operation made no sense for the tree's current state or for the
//! arguments it was handed. Nothing is modified when one is returned.

/// Errors triggered by tree operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// The operation needs at least one value in the tree.
    #[error("`{operation}` requires a non-empty tree")]
    Empty {
        /// Name of the operation that was attempted.
        operation: &'static str,
    },
    /// A constructor that expects an explicit comparator was not given one.
    #[error("a comparator must be supplied")]
    MissingComparator,
    /// The destination slice cannot hold the tree's values starting at the requested index.
    #[error("cannot copy {count} values into a slice of length {len} starting at index {index}")]
    OutOfBounds {
        /// Index of the first slot to write.
        index: usize,
        /// Number of values that needed to be copied.
        count: usize,
        /// Length of the destination slice.
        len: usize,
    },
}

/// Shorthand for results whose error is a [`TreeError`].
pub type Result<T, E = TreeError> = std::result::Result<T, E>;
