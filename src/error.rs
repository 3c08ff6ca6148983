use thiserror::Error;

/// Errors for dynamic array operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DynArrayError {
    /// Removal from an array with no elements
    #[error("Cannot remove from an empty array")]
    Empty,

    /// Positional insertion past the valid range `[0, len]`
    #[error("Index {0} out of range")]
    IndexOutOfRange(usize),

    /// The growth routine could not obtain a larger buffer.
    /// The array is left in its pre-operation state.
    #[error("Failed to allocate a buffer of {0} slots")]
    AllocationFailed(usize),
}
