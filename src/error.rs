//! Error type for heap operations

use std::fmt;

/// Error type for fallible heap operations
///
/// Every failure is surfaced immediately to the caller and leaves the
/// heap unchanged; no operation retries internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap is at capacity and cannot accept another key
    Overflow,
    /// The index does not refer to a live element
    IndexOutOfRange,
    /// The new key is greater than the current key at the index
    KeyNotDecreased,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Overflow => {
                write!(f, "heap is at capacity, key not inserted")
            }
            HeapError::IndexOutOfRange => {
                write!(f, "index does not refer to a live element")
            }
            HeapError::KeyNotDecreased => {
                write!(f, "new key is greater than the current key")
            }
        }
    }
}

impl std::error::Error for HeapError {}
