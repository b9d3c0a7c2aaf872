//! Capacity-bounded binary min-heap
//!
//! This crate provides [`BoundedMinHeap`], an array-backed binary
//! min-heap whose capacity is fixed at construction. In addition to the
//! usual push/pop/peek operations it supports position-based
//! `decrease_key` and arbitrary-position `remove`, with a result-based
//! error model: a full heap rejects pushes with
//! [`HeapError::Overflow`] rather than growing, and the index-based
//! operations reject stale positions with
//! [`HeapError::IndexOutOfRange`].
//!
//! # Example
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use capheap::BoundedMinHeap;
//!
//! let mut heap = BoundedMinHeap::new(NonZeroUsize::new(4).unwrap());
//! heap.push(5).unwrap();
//! heap.push(3).unwrap();
//! heap.decrease_key(0, 1).unwrap();
//! assert_eq!(heap.peek(), Some(1));
//! ```

pub mod bounded;
pub mod error;

// Re-export the main types for convenience
pub use bounded::BoundedMinHeap;
pub use error::HeapError;
