//! Common traits and error types for the heap
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`Heap`]: Base trait for a min-ordered queue of key/data pairs
//! - [`AddressableHeap`]: Extended trait adding handle-based delete and key changes
//!
//! The base [`Heap`] trait follows the shape of Rust's standard heap API
//! (`push`/`peek`/`pop`), while [`AddressableHeap`] adds the operations that
//! schedulers and shortest-path algorithms need to re-prioritize or withdraw
//! elements that are already queued.

use std::fmt;
use std::hash::Hash;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap holds no elements
    EmptyHeap,
    /// The handle does not refer to a live element of this heap
    InvalidHandle,
    /// The new key does not sort before the current key
    PriorityNotDecreased,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyHeap => write!(f, "heap is empty"),
            HeapError::InvalidHandle => {
                write!(f, "handle is no longer valid (element was removed)")
            }
            HeapError::PriorityNotDecreased => {
                write!(f, "new key is not less than current key")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Error returned by `check_invariants` when the heap structure is corrupt.
///
/// Carries a human-readable description of the broken invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

/// A handle to an element in the heap
///
/// This is an opaque, stable identifier for one inserted element. It stays
/// valid while the element moves around inside the heap, and becomes invalid
/// once the element is deleted.
pub trait Handle: Copy + Eq + Hash + fmt::Debug {}

/// Base trait for heap/priority queue data structures
///
/// Elements are (key, data) pairs; the key decides the order and the data
/// rides along. The smallest key is at the top.
///
/// # Example
///
/// ```rust
/// use rust_pairing_heap::Heap;
/// use rust_pairing_heap::pairing::PairingHeap;
///
/// let mut heap: PairingHeap<i32, &str> = Heap::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(2, "two");
///
/// assert_eq!(heap.peek(), Some((&1, &"one")));
/// assert_eq!(heap.pop(), Some((1, "one")));
/// ```
pub trait Heap<K, D> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given key
    ///
    /// # Time Complexity
    /// O(1), one comparison.
    fn push(&mut self, key: K, data: D);

    /// Returns the minimum key and associated data without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<(&K, &D)>;

    /// Removes and returns the minimum key and associated data
    ///
    /// # Time Complexity
    /// O(log n) amortized.
    fn pop(&mut self) -> Option<(K, D)>;
}

/// Extended heap trait with handle-based access
///
/// - `push_with_handle` returns a handle naming the inserted element
/// - `delete` removes that element wherever it currently sits
/// - `change_key` moves it up or down
///
/// # Example
///
/// ```rust
/// use rust_pairing_heap::{AddressableHeap, Heap};
/// use rust_pairing_heap::pairing::PairingHeap;
///
/// let mut heap: PairingHeap<i32, &str> = Heap::new();
/// let handle = heap.push_with_handle(10, "item");
/// heap.push(7, "other");
/// heap.change_key(handle, 5).unwrap();
/// assert_eq!(heap.peek(), Some((&5, &"item")));
/// ```
pub trait AddressableHeap<K, D>: Heap<K, D> {
    /// The handle type for this heap
    type Handle: Handle;

    /// Inserts an element, returning a handle to it
    fn push_with_handle(&mut self, key: K, data: D) -> Self::Handle;

    /// Removes the element named by `handle` and returns its key and data
    ///
    /// # Errors
    /// `EmptyHeap` if the heap is empty, `InvalidHandle` if the element was
    /// already removed.
    fn delete(&mut self, handle: Self::Handle) -> Result<(K, D), HeapError>;

    /// Replaces the key of the element named by `handle`
    ///
    /// Works in both directions: the element may move towards or away from
    /// the top.
    fn change_key(&mut self, handle: Self::Handle, new_key: K) -> Result<(), HeapError>;

    /// Lowers the key of the element named by `handle`
    ///
    /// # Errors
    /// Returns `HeapError::PriorityNotDecreased` if the new key does not sort
    /// strictly before the current key.
    fn decrease_key(&mut self, handle: Self::Handle, new_key: K) -> Result<(), HeapError>;

    /// Returns the key of the element named by `handle`
    fn get_key(&self, handle: Self::Handle) -> Result<&K, HeapError>;

    /// Returns the data of the element named by `handle`
    fn get_data(&self, handle: Self::Handle) -> Result<&D, HeapError>;

    /// Replaces the data of the element named by `handle`, returning the old data
    fn set_data(&mut self, handle: Self::Handle, data: D) -> Result<D, HeapError>;
}
