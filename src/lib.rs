//! Addressable Pairing Heap for Rust
//!
//! This crate provides a meldable min-priority queue (a pairing heap) that
//! hands out a stable handle for every inserted element. With the handle an
//! element can be deleted or re-prioritized in O(log n) amortized time
//! without scanning the heap, which is what event simulators, schedulers and
//! shortest-path searches need and what `std::collections::BinaryHeap` lacks.
//!
//! # Features
//!
//! - **O(1) insert and get_min**, O(log n) amortized delete_min
//! - **Arbitrary delete** by handle, re-homing the removed node's children in place
//! - **Change-key** in both directions with a single operation
//! - **Pluggable ordering** through a [`Comparator`](compare::Comparator) chosen at creation
//! - **Bounded-stack reduction**: the two-pass pairing runs over a fixed-size
//!   window by default, so multi-million-element heaps never recurse deeply
//!
//! # Example
//!
//! ```rust
//! use rust_pairing_heap::pairing::PairingHeap;
//!
//! let mut heap = PairingHeap::new();
//! for key in [5, 3, 8, 1, 9] {
//!     heap.insert(key, ());
//! }
//! assert_eq!(heap.get_min(), Some((&1, &())));
//!
//! let sorted: Vec<i32> = heap.drain_sorted().map(|(k, _)| k).collect();
//! assert_eq!(sorted, vec![1, 3, 5, 8, 9]);
//! assert_eq!(heap.delete_min(), None);
//! ```

pub mod compare;
pub mod config;
mod merge;
pub mod pairing;
mod reduce;
pub mod storage;
pub mod traits;

// Re-export the main types for convenience
pub use pairing::PairingHeap;
pub use storage::NodeHandle;
pub use traits::{AddressableHeap, Heap, HeapError, InvariantError};
