//! Runtime strategy selection
//!
//! The pairing reduction and the teardown each come in two interchangeable
//! forms that trade speed against native stack usage. [`HeapConfig`] picks
//! one of each per heap. All combinations yield the same observable heap
//! behaviour.
//!
//! # Example
//!
//! ```rust
//! use rust_pairing_heap::compare::IntegerOrder;
//! use rust_pairing_heap::config::{HeapConfig, PairingStrategy, TeardownStrategy};
//! use rust_pairing_heap::pairing::PairingHeap;
//!
//! let config = HeapConfig::default()
//!     .with_pairing(PairingStrategy::Recursive)
//!     .with_teardown(TeardownStrategy::DepthFirst);
//! let mut heap: PairingHeap<u32, ()> = PairingHeap::with_config(IntegerOrder, config);
//! heap.insert(4, ());
//! assert_eq!(heap.config().pairing, PairingStrategy::Recursive);
//! ```

/// Number of pair winners buffered per window by [`PairingStrategy::Windowed`]
pub const DEFAULT_PAIRING_WINDOW: usize = 240;

/// How a sibling chain is folded into a single tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingStrategy {
    /// Recursive two-pass pairing. One stack frame per two chain elements,
    /// so very wide roots (millions of children) can exhaust the stack.
    Recursive,
    /// Two-pass pairing over fixed-size windows using a bounded buffer.
    /// Constant native stack usage regardless of chain length.
    Windowed,
}

impl Default for PairingStrategy {
    fn default() -> Self {
        if cfg!(feature = "recursive-pairing") {
            PairingStrategy::Recursive
        } else {
            PairingStrategy::Windowed
        }
    }
}

/// How `destroy_with` releases the remaining nodes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TeardownStrategy {
    /// Walk the tree child-first. Fast, but recursion depth follows tree depth.
    DepthFirst,
    /// Pop the minimum until empty. Constant stack, but re-runs the reduction
    /// for every node and hands pairs to the cleanup in sorted order.
    #[default]
    PopMin,
}

/// Per-heap strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapConfig {
    /// Reduction used after delete-min, delete and change-key
    pub pairing: PairingStrategy,
    /// Strategy used by `destroy_with`
    pub teardown: TeardownStrategy,
    /// Window size for [`PairingStrategy::Windowed`], at least 2
    pub window: usize,
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            pairing: PairingStrategy::default(),
            teardown: TeardownStrategy::default(),
            window: DEFAULT_PAIRING_WINDOW,
        }
    }
}

impl HeapConfig {
    /// Selects the pairing strategy
    pub fn with_pairing(mut self, pairing: PairingStrategy) -> Self {
        self.pairing = pairing;
        self
    }

    /// Selects the teardown strategy
    pub fn with_teardown(mut self, teardown: TeardownStrategy) -> Self {
        self.teardown = teardown;
        self
    }

    /// Sets the windowed reduction's buffer size. Values below 2 are raised to 2.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window.max(2);
        self
    }
}
