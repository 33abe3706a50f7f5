//! Node storage for the pairing heap
//!
//! Nodes live in a generational arena ([`slotmap::SlotMap`]) and refer to one
//! another by [`NodeHandle`]. The same key type doubles as the user-facing
//! handle: it stays valid while the node is relinked anywhere in the tree,
//! and the generation check turns use of a deleted handle into a clean
//! lookup miss instead of a dangling pointer.
//!
//! # Layout
//!
//! Each node sits in a left-child/right-sibling tree:
//!
//! - `sub`: leftmost child
//! - `next`: right sibling
//! - `prev`: a [`Link`] naming either the parent (for a leftmost child) or
//!   the left sibling, or marking the node as a standalone root
//!
//! No separate parent pointer is kept. A node that needs to be unlinked
//! finds the slot pointing at it by checking whether its `prev` referent's
//! leftmost child is itself.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable handle to one element of a [`PairingHeap`](crate::pairing::PairingHeap)
    ///
    /// Handles are only meaningful for the heap that issued them.
    pub struct NodeHandle;
}

impl crate::traits::Handle for NodeHandle {}

/// The back link of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Link {
    /// Root of a standalone subtree (the heap root, or a tree mid-merge)
    Root,
    /// Leftmost child of this node
    Parent(NodeHandle),
    /// Right sibling of this node
    Sibling(NodeHandle),
}

impl Link {
    /// The referenced node, if any
    #[inline]
    pub(crate) fn node(self) -> Option<NodeHandle> {
        match self {
            Link::Root => None,
            Link::Parent(h) | Link::Sibling(h) => Some(h),
        }
    }
}

pub(crate) struct Node<K, D> {
    pub(crate) key: K,
    pub(crate) data: D,
    pub(crate) next: Option<NodeHandle>,
    pub(crate) sub: Option<NodeHandle>,
    pub(crate) prev: Link,
}

impl<K, D> Node<K, D> {
    /// A fresh singleton root
    #[inline]
    pub(crate) fn new(key: K, data: D) -> Self {
        Self {
            key,
            data,
            next: None,
            sub: None,
            prev: Link::Root,
        }
    }

    /// Clears the sibling links so the node is a valid standalone root.
    /// Children are kept.
    #[inline]
    pub(crate) fn make_root(&mut self) {
        self.next = None;
        self.prev = Link::Root;
    }
}

pub(crate) type Nodes<K, D> = SlotMap<NodeHandle, Node<K, D>>;
