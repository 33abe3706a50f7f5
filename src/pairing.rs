//! Pairing Heap implementation
//!
//! A pairing heap is a self-adjusting multiway tree with:
//! - O(1) insert and get_min
//! - O(log n) amortized delete_min, delete and change_key
//!
//! Every inserted element gets a [`NodeHandle`] that stays valid until the
//! element is removed, so any element can be deleted or re-prioritized
//! without searching for it.
//!
//! Removing an element from the middle of the tree does not throw its
//! children back at the root: they are paired up and the result takes the
//! removed element's place.

use std::cmp::Ordering;

use log::debug;
use slotmap::SlotMap;

use crate::compare::{Comparator, IntegerOrder};
use crate::config::{HeapConfig, TeardownStrategy};
use crate::merge::{merge, merge_roots};
use crate::reduce::reduce;
use crate::storage::{Link, Node, NodeHandle, Nodes};
use crate::traits::{AddressableHeap, Heap, HeapError, InvariantError};

/// Pairing Heap
///
/// `K` is the key the comparator `C` orders by, `D` the data carried along.
///
/// # Example
///
/// ```rust
/// use rust_pairing_heap::pairing::PairingHeap;
///
/// let mut heap = PairingHeap::new();
/// let a = heap.insert(10, "a");
/// heap.insert(20, "b");
/// heap.insert(30, "c");
///
/// heap.change_key(a, 40).unwrap();
/// assert_eq!(heap.get_min(), Some((&20, &"b")));
/// assert_eq!(heap.delete(a), Ok((40, "a")));
/// assert_eq!(heap.len(), 2);
/// ```
pub struct PairingHeap<K, D, C = IntegerOrder> {
    nodes: Nodes<K, D>,
    root: Option<NodeHandle>,
    cmp: C,
    config: HeapConfig,
}

impl<K: Ord, D> PairingHeap<K, D, IntegerOrder> {
    /// Creates an empty heap using the default [`IntegerOrder`] comparator
    pub fn new() -> Self {
        Self::with_comparator(IntegerOrder)
    }
}

impl<K: Ord, D> Default for PairingHeap<K, D, IntegerOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, D, C: Comparator<K>> PairingHeap<K, D, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_config(cmp, HeapConfig::default())
    }

    /// Creates an empty heap ordered by `cmp` with explicit strategies
    pub fn with_config(cmp: C, config: HeapConfig) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root: None,
            cmp,
            config,
        }
    }

    /// The strategies this heap was created with
    pub fn config(&self) -> &HeapConfig {
        &self.config
    }

    /// The comparator this heap orders by
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if `handle` names an element currently in the heap
    pub fn contains(&self, handle: NodeHandle) -> bool {
        self.nodes.contains_key(handle)
    }

    /// Inserts a key/data pair and returns its handle
    ///
    /// # Time Complexity
    /// O(1), one comparison.
    pub fn insert(&mut self, key: K, data: D) -> NodeHandle {
        let node = self.nodes.insert(Node::new(key, data));
        self.root = Some(match self.root {
            Some(root) => merge_roots(&mut self.nodes, &self.cmp, node, root),
            None => node,
        });
        node
    }

    /// Returns the minimum key and its data without removing them
    pub fn get_min(&self) -> Option<(&K, &D)> {
        self.root.map(|root| {
            let node = &self.nodes[root];
            (&node.key, &node.data)
        })
    }

    /// Returns the handle of the current minimum
    pub fn peek_handle(&self) -> Option<NodeHandle> {
        self.root
    }

    /// Like [`get_min`](Self::get_min) but reports an empty heap as an error
    pub fn try_peek(&self) -> Result<(&K, &D), HeapError> {
        self.get_min().ok_or(HeapError::EmptyHeap)
    }

    /// Removes the minimum and returns its key and data
    ///
    /// `None` means the heap was empty; it is never confused with a
    /// legitimate zero or empty key.
    ///
    /// # Time Complexity
    /// O(log n) amortized.
    pub fn delete_min(&mut self) -> Option<(K, D)> {
        let root = self.root?;
        let node = self.nodes.remove(root)?;
        let new_root = node.sub.map(|first| self.reduce(first));
        self.root = new_root;
        Some((node.key, node.data))
    }

    /// Like [`delete_min`](Self::delete_min) but reports an empty heap as an error
    pub fn try_pop(&mut self) -> Result<(K, D), HeapError> {
        self.delete_min().ok_or(HeapError::EmptyHeap)
    }

    /// Removes the element named by `handle`, wherever it is
    ///
    /// # Errors
    /// `EmptyHeap` if the heap is empty, `InvalidHandle` if `handle` does not
    /// name a live element. The heap is unchanged on error.
    pub fn delete(&mut self, handle: NodeHandle) -> Result<(K, D), HeapError> {
        self.check_handle(handle)?;
        if self.root == Some(handle) {
            return self.delete_min().ok_or(HeapError::EmptyHeap);
        }
        self.detach(handle);
        let node = self.nodes.remove(handle).ok_or(HeapError::InvalidHandle)?;
        Ok((node.key, node.data))
    }

    /// Replaces the key of the element named by `handle`
    ///
    /// Handles both directions. An unchanged key (as judged by the
    /// comparator) is stored in place without touching the structure.
    ///
    /// # Errors
    /// `EmptyHeap` or `InvalidHandle` as for [`delete`](Self::delete).
    pub fn change_key(&mut self, handle: NodeHandle, new_key: K) -> Result<(), HeapError> {
        self.check_handle(handle)?;
        let order = self.cmp.compare(&new_key, &self.nodes[handle].key);
        if order == Ordering::Equal {
            self.nodes[handle].key = new_key;
            return Ok(());
        }

        if self.root == Some(handle) {
            self.nodes[handle].key = new_key;
            if order == Ordering::Greater {
                if let Some(first) = self.nodes[handle].sub.take() {
                    let rest = self.reduce(first);
                    self.root = Some(merge_roots(&mut self.nodes, &self.cmp, rest, handle));
                }
            }
            return Ok(());
        }

        self.detach(handle);
        self.nodes[handle].key = new_key;
        self.root = merge(&mut self.nodes, &self.cmp, self.root, Some(handle));
        Ok(())
    }

    /// Lowers the key of the element named by `handle`
    ///
    /// # Errors
    /// `PriorityNotDecreased` if the comparator does not rank `new_key`
    /// strictly before the current key.
    pub fn decrease_key(&mut self, handle: NodeHandle, new_key: K) -> Result<(), HeapError> {
        let current = self.get_key(handle)?;
        if self.cmp.compare(&new_key, current) != Ordering::Less {
            return Err(HeapError::PriorityNotDecreased);
        }
        self.change_key(handle, new_key)
    }

    /// Returns the key of the element named by `handle`
    pub fn get_key(&self, handle: NodeHandle) -> Result<&K, HeapError> {
        self.nodes
            .get(handle)
            .map(|node| &node.key)
            .ok_or(HeapError::InvalidHandle)
    }

    /// Returns the data of the element named by `handle`
    pub fn get_data(&self, handle: NodeHandle) -> Result<&D, HeapError> {
        self.nodes
            .get(handle)
            .map(|node| &node.data)
            .ok_or(HeapError::InvalidHandle)
    }

    /// Returns the data of the element named by `handle` for in-place edits
    pub fn get_data_mut(&mut self, handle: NodeHandle) -> Result<&mut D, HeapError> {
        self.nodes
            .get_mut(handle)
            .map(|node| &mut node.data)
            .ok_or(HeapError::InvalidHandle)
    }

    /// Replaces the data of the element named by `handle`, returning the old data
    pub fn set_data(&mut self, handle: NodeHandle, data: D) -> Result<D, HeapError> {
        self.get_data_mut(handle)
            .map(|slot| std::mem::replace(slot, data))
    }

    /// Removes every element, dropping keys and data
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Iterator popping elements in ascending order until the heap is empty
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, K, D, C> {
        DrainSorted { heap: self }
    }

    /// Tears the heap down, handing every key/data pair to `cleanup`
    ///
    /// `cleanup` runs exactly once per element. The order depends on the
    /// configured [`TeardownStrategy`]: ascending for `PopMin`, tree order
    /// for `DepthFirst`.
    pub fn destroy_with<F: FnMut(K, D)>(mut self, mut cleanup: F) {
        debug!(
            "destroying pairing heap: {} nodes, {:?}",
            self.nodes.len(),
            self.config.teardown
        );
        match self.config.teardown {
            TeardownStrategy::PopMin => {
                while let Some((key, data)) = self.delete_min() {
                    cleanup(key, data);
                }
            }
            TeardownStrategy::DepthFirst => {
                if let Some(root) = self.root.take() {
                    free_subtree(&mut self.nodes, root, &mut cleanup);
                }
            }
        }
        debug_assert!(self.nodes.is_empty());
    }

    /// Verifies the structural invariants of the heap
    ///
    /// Checks that sibling and parent back links agree with the forward
    /// links, that no stored key sorts before the root, and that every
    /// stored node is reachable from the root exactly once.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let Some(root) = self.root else {
            if self.nodes.is_empty() {
                return Ok(());
            }
            return Err(InvariantError::new(format!(
                "heap has no root but stores {} nodes",
                self.nodes.len()
            )));
        };

        let root_node = self
            .nodes
            .get(root)
            .ok_or_else(|| InvariantError::new("root handle is stale"))?;
        if root_node.prev != Link::Root || root_node.next.is_some() {
            return Err(InvariantError::new("root has a sibling or back link"));
        }

        let mut visited = 0usize;
        let mut stack = vec![root];
        while let Some(h) = stack.pop() {
            visited += 1;
            if visited > self.nodes.len() {
                return Err(InvariantError::new("cycle in sibling/child links"));
            }
            let node = &self.nodes[h];
            if self.cmp.compare(&root_node.key, &node.key) == Ordering::Greater {
                return Err(InvariantError::new(format!(
                    "node {:?} sorts before the root",
                    h
                )));
            }
            if let Some(child) = node.sub {
                let child_node = self
                    .nodes
                    .get(child)
                    .ok_or_else(|| InvariantError::new("stale child link"))?;
                if child_node.prev != Link::Parent(h) {
                    return Err(InvariantError::new(format!(
                        "leftmost child {:?} does not point back at parent {:?}",
                        child, h
                    )));
                }
                stack.push(child);
            }
            if let Some(sibling) = node.next {
                let sibling_node = self
                    .nodes
                    .get(sibling)
                    .ok_or_else(|| InvariantError::new("stale sibling link"))?;
                if sibling_node.prev != Link::Sibling(h) {
                    return Err(InvariantError::new(format!(
                        "sibling {:?} does not point back at {:?}",
                        sibling, h
                    )));
                }
                stack.push(sibling);
            }
        }

        if visited != self.nodes.len() {
            return Err(InvariantError::new(format!(
                "{} nodes reachable but {} stored",
                visited,
                self.nodes.len()
            )));
        }
        Ok(())
    }

    fn check_handle(&self, handle: NodeHandle) -> Result<(), HeapError> {
        if self.root.is_none() {
            return Err(HeapError::EmptyHeap);
        }
        if !self.nodes.contains_key(handle) {
            return Err(HeapError::InvalidHandle);
        }
        Ok(())
    }

    fn reduce(&mut self, first: NodeHandle) -> NodeHandle {
        reduce(
            &mut self.nodes,
            &self.cmp,
            self.config.pairing,
            self.config.window,
            first,
        )
    }

    /// Cuts a non-root node out of the tree, leaving it a childless root
    ///
    /// The node's children are paired into one subtree which takes over the
    /// node's slot; without children, the right sibling moves up instead.
    fn detach(&mut self, handle: NodeHandle) {
        let (prev, next, sub) = {
            let node = &self.nodes[handle];
            (node.prev, node.next, node.sub)
        };
        let Some(referent) = prev.node() else {
            debug_assert!(false, "detach called on a root");
            return;
        };

        let replacement = match sub {
            Some(first) => {
                let merged = self.reduce(first);
                let merged_node = &mut self.nodes[merged];
                merged_node.prev = prev;
                merged_node.next = next;
                if let Some(next) = next {
                    self.nodes[next].prev = Link::Sibling(merged);
                }
                Some(merged)
            }
            None => {
                if let Some(next) = next {
                    self.nodes[next].prev = prev;
                }
                next
            }
        };

        let slot = &mut self.nodes[referent];
        if slot.sub == Some(handle) {
            debug_assert_eq!(prev, Link::Parent(referent));
            slot.sub = replacement;
        } else {
            debug_assert_eq!(prev, Link::Sibling(referent));
            slot.next = replacement;
        }

        let node = &mut self.nodes[handle];
        node.sub = None;
        node.make_root();
    }
}

/// Frees a subtree child-first, walking sibling runs iteratively
///
/// Recurses once per tree level. Height can reach `n` (descending inserts
/// build a single chain), so deep heaps should tear down with `PopMin`.
fn free_subtree<K, D, F: FnMut(K, D)>(nodes: &mut Nodes<K, D>, first: NodeHandle, cleanup: &mut F) {
    let mut cursor = Some(first);
    while let Some(h) = cursor {
        let Some(node) = nodes.remove(h) else {
            return;
        };
        if let Some(child) = node.sub {
            free_subtree(nodes, child, cleanup);
        }
        cursor = node.next;
        cleanup(node.key, node.data);
    }
}

/// Draining iterator returned by [`PairingHeap::drain_sorted`]
pub struct DrainSorted<'a, K, D, C> {
    heap: &'a mut PairingHeap<K, D, C>,
}

impl<K, D, C: Comparator<K>> Iterator for DrainSorted<'_, K, D, C> {
    type Item = (K, D);

    fn next(&mut self) -> Option<Self::Item> {
        self.heap.delete_min()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<K, D, C: Comparator<K> + Default> Heap<K, D> for PairingHeap<K, D, C> {
    fn new() -> Self {
        Self::with_comparator(C::default())
    }

    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn push(&mut self, key: K, data: D) {
        self.insert(key, data);
    }

    fn peek(&self) -> Option<(&K, &D)> {
        self.get_min()
    }

    fn pop(&mut self) -> Option<(K, D)> {
        self.delete_min()
    }
}

impl<K, D, C: Comparator<K> + Default> AddressableHeap<K, D> for PairingHeap<K, D, C> {
    type Handle = NodeHandle;

    fn push_with_handle(&mut self, key: K, data: D) -> Self::Handle {
        self.insert(key, data)
    }

    fn delete(&mut self, handle: Self::Handle) -> Result<(K, D), HeapError> {
        PairingHeap::delete(self, handle)
    }

    fn change_key(&mut self, handle: Self::Handle, new_key: K) -> Result<(), HeapError> {
        PairingHeap::change_key(self, handle, new_key)
    }

    fn decrease_key(&mut self, handle: Self::Handle, new_key: K) -> Result<(), HeapError> {
        PairingHeap::decrease_key(self, handle, new_key)
    }

    fn get_key(&self, handle: Self::Handle) -> Result<&K, HeapError> {
        PairingHeap::get_key(self, handle)
    }

    fn get_data(&self, handle: Self::Handle) -> Result<&D, HeapError> {
        PairingHeap::get_data(self, handle)
    }

    fn set_data(&mut self, handle: Self::Handle, data: D) -> Result<D, HeapError> {
        PairingHeap::set_data(self, handle, data)
    }
}
