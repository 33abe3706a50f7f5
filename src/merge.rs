//! Merge primitive
//!
//! [`join`] hangs one root under another without looking at keys; [`merge`]
//! asks the comparator which of two roots wins and joins the loser under it.
//! Everything else in the heap is built from these two.

use std::cmp::Ordering;

use crate::compare::Comparator;
use crate::storage::{Link, NodeHandle, Nodes};

/// Makes `b` the leftmost child of `a` and returns `a`
///
/// Both are treated as subtree roots: `b`'s old sibling links are
/// overwritten and `a` comes out as a standalone root.
#[inline]
pub(crate) fn join<K, D>(nodes: &mut Nodes<K, D>, a: NodeHandle, b: NodeHandle) -> NodeHandle {
    let first_child = nodes[a].sub;
    if let Some(child) = first_child {
        nodes[child].prev = Link::Sibling(b);
    }
    let loser = &mut nodes[b];
    loser.next = first_child;
    loser.prev = Link::Parent(a);

    let winner = &mut nodes[a];
    winner.sub = Some(b);
    winner.make_root();
    a
}

/// Merges two root-type subtrees, returning the new root
///
/// `a` wins only when the comparator ranks it strictly `Less`; otherwise `b`
/// wins. One comparator call.
#[inline]
pub(crate) fn merge_roots<K, D, C: Comparator<K>>(
    nodes: &mut Nodes<K, D>,
    cmp: &C,
    a: NodeHandle,
    b: NodeHandle,
) -> NodeHandle {
    if cmp.compare(&nodes[a].key, &nodes[b].key) == Ordering::Less {
        join(nodes, a, b)
    } else {
        join(nodes, b, a)
    }
}

/// Merges two possibly-absent subtrees
///
/// A lone subtree is returned with its sibling links cleared so it is a
/// valid standalone root.
pub(crate) fn merge<K, D, C: Comparator<K>>(
    nodes: &mut Nodes<K, D>,
    cmp: &C,
    a: Option<NodeHandle>,
    b: Option<NodeHandle>,
) -> Option<NodeHandle> {
    match (a, b) {
        (Some(a), Some(b)) => Some(merge_roots(nodes, cmp, a, b)),
        (Some(only), None) | (None, Some(only)) => {
            nodes[only].make_root();
            Some(only)
        }
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{IntegerOrder, NaturalOrder};
    use crate::storage::Node;
    use slotmap::SlotMap;

    fn singleton(nodes: &mut Nodes<i32, char>, key: i32, data: char) -> NodeHandle {
        nodes.insert(Node::new(key, data))
    }

    #[test]
    fn test_join_links_child() {
        let mut nodes = SlotMap::with_key();
        let a = singleton(&mut nodes, 1, 'a');
        let b = singleton(&mut nodes, 2, 'b');
        let c = singleton(&mut nodes, 3, 'c');

        assert_eq!(join(&mut nodes, a, b), a);
        assert_eq!(join(&mut nodes, a, c), a);

        // c is now leftmost, b its right sibling
        assert_eq!(nodes[a].sub, Some(c));
        assert_eq!(nodes[c].prev, Link::Parent(a));
        assert_eq!(nodes[c].next, Some(b));
        assert_eq!(nodes[b].prev, Link::Sibling(c));
        assert_eq!(nodes[b].next, None);
        assert_eq!(nodes[a].prev, Link::Root);
        assert_eq!(nodes[a].next, None);
    }

    #[test]
    fn test_merge_roots_smaller_wins() {
        let mut nodes = SlotMap::with_key();
        let a = singleton(&mut nodes, 5, 'a');
        let b = singleton(&mut nodes, 3, 'b');
        let root = merge_roots(&mut nodes, &NaturalOrder, a, b);
        assert_eq!(root, b);
        assert_eq!(nodes[b].sub, Some(a));
    }

    #[test]
    fn test_merge_roots_tie_goes_to_b_under_natural_order() {
        let mut nodes = SlotMap::with_key();
        let a = singleton(&mut nodes, 4, 'a');
        let b = singleton(&mut nodes, 4, 'b');
        assert_eq!(merge_roots(&mut nodes, &NaturalOrder, a, b), b);
    }

    #[test]
    fn test_merge_roots_tie_goes_to_a_under_integer_order() {
        let mut nodes = SlotMap::with_key();
        let a = singleton(&mut nodes, 4, 'a');
        let b = singleton(&mut nodes, 4, 'b');
        assert_eq!(merge_roots(&mut nodes, &IntegerOrder, a, b), a);
    }

    #[test]
    fn test_merge_with_absent_side_clears_links() {
        let mut nodes = SlotMap::with_key();
        let a = singleton(&mut nodes, 1, 'a');
        let b = singleton(&mut nodes, 2, 'b');
        nodes[a].next = Some(b);
        nodes[b].prev = Link::Sibling(a);

        assert_eq!(merge(&mut nodes, &IntegerOrder, None, Some(b)), Some(b));
        assert_eq!(nodes[b].prev, Link::Root);

        assert_eq!(merge(&mut nodes, &IntegerOrder, Some(a), None), Some(a));
        assert_eq!(nodes[a].next, None);

        assert_eq!(merge::<i32, char, _>(&mut nodes, &IntegerOrder, None, None), None);
    }
}
