//! Two-pass pairing reduction
//!
//! Folds a sibling chain into a single tree: merge adjacent pairs left to
//! right, then merge the pair winners right to left. At most `n - 1`
//! comparisons for a chain of `n` roots. This is what gives the pairing
//! heap its O(log n) amortized delete-min.
//!
//! Two strategies produce the same heap contract:
//!
//! - [`PairingStrategy::Recursive`]: the textbook recursion, one stack frame
//!   per pair
//! - [`PairingStrategy::Windowed`]: processes the chain in windows of a
//!   bounded number of pairs using a fixed buffer, splicing each window's
//!   result back onto the front of the unprocessed chain

use log::trace;
use smallvec::SmallVec;

use crate::compare::Comparator;
use crate::config::{PairingStrategy, DEFAULT_PAIRING_WINDOW};
use crate::merge::merge_roots;
use crate::storage::{Link, NodeHandle, Nodes};

/// Reduces the chain starting at `head` to one root-type subtree
///
/// `head` may still carry a back link to a former parent; it is ignored.
pub(crate) fn reduce<K, D, C: Comparator<K>>(
    nodes: &mut Nodes<K, D>,
    cmp: &C,
    strategy: PairingStrategy,
    window: usize,
    head: NodeHandle,
) -> NodeHandle {
    match strategy {
        PairingStrategy::Recursive => reduce_recursive(nodes, cmp, head),
        PairingStrategy::Windowed => reduce_windowed(nodes, cmp, window, head),
    }
}

fn reduce_recursive<K, D, C: Comparator<K>>(
    nodes: &mut Nodes<K, D>,
    cmp: &C,
    head: NodeHandle,
) -> NodeHandle {
    let Some(second) = nodes[head].next else {
        nodes[head].make_root();
        return head;
    };
    // Read before merging; the merge rewrites `second.next`
    let rest = nodes[second].next;
    let pair = merge_roots(nodes, cmp, head, second);
    match rest {
        Some(rest) => {
            let tail = reduce_recursive(nodes, cmp, rest);
            merge_roots(nodes, cmp, pair, tail)
        }
        None => pair,
    }
}

fn reduce_windowed<K, D, C: Comparator<K>>(
    nodes: &mut Nodes<K, D>,
    cmp: &C,
    window: usize,
    head: NodeHandle,
) -> NodeHandle {
    let window = window.max(2);
    let mut winners: SmallVec<[NodeHandle; DEFAULT_PAIRING_WINDOW]> = SmallVec::new();
    let mut head = head;
    nodes[head].prev = Link::Root;

    while nodes[head].next.is_some() {
        // Left to right: pair up to `window` adjacent roots
        let mut cursor = Some(head);
        while let Some(first) = cursor {
            if winners.len() == window {
                break;
            }
            match nodes[first].next {
                Some(second) => {
                    cursor = nodes[second].next;
                    winners.push(merge_roots(nodes, cmp, first, second));
                }
                None => {
                    cursor = None;
                    nodes[first].make_root();
                    winners.push(first);
                }
            }
        }

        // Right to left: collapse the window's winners into one tree
        let mut acc = match winners.pop() {
            Some(last) => last,
            None => break,
        };
        while let Some(left) = winners.pop() {
            acc = merge_roots(nodes, cmp, left, acc);
        }

        // Splice onto the front of whatever is left and go again
        match cursor {
            Some(rest) => {
                trace!("pairing window of {} pairs full, splicing remainder", window);
                nodes[acc].next = Some(rest);
                nodes[rest].prev = Link::Sibling(acc);
            }
            None => nodes[acc].next = None,
        }
        head = acc;
    }

    nodes[head].make_root();
    head
}
