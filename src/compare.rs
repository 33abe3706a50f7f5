//! Comparator policies
//!
//! A heap never looks at its keys directly. Every ordering decision goes
//! through a [`Comparator`] chosen when the heap is created, so keys can be
//! any type at all as long as the comparator knows how to rank them.
//!
//! - [`IntegerOrder`]: the default policy, a fast `>` test for integer-like keys
//! - [`NaturalOrder`]: exact `Ord::cmp`, reports ties as `Equal`
//! - [`ReverseOrder`]: flips another comparator, turning the heap into a max-heap
//!
//! Closures of the form `Fn(&K, &K) -> Ordering` are comparators too.
//!
//! # Example
//!
//! ```rust
//! use rust_pairing_heap::pairing::PairingHeap;
//!
//! // Order strings by length only
//! let by_len = |a: &String, b: &String| a.len().cmp(&b.len());
//! let mut heap = PairingHeap::with_comparator(by_len);
//! heap.insert("ccc".to_string(), 3);
//! heap.insert("a".to_string(), 1);
//! assert_eq!(heap.get_min().map(|(_, d)| *d), Some(1));
//! ```

use std::cmp::Ordering;

/// Three-way comparison of two keys
pub trait Comparator<K> {
    /// Ranks `a` against `b`. `Less` means `a` belongs nearer the top.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

impl<K, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// Default comparator for integer-like keys
///
/// Answers `Greater` when `a > b` and `Less` otherwise: equal keys compare as
/// `Less`. Heap order does not depend on ties, only which of two equal keys
/// ends up structurally on top. The practical effect is that `change_key`
/// with an unchanged key takes the decrease path instead of the equality
/// fast path; use [`NaturalOrder`] if ties must report `Equal`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerOrder;

impl<K: Ord> Comparator<K> for IntegerOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        if a > b {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }
}

/// Comparator delegating to `Ord::cmp`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Reverses the wrapped comparator
///
/// `PairingHeap::with_comparator(ReverseOrder(NaturalOrder))` pops the
/// largest key first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOrder<C>(pub C);

impl<K, C: Comparator<K>> Comparator<K> for ReverseOrder<C> {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self.0.compare(b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_order_ties_are_less() {
        assert_eq!(IntegerOrder.compare(&1u64, &2), Ordering::Less);
        assert_eq!(IntegerOrder.compare(&2u64, &1), Ordering::Greater);
        assert_eq!(IntegerOrder.compare(&7i64, &7), Ordering::Less);
    }

    #[test]
    fn test_natural_order_reports_equal() {
        assert_eq!(NaturalOrder.compare(&7i64, &7), Ordering::Equal);
        assert_eq!(NaturalOrder.compare(&"a", &"b"), Ordering::Less);
    }

    #[test]
    fn test_reverse_order() {
        let rev = ReverseOrder(NaturalOrder);
        assert_eq!(rev.compare(&1, &2), Ordering::Greater);
        assert_eq!(rev.compare(&2, &1), Ordering::Less);
        assert_eq!(rev.compare(&3, &3), Ordering::Equal);
    }

    #[test]
    fn test_closure_comparator() {
        let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
        assert_eq!(by_abs.compare(&-5, &3), Ordering::Greater);
        assert_eq!(by_abs.compare(&-2, &2), Ordering::Equal);
    }
}
