//! The merge-sort drivers built on top of the merge engine.

use crate::merge_buf::merge_adaptive_by;
use crate::merge_no_buf::merge_inplace_by;
use crate::quadratic_sort;
use alloc::vec::Vec;
use static_assertions::const_assert;
use std::cmp::Ordering;
use std::mem::MaybeUninit;

/// Ranges shorter than this are handed to the insertion sort instead of
/// being halved further by [`sort_adaptive_by`].
pub const INSERTION_SORT_CUTOFF: usize = 16;

/// [`sort_by`] sizes its scratch buffer at `len / ADAPTIVE_BUFFER_DIVISOR`.
///
/// An inherited tuning constant, not a law. A bigger buffer resolves more
/// merges in one linear pass; capacity never changes the result, only the
/// speed. Callers that want a different trade-off pass their own buffer to
/// [`sort_adaptive_by`].
pub const ADAPTIVE_BUFFER_DIVISOR: usize = 8;

const_assert!(INSERTION_SORT_CUTOFF.is_power_of_two());
const_assert!(ADAPTIVE_BUFFER_DIVISOR > 0);

/// Sorts `s` stably, allocating a scratch buffer of
/// `s.len() / ADAPTIVE_BUFFER_DIVISOR` elements.
pub fn sort<T: Ord>(s: &mut [T]) {
    sort_by(s, Ord::cmp)
}

/// [`sort`] with a caller-supplied comparator.
pub fn sort_by<T>(s: &mut [T], mut cmp: impl FnMut(&T, &T) -> Ordering) {
    let mut buf: Vec<T> = Vec::with_capacity(s.len() / ADAPTIVE_BUFFER_DIVISOR);
    sort_adaptive_by(s, &mut cmp, buf.spare_capacity_mut());
}

/// Stable divide-and-conquer merge sort over a caller-owned scratch buffer.
///
/// Halves the range, recurses, and merges with
/// [`merge_adaptive_by`](crate::merge_adaptive_by), threading `buf` down
/// unchanged; ranges shorter than [`INSERTION_SORT_CUTOFF`] go straight to
/// [`quadratic_sort::insertion_sort`]. An empty buffer is valid and yields
/// the fully in-place algorithm.
pub fn sort_adaptive_by<T>(
    s: &mut [T],
    cmp: &mut impl FnMut(&T, &T) -> Ordering,
    buf: &mut [MaybeUninit<T>],
) {
    if s.len() < INSERTION_SORT_CUTOFF {
        quadratic_sort::insertion_sort(s, &mut |a, b| cmp(a, b).is_lt());
        return;
    }

    let mid = s.len() >> 1;

    let (l, r) = s.split_at_mut(mid);
    sort_adaptive_by(l, cmp, buf);
    sort_adaptive_by(r, cmp, buf);

    merge_adaptive_by(s, mid, cmp, buf);
}

/// Sorts `s` stably using no memory beyond the stack.
pub fn sort_inplace<T: Ord>(s: &mut [T]) {
    sort_inplace_by(s, Ord::cmp)
}

/// [`sort_inplace`] with a caller-supplied comparator.
///
/// Worst case `O(n log^2 n)` comparisons and moves, the price of the
/// zero-memory merge.
pub fn sort_inplace_by<T>(s: &mut [T], mut cmp: impl FnMut(&T, &T) -> Ordering) {
    sort_inplace_rec(s, &mut cmp)
}

fn sort_inplace_rec<T>(s: &mut [T], cmp: &mut impl FnMut(&T, &T) -> Ordering) {
    if s.len() <= 1 {
        return;
    }

    let mid = s.len() >> 1;

    let (l, r) = s.split_at_mut(mid);
    sort_inplace_rec(l, cmp);
    sort_inplace_rec(r, cmp);

    merge_inplace_by(s, mid, cmp);
}
