//! Merge two adjacent sorted ranges **without** auxiliary memory.

use crate::split::{split_for_merge, Split};
use contracts::*;
use std::cmp::Ordering;

/// Stably merges the sorted, adjacent ranges `s[..mid]` and `s[mid..]` in
/// place, using no extra storage.
///
/// # Runtime
///
/// If `M` is the size of the larger range and `N` the size of the smaller
/// one, this costs `O((M + N) log N)` comparisons and element moves — the
/// price paid for zero extra memory over the linear-time buffered merge.
///
/// # Algorithm
///
/// Each step hands the pair to the subproblem splitter, which places one
/// element in its final position and leaves two strictly smaller merge
/// subproblems on either side of it; those are merged recursively. An empty
/// side is already merged.
#[debug_requires(mid <= s.len())]
#[test_requires(Split::new(&*s, mid).is_each_side_sorted_by(cmp))]
pub fn merge_inplace_by<T>(s: &mut [T], mid: usize, cmp: &mut impl FnMut(&T, &T) -> Ordering) {
    if mid == 0 || mid == s.len() {
        return;
    }

    let sub = split_for_merge(Split::new(&mut *s, mid), cmp);

    let (lo, hi) = s.split_at_mut(sub.pivot);
    merge_inplace_by(lo, sub.lo_mid, cmp);
    merge_inplace_by(&mut hi[1..], sub.hi_mid, cmp);
}

/// [`merge_inplace_by`] with the natural order of `T`.
pub fn merge_inplace<T: Ord>(s: &mut [T], mid: usize) {
    merge_inplace_by(s, mid, &mut Ord::cmp)
}
