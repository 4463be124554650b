//! The merge subproblem splitter: reduces one merge of two adjacent sorted
//! ranges to two smaller, independent merges plus one element in final
//! position.

use crate::search::{lower_bound, upper_bound};
use contracts::*;
use std::cmp::Ordering;

/// A sequence (`S`) divided in two at index `at`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Split<S> {
    pub seq: S,
    pub at: usize,
}

impl<S> Split<S> {
    pub fn new(seq: S, at: usize) -> Self {
        Split { seq, at }
    }

    #[cfg(test)]
    pub fn split<T>(&self) -> (&[T], &[T])
    where
        S: AsRef<[T]>,
    {
        self.seq.as_ref().split_at(self.at)
    }

    #[cfg(test)]
    pub fn is_each_side_sorted_by<T>(&self, cmp: &mut impl FnMut(&T, &T) -> Ordering) -> bool
    where
        S: AsRef<[T]>,
    {
        use crate::search::is_sorted_by;

        let (l, r) = self.seq.as_ref().split_at(self.at);
        is_sorted_by(l, cmp) && is_sorted_by(r, cmp)
    }

    #[cfg(test)]
    pub fn as_mut<T>(&mut self) -> Split<&mut T>
    where
        T: ?Sized,
        S: AsMut<T>,
    {
        Split {
            seq: self.seq.as_mut(),
            at: self.at,
        }
    }

    #[cfg(test)]
    pub fn map_seq<R>(self, f: impl FnOnce(S) -> R) -> Split<R> {
        Split {
            seq: f(self.seq),
            at: self.at,
        }
    }
}

/// The outcome of [`split_for_merge`], describing the two derived merge
/// subproblems in terms of the rearranged sequence.
///
/// ```text
/// [--lo pair--] p [--hi pair--]
///       ^       ^       ^
///  split at   final  split at
///  `lo_mid`  position `hi_mid` (relative to `pivot + 1`)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Subproblems {
    /// Split point of the subrange left of `pivot`.
    pub lo_mid: usize,
    /// Index of the element the splitter moved to its final, merged position.
    pub pivot: usize,
    /// Split point of the subrange right of `pivot`, relative to `pivot + 1`.
    pub hi_mid: usize,
}

/// Splits the merge of two adjacent sorted ranges (`pair.seq[..pair.at]` and
/// `pair.seq[pair.at..]`) into two independent merges: bisects the smaller
/// range at its midpoint, binary-searches the midpoint element's rank in the
/// larger range, and rotates the interior blocks so that element lands where
/// the full merge would put it.
///
/// Merging each returned pair (and leaving the pivot alone) yields exactly
/// the stable merge of the two inputs. Every tie is broken the same way the
/// full merge breaks it: when the left range is bisected, the pivot is
/// ranked by *lower* bound so that equal right-range elements stay behind
/// it; when the right range is bisected, by *upper* bound so that equal
/// left-range elements stay ahead of it.
#[debug_requires(pair.at > 0 && pair.at < pair.seq.len(), "both ranges must be non-empty")]
#[test_requires(pair.is_each_side_sorted_by(cmp))]
#[debug_ensures(ret.lo_mid <= ret.pivot)]
pub(crate) fn split_for_merge<T>(
    pair: Split<&mut [T]>,
    cmp: &mut impl FnMut(&T, &T) -> Ordering,
) -> Subproblems {
    let Split { seq: s, at: mid } = pair;

    if mid < s.len() - mid {
        left_subproblem(s, mid, cmp)
    } else {
        right_subproblem(s, mid, cmp)
    }
}

/// The left range is smaller: pivot on its midpoint element.
///
/// ```text
/// [aaaa Pbbb][cccc dddd]      P = pivot, cccc = right elements < P
/// [aaaa cccc]P[bbb dddd]      after the rotation
/// ```
fn left_subproblem<T>(
    s: &mut [T],
    mid: usize,
    cmp: &mut impl FnMut(&T, &T) -> Ordering,
) -> Subproblems {
    let lo_mid = mid >> 1;

    let bound = {
        let (lo, hi) = s.split_at(mid);
        mid + lower_bound(hi, &lo[lo_mid], cmp)
    };

    // Move the tail of the left range (pivot first) past every right-range
    // element that merges ahead of the pivot.
    s[lo_mid..bound].rotate_left(mid - lo_mid);
    let pivot = lo_mid + (bound - mid);

    Subproblems {
        lo_mid,
        pivot,
        hi_mid: mid - lo_mid - 1,
    }
}

/// The right range is smaller (or the same size): pivot on its midpoint
/// element.
///
/// ```text
/// [aaaa bbbb][cccP dddd]      P = pivot, bbbb = left elements > P
/// [aaaa ccc]P[bbbb dddd]      after the rotation
/// ```
fn right_subproblem<T>(
    s: &mut [T],
    mid: usize,
    cmp: &mut impl FnMut(&T, &T) -> Ordering,
) -> Subproblems {
    let hi_half = (s.len() - mid) >> 1;
    let pivot_at = mid + hi_half;

    let bound = {
        let (lo, hi) = s.split_at(mid);
        upper_bound(lo, &hi[hi_half], cmp)
    };

    // Move the head of the right range (pivot last) in front of every
    // left-range element that merges behind the pivot.
    s[bound..pivot_at + 1].rotate_left(mid - bound);

    Subproblems {
        lo_mid: bound,
        pivot: bound + hi_half,
        hi_mid: mid - bound,
    }
}
