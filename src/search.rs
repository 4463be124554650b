//! Positional search primitives over sorted (or partitioned) slices.

use contracts::*;
use std::cmp::Ordering;

/// Returns the smallest index for which `is_before(&s[i])` returns `false`,
/// or `s.len()` if no such index exists.
///
/// `s` must be partitioned such that, for some integer `N`, `is_before`
/// returns `true` for the first `N` elements, then `false` for the remaining
/// ones (e.g. `[TTTT TFFF FFFF]`).
#[debug_ensures(ret <= s.len())]
pub fn binary_search<T>(s: &[T], mut is_before: impl FnMut(&T) -> bool) -> usize {
    let mut lo = 0;
    let mut hi = s.len();

    while lo < hi {
        // Compute `lo + hi` / 2 without overflow.
        let mid = lo + (hi - lo) / 2;

        // `mid < hi <= s.len()`, so the bounds check can never fail.
        if is_before(&s[mid]) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    lo
}

/// Returns the first position in sorted `s` at which `a` could be inserted
/// without breaking the ordering: the index of the first element that is
/// *not less than* `a`.
#[debug_ensures(ret <= s.len())]
pub fn lower_bound<T>(s: &[T], a: &T, cmp: &mut impl FnMut(&T, &T) -> Ordering) -> usize {
    binary_search(s, |x| cmp(x, a).is_lt())
}

/// Returns the last position in sorted `s` at which `a` could be inserted
/// without breaking the ordering: the index of the first element that is
/// *strictly greater than* `a`.
#[debug_ensures(ret <= s.len())]
pub fn upper_bound<T>(s: &[T], a: &T, cmp: &mut impl FnMut(&T, &T) -> Ordering) -> usize {
    binary_search(s, |x| !cmp(a, x).is_lt())
}

/// Sequential-scan equivalent of [`binary_search`]. Works on unpartitioned
/// input; mostly useful as a test oracle.
#[debug_ensures(ret <= s.len())]
pub fn linear_search<T>(s: &[T], mut is_before: impl FnMut(&T) -> bool) -> usize {
    s.iter().position(|el| !is_before(el)).unwrap_or(s.len())
}

/// Returns `true` if `s` is non-decreasing under `cmp`.
pub fn is_sorted_by<T>(s: &[T], cmp: &mut impl FnMut(&T, &T) -> Ordering) -> bool {
    s.windows(2).all(|pair| cmp(&pair[0], &pair[1]).is_le())
}
