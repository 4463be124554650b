//! In-place sorting algorithms that take quadratic time.
//!
//! These are the small-range fallbacks: cheap constant factors, no
//! allocation, and (except for [`selection_sort`]) stable.

use crate::search::binary_search;

/// Classic insertion sort. Stable.
pub fn insertion_sort<T>(v: &mut [T], is_less: &mut impl FnMut(&T, &T) -> bool) {
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Insertion sort that finds each insertion point by binary search instead
/// of scanning. Fewer comparisons, same number of moves. Stable.
pub fn insertion_sort_binary<T>(v: &mut [T], is_less: &mut impl FnMut(&T, &T) -> bool) {
    for i in 1..v.len() {
        let pos = {
            let (sorted, rest) = v.split_at(i);
            let el = &rest[0];
            // Upper bound: equal elements keep their original order.
            binary_search(sorted, |x| !is_less(el, x))
        };

        if pos != i {
            v[pos..=i].rotate_right(1);
        }
    }
}

/// Selection sort. Fewest moves of any quadratic sort, but **not** stable.
pub fn selection_sort<T>(v: &mut [T], is_less: &mut impl FnMut(&T, &T) -> bool) {
    for i in 0..v.len() {
        let mut min = i;
        for j in i + 1..v.len() {
            if is_less(&v[j], &v[min]) {
                min = j;
            }
        }
        v.swap(i, min);
    }
}

/// Selection sort that rotates the minimum into place instead of swapping,
/// which preserves the order of everything it passes over. Stable.
pub fn stable_selection_sort<T>(v: &mut [T], is_less: &mut impl FnMut(&T, &T) -> bool) {
    for i in 0..v.len() {
        let mut min = i;
        for j in i + 1..v.len() {
            if is_less(&v[j], &v[min]) {
                min = j;
            }
        }
        v[i..=min].rotate_right(1);
    }
}
