//! Minimum / maximum / second-minimum finders.

use crate::counter::BinaryCounter;
use crate::list_pool::{List, ListPool};
use std::cmp::Ordering;

/// Index of the first minimal element, or `None` if `s` is empty.
pub fn min_element_by<T>(s: &[T], cmp: &mut impl FnMut(&T, &T) -> Ordering) -> Option<usize> {
    if s.is_empty() {
        return None;
    }

    let mut min = 0;
    for i in 1..s.len() {
        if cmp(&s[i], &s[min]).is_lt() {
            min = i;
        }
    }

    Some(min)
}

/// Indices of the first minimal and last maximal elements in roughly `3n/2`
/// comparisons (elements are first compared pairwise, then each pair's
/// smaller one races the minimum and its larger one races the maximum).
pub fn min_max_element_by<T>(
    s: &[T],
    cmp: &mut impl FnMut(&T, &T) -> Ordering,
) -> Option<(usize, usize)> {
    if s.is_empty() {
        return None;
    }
    if s.len() == 1 {
        return Some((0, 0));
    }

    let (mut min, mut max) = if cmp(&s[1], &s[0]).is_lt() {
        (1, 0)
    } else {
        (0, 1)
    };

    let mut i = 2;
    while i + 1 < s.len() {
        let (lo, hi) = if cmp(&s[i + 1], &s[i]).is_lt() {
            (i + 1, i)
        } else {
            (i, i + 1)
        };

        if cmp(&s[lo], &s[min]).is_lt() {
            min = lo;
        }
        if !cmp(&s[hi], &s[max]).is_lt() {
            max = hi;
        }

        i += 2;
    }

    // Odd length: the straggler races both.
    if i < s.len() {
        if cmp(&s[i], &s[min]).is_lt() {
            min = i;
        } else if !cmp(&s[i], &s[max]).is_lt() {
            max = i;
        }
    }

    Some((min, max))
}

/// Indices of the first minimal element and of a second-minimal element
/// (the smallest of the rest), found in one pass. `None` if `s` has fewer
/// than two elements.
pub fn min2_elements_by<T>(
    s: &[T],
    cmp: &mut impl FnMut(&T, &T) -> Ordering,
) -> Option<(usize, usize)> {
    if s.len() < 2 {
        return None;
    }

    let (mut min, mut min2) = if cmp(&s[1], &s[0]).is_lt() {
        (1, 0)
    } else {
        (0, 1)
    };

    for i in 2..s.len() {
        if cmp(&s[i], &s[min2]).is_lt() {
            if cmp(&s[i], &s[min]).is_lt() {
                min2 = min;
                min = i;
            } else {
                min2 = i;
            }
        }
    }

    Some((min, min2))
}

/// Tournament variant of [`min2_elements_by`]: `n + O(log n)` comparisons
/// instead of up to `2n`.
///
/// Elements meet in a balanced single-elimination bracket (a
/// [`BinaryCounter`]); each survivor drags along the list of entrants it
/// beat directly. The runner-up must have lost to the overall winner, so
/// only the winner's `O(log n)` losers need a final scan. Which index is
/// returned for the runner-up is unspecified when several elements tie for
/// it.
pub fn min2_elements_binary<T>(
    s: &[T],
    cmp: &mut impl FnMut(&T, &T) -> Ordering,
) -> Option<(usize, usize)> {
    if s.len() < 2 {
        return None;
    }

    let mut pool = ListPool::new();

    let mut counter = BinaryCounter::new(|x: (usize, List), y: (usize, List)| {
        // `x` entered first; ties keep it, matching the scan variants.
        let (win, lose) = if cmp(&s[y.0], &s[x.0]).is_lt() { (y, x) } else { (x, y) };

        // Whoever lost to the loser can never be the runner-up.
        pool.free_all(lose.1);
        (win.0, pool.allocate(lose.0, win.1))
    });

    for i in 0..s.len() {
        counter.add((i, List::NIL));
    }

    let (min, losers) = counter.reduce()?;

    let runner_up = pool.min_element_by(losers, &mut |a: &usize, b: &usize| cmp(&s[*a], &s[*b]));
    (!runner_up.is_nil()).then(|| (min, *pool.value(runner_up)))
}
