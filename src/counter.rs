//! A binary counter: reduces a long sequence with an associative operation
//! by only ever combining partial results of equal weight, the way binary
//! addition ripples carries.
//!
//! Slot `k` holds the combination of `2^k` consecutive inputs (or nothing).
//! Adding an input either parks it in slot 0 or carries upward, combining
//! with older partial results as it goes. This keeps reduction trees
//! balanced, which matters for order-sensitive operations: a stable merge of
//! runs, a first-minimum tournament.

use alloc::vec::Vec;

/// See the module docs.
pub struct BinaryCounter<T, Op> {
    slots: Vec<Option<T>>,
    op: Op,
}

impl<T, Op: FnMut(T, T) -> T> BinaryCounter<T, Op> {
    /// `op` must be associative. It is always invoked as `op(older, newer)`,
    /// where `older` entered the counter before every input folded into
    /// `newer` — left-biased operations therefore see inputs in arrival
    /// order.
    pub fn new(op: Op) -> Self {
        BinaryCounter {
            slots: Vec::new(),
            op,
        }
    }

    /// Adds one input, rippling the carry into the first free slot.
    pub fn add(&mut self, x: T) {
        let mut carry = x;

        for slot in &mut self.slots {
            match slot.take() {
                None => {
                    *slot = Some(carry);
                    return;
                }
                Some(older) => carry = (self.op)(older, carry),
            }
        }

        self.slots.push(Some(carry));
    }

    /// Folds the surviving slots, least significant first, into the final
    /// result. `None` if nothing was added.
    pub fn reduce(self) -> Option<T> {
        let BinaryCounter { slots, mut op } = self;

        let mut acc: Option<T> = None;
        for slot in slots {
            if let Some(older) = slot {
                acc = Some(match acc {
                    None => older,
                    Some(newer) => op(older, newer),
                });
            }
        }

        acc
    }
}

#[cfg(test)]
mod tests {
    use super::BinaryCounter;
    use crate::test_utils::{cmp_key, merge_naive, Tagged};
    use proptest::prelude::*;

    /// `op(older, newer)` with concatenation must reproduce arrival order.
    #[test]
    fn preserves_arrival_order() {
        let mut counter = BinaryCounter::new(|mut a: Vec<u32>, b: Vec<u32>| {
            a.extend(b);
            a
        });

        for x in 0..100 {
            counter.add(vec![x]);
        }

        let out = counter.reduce().unwrap();
        assert_eq!(out, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn empty_counter_reduces_to_none() {
        let counter = BinaryCounter::new(|a: u32, _: u32| a);
        assert_eq!(counter.reduce(), None);
    }

    proptest! {
        #[test]
        fn counts(n in 0usize..500) {
            let mut counter = BinaryCounter::new(|a: usize, b: usize| a + b);
            for _ in 0..n {
                counter.add(1);
            }
            prop_assert_eq!(counter.reduce().unwrap_or(0), n);
        }

        /// A bottom-up merge sort: singleton runs in, stable merges on every
        /// carry, one sorted run out.
        #[test]
        fn merge_sort_by_counter(input in proptest::collection::vec(0u8..10, 0..300)) {
            let input = Tagged::tag_vec(input);

            let mut expected = input.clone();
            expected.sort_unstable(); // tag participates in `Ord`

            let mut counter = BinaryCounter::new(|a: Vec<Tagged<u8>>, b: Vec<Tagged<u8>>| {
                merge_naive(&a, &b, &mut cmp_key)
            });
            for x in &input {
                counter.add(vec![*x]);
            }

            prop_assert_eq!(counter.reduce().unwrap_or_default(), expected);
        }
    }
}
