//! Helpers shared by the per-module tests.

use crate::split::Split;
use proptest::prelude::*;
use std::cmp::Ordering;
use std::fmt;
use std::mem::MaybeUninit;

macro_rules! prop_unwrap {
    ($e:expr) => {
        match $e {
            Err(::proptest::prelude::TestCaseError::Reject(s)) => {
                panic!("Helper function rejected input: {}", s)
            }
            Err(::proptest::prelude::TestCaseError::Fail(s)) => panic!("{}", s),
            Ok(x) => x,
        }
    };
}

/// An element tagged with its original position, so tests can tell equal
/// keys apart and check stability by exact equality.
///
/// The tag participates in the derived `Ord` (after the key), so sorting
/// `Tagged` elements by their *full* order produces exactly the sequence a
/// stable key-only sort must produce.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tagged<T> {
    pub key: T,
    pub tag: u32,
}

impl<T> Tagged<T> {
    pub fn tag_vec(v: Vec<T>) -> Vec<Tagged<T>> {
        v.into_iter()
            .enumerate()
            .map(|(tag, key)| Tagged {
                key,
                tag: tag as u32,
            })
            .collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for Tagged<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}#{}", self.key, self.tag)
    }
}

/// Compares only the key, ignoring the tag.
pub fn cmp_key<T: Ord>(a: &Tagged<T>, b: &Tagged<T>) -> Ordering {
    a.key.cmp(&b.key)
}

/// Reference merge: two pointers, ties taken from the left. This is the
/// behavior every merge in this crate must reproduce exactly.
pub fn merge_naive<T: Clone>(
    l: &[T],
    r: &[T],
    cmp: &mut impl FnMut(&T, &T) -> Ordering,
) -> Vec<T> {
    let mut out = Vec::with_capacity(l.len() + r.len());
    let (mut i, mut j) = (0, 0);

    while i < l.len() && j < r.len() {
        if cmp(&r[j], &l[i]).is_lt() {
            out.push(r[j].clone());
            j += 1;
        } else {
            out.push(l[i].clone());
            i += 1;
        }
    }

    out.extend_from_slice(&l[i..]);
    out.extend_from_slice(&r[j..]);
    out
}

/// A scratch buffer of exactly `cap` uninitialized slots.
pub fn uninit_buf<T>(cap: usize) -> Vec<MaybeUninit<T>> {
    std::iter::repeat_with(MaybeUninit::uninit).take(cap).collect()
}

pub fn split_vec<S>(
    len: impl Into<proptest::collection::SizeRange>,
    values: S,
) -> impl Strategy<Value = Split<Vec<S::Value>>>
where
    S: Strategy,
    S::Value: Clone,
{
    proptest::collection::vec(values, len)
        .prop_flat_map(|v| {
            let len = v.len();
            (Just(v), 0..=len)
        })
        .prop_map(|(seq, at)| Split { seq, at })
}

pub fn split_vec_sorted<S>(
    len: impl Into<proptest::collection::SizeRange>,
    values: S,
) -> impl Strategy<Value = Split<Vec<S::Value>>>
where
    S: Strategy,
    S::Value: Clone + Ord,
{
    split_vec(len, values).prop_map(|mut out| {
        let (a, b) = out.seq.split_at_mut(out.at);
        a.sort_unstable();
        b.sort_unstable();
        out
    })
}

pub fn split_vec_sorted_nonempty<S>(
    len: std::ops::Range<usize>,
    values: S,
) -> impl Strategy<Value = Split<Vec<S::Value>>>
where
    S: Strategy,
    S::Value: Clone + Ord,
{
    assert!(len.start >= 2);

    split_vec_sorted(len, values).prop_map(|mut out| {
        if out.at == 0 {
            out.at += 1;
        } else if out.at == out.seq.len() {
            out.at -= 1;
        }

        out
    })
}
