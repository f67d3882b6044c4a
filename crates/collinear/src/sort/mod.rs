//! Top-down merge sort with a hook on every merge.
//!
//! Purpose
//! - Sort a slice by an arbitrary comparator (stable).
//! - Let the caller act on the freshly merged buffer of each merge through a
//!   `MergeFinalizer`. The default (`CopyBack`) writes the merged run back
//!   into the slice; a caller may instead consume the final merge in place,
//!   saving the copy-back plus a separate linear pass over the result.
//!
//! Contract
//! - The finalizer is invoked exactly once per merge with
//!   `(dst, merged, is_final)`: `dst` is the slice range being sorted,
//!   `merged` holds its sorted contents, and `is_final` is true only for the
//!   merge that produces the fully sorted input.
//! - Inputs shorter than two elements need no merge; the finalizer then gets
//!   a single `is_final` call with a copy of the input so the final hook
//!   always runs once.
//! - If the final call does not copy back, the slice is left in a partially
//!   sorted state (its two halves sorted); treat it as scratch.

use std::cmp::Ordering;

/// Hook run on each merge result.
pub trait MergeFinalizer<T: Clone> {
    /// `dst.len() == merged.len()`; default copies the merged run back.
    fn finish(&mut self, dst: &mut [T], merged: &[T], is_final: bool) {
        let _ = is_final;
        dst.clone_from_slice(merged);
    }
}

/// Plain sorting: every merge (final included) copies back.
#[derive(Clone, Copy, Debug, Default)]
pub struct CopyBack;

impl<T: Clone> MergeFinalizer<T> for CopyBack {}

impl<T, F> MergeFinalizer<T> for F
where
    T: Clone,
    F: FnMut(&mut [T], &[T], bool),
{
    fn finish(&mut self, dst: &mut [T], merged: &[T], is_final: bool) {
        self(dst, merged, is_final)
    }
}

/// Stable sort of `items` by `cmp`.
pub fn merge_sort_by<T, F>(items: &mut [T], cmp: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort_with(items, cmp, &mut CopyBack);
}

/// Stable sort of `items` by `cmp`, routing every merge through `finalizer`.
pub fn merge_sort_with<T, F, M>(items: &mut [T], mut cmp: F, finalizer: &mut M)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
    M: MergeFinalizer<T> + ?Sized,
{
    let mut aux = items.to_vec();
    if items.len() < 2 {
        finalizer.finish(items, &aux, true);
        return;
    }
    sort_range(items, &mut aux, &mut cmp, finalizer, true);
}

fn sort_range<T, F, M>(a: &mut [T], aux: &mut [T], cmp: &mut F, fin: &mut M, is_final: bool)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
    M: MergeFinalizer<T> + ?Sized,
{
    let n = a.len();
    if n < 2 {
        return;
    }
    let mid = n / 2;
    {
        let (a_lo, a_hi) = a.split_at_mut(mid);
        let (aux_lo, aux_hi) = aux.split_at_mut(mid);
        sort_range(a_lo, aux_lo, cmp, fin, false);
        sort_range(a_hi, aux_hi, cmp, fin, false);
    }
    merge_into(a, mid, aux, cmp);
    fin.finish(a, aux, is_final);
}

/// Merge sorted `src[..mid]` and `src[mid..]` into `dst`. Ties take the left run.
fn merge_into<T, F>(src: &[T], mid: usize, dst: &mut [T], cmp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let (left, right) = src.split_at(mid);
    let (mut i, mut j) = (0, 0);
    for slot in dst.iter_mut() {
        let take_left = if i == left.len() {
            false
        } else if j == right.len() {
            true
        } else {
            cmp(&right[j], &left[i]) != Ordering::Less
        };
        if take_left {
            slot.clone_from(&left[i]);
            i += 1;
        } else {
            slot.clone_from(&right[j]);
            j += 1;
        }
    }
}
