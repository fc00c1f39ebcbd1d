// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Binary search over sorted slices with heterogeneous keys.
//!
//! The slice elements are projected to a key by a selector and the searched
//! key is compared against that projection. The two key types need not be
//! the same, which is what lets a `DenseNfa` search its interval transitions
//! by a bare symbol.

use std::cmp::Ordering;

/// Searches a sorted slice for `key`.
///
/// The slice must be sorted by `key_of` with respect to `compare`. The
/// comparer is called as `compare(key, element_key)`.
///
/// Returns the index at which `key` could be inserted to keep the slice
/// sorted, paired with a flag that is `true` if the element at that index
/// compares equal to `key`. If several elements compare equal to `key` the
/// index is that of one of them, not necessarily the first.
pub fn binary_search<'a, V, S, K, F, C>(
    slice: &'a [V],
    key: &S,
    key_of: F,
    compare: C,
) -> (usize, bool)
where
    S: ?Sized,
    F: FnMut(&'a V) -> K,
    C: FnMut(&S, &K) -> Ordering,
{
    binary_search_in(slice, 0, slice.len(), key, key_of, compare)
}

/// Searches the sub-slice `slice[start..start + len]` for `key`.
///
/// This behaves like `binary_search` but the returned index is relative to
/// the whole slice. An empty sub-slice gives `(start, false)`.
///
/// # Panics
/// `binary_search_in` panics if `start + len` is past the end of `slice`
/// or overflows `usize`.
pub fn binary_search_in<'a, V, S, K, F, C>(
    slice: &'a [V],
    start: usize,
    len: usize,
    key: &S,
    mut key_of: F,
    mut compare: C,
) -> (usize, bool)
where
    S: ?Sized,
    F: FnMut(&'a V) -> K,
    C: FnMut(&S, &K) -> Ordering,
{
    assert!(
        start.checked_add(len).map_or(false, |end| end <= slice.len()),
        "binary_search_in() range is out of bounds"
    );

    if len == 0 {
        return (start, false);
    }

    // Halve the candidate window until a single element is left. The window
    // always starts at an element that is not greater than the key, unless
    // the key sorts before every element.
    let mut from = start;
    let mut size = len;
    while size > 1 {
        let half = size / 2;
        let mid = from + half;
        if compare(key, &key_of(&slice[mid])) != Ordering::Less {
            from = mid;
        }
        size -= half;
    }

    match compare(key, &key_of(&slice[from])) {
        Ordering::Equal => (from, true),
        Ordering::Greater => (from + 1, false),
        Ordering::Less => (from, false),
    }
}
