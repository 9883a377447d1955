//! In-place partition-exchange sort (Lomuto quicksort).
//!
//! The pivot is always the last element of the active range; elements strictly
//! less than it are swapped to the left. The sort is **not stable**: equal
//! elements may come out in a different relative order than they went in.
//!
//! Recursion depth is O(n) on already-sorted or reverse-sorted input. Callers
//! get the deepest level reached back so they can report it.

use std::cmp::Ordering;

/// Sort `items` ascending under `cmp`. Returns the deepest recursion level
/// reached (0 for inputs shorter than two elements).
pub fn quicksort_by<T, F>(items: &mut [T], mut cmp: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut max_depth = 0;
    sort_range(items, &mut cmp, 1, &mut max_depth);
    max_depth
}

/// Sort `items` ascending under their natural order.
pub fn quicksort<T: Ord>(items: &mut [T]) -> usize {
    quicksort_by(items, T::cmp)
}

fn sort_range<T, F>(items: &mut [T], cmp: &mut F, depth: usize, max_depth: &mut usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // low >= high
    if items.len() < 2 {
        return;
    }
    *max_depth = (*max_depth).max(depth);

    let pivot = partition(items, cmp);
    let (left, right) = items.split_at_mut(pivot);
    sort_range(left, cmp, depth + 1, max_depth);
    sort_range(&mut right[1..], cmp, depth + 1, max_depth);
}

/// Partition around the last element; returns the pivot's final index.
fn partition<T, F>(items: &mut [T], cmp: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let high = items.len() - 1;
    let mut store = 0;
    for j in 0..high {
        if cmp(&items[j], &items[high]) == Ordering::Less {
            items.swap(store, j);
            store += 1;
        }
    }
    items.swap(store, high);
    store
}
