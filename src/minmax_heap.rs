//! Min-max heap operations over a slice.
//!
//! A min-max heap is a complete binary tree stored by index (node `i` has
//! children `2i + 1` and `2i + 2`) whose levels alternate between min and max
//! levels, starting with a min level at the root:
//!
//! - a node on a min level is less than or equal to every node in its subtree;
//! - a node on a max level is greater than or equal to every node in its subtree.
//!
//! So the minimum is always at index 0 and the maximum at index 1 or 2.
//!
//! Like [`slice::sort`], these functions work on any `&mut [T]` and move
//! elements only by swapping. None of them allocate. Growing or shrinking a
//! heap is done by the caller: push an element onto the end of the slice and
//! call [`push_minmax_heap`], or call [`pop_minmax_heap`] and drop the last
//! element.
//!
//! # Examples
//!
//! ```
//! use order_statistics::minmax_heap::{make_minmax_heap, pop_minmax_heap, push_minmax_heap};
//!
//! let mut heap = vec![17, 16, 31, 30, 10, 13, 12];
//! make_minmax_heap(&mut heap);
//! assert_eq!(heap[0], 10);
//!
//! heap.push(4);
//! push_minmax_heap(&mut heap);
//! assert_eq!(heap[0], 4);
//!
//! pop_minmax_heap(&mut heap);
//! assert_eq!(heap.pop(), Some(4));
//! assert_eq!(heap[0], 10);
//! ```

use crate::raw::{self, Level, first_child};

/// Returns `true` if `v` is a min-max heap under the natural order.
///
/// This compares every node against its whole subtree, taking
/// O(n log n) time. It is meant for validation and tests; the mutating
/// operations never call it.
///
/// # Examples
///
/// ```
/// use order_statistics::minmax_heap::is_minmax_heap;
///
/// assert!(is_minmax_heap(&[8, 71, 41, 31, 10, 11, 16, 46, 51, 31, 21, 13]));
/// assert!(!is_minmax_heap(&[17, 16, 31, 30, 10]));
/// assert!(is_minmax_heap::<i32>(&[]));
/// ```
#[must_use]
pub fn is_minmax_heap<T: Ord>(v: &[T]) -> bool {
    is_minmax_heap_by(v, T::lt)
}

/// Returns `true` if `v` is a min-max heap under `is_less`.
///
/// See [`is_minmax_heap`].
#[must_use]
pub fn is_minmax_heap_by<T, F>(v: &[T], mut is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    (0..v.len()).all(|index| {
        let node = &v[index];
        let mut below = descendants(index, v.len());
        match Level::of(index) {
            Level::Min => below.all(|d| !is_less(&v[d], node)),
            Level::Max => below.all(|d| !is_less(node, &v[d])),
        }
    })
}

/// Every position in the subtree of `index`, one level at a time.
fn descendants(index: usize, len: usize) -> impl Iterator<Item = usize> {
    core::iter::successors(Some((first_child(index), 2usize)), |&(start, width)| {
        Some((start.checked_mul(2)?.checked_add(1)?, width.saturating_mul(2)))
    })
    .take_while(move |&(start, _)| start < len)
    .flat_map(move |(start, width)| start..len.min(start.saturating_add(width)))
}

/// Rearranges `v` into a min-max heap under the natural order.
///
/// # Complexity
///
/// O(n)
///
/// # Examples
///
/// ```
/// use order_statistics::minmax_heap::{is_minmax_heap, make_minmax_heap};
///
/// let mut v = [17, 16, 31, 30, 10, 13, 12, 15, 50, 45];
/// make_minmax_heap(&mut v);
///
/// assert!(is_minmax_heap(&v));
/// assert_eq!(v[0], 10);
/// assert_eq!(v[1].max(v[2]), 50);
/// ```
pub fn make_minmax_heap<T: Ord>(v: &mut [T]) {
    make_minmax_heap_by(v, T::lt);
}

/// Rearranges `v` into a min-max heap under `is_less`.
///
/// With `|a, b| a > b` the result is a max-min heap: the maximum sits at the
/// root and the minimum at index 1 or 2.
///
/// # Complexity
///
/// O(n)
///
/// # Examples
///
/// ```
/// use order_statistics::minmax_heap::make_minmax_heap_by;
///
/// let mut v = [3, 9, 1, 7, 5];
/// make_minmax_heap_by(&mut v, |a, b| a > b);
/// assert_eq!(v[0], 9);
/// ```
pub fn make_minmax_heap_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for index in (0..=v.len() / 2).rev() {
        raw::sift_down(v, index, &mut is_less);
    }
}

/// Sifts the last element of `v` into the min-max heap formed by the rest.
///
/// `v[..v.len() - 1]` must already be a min-max heap; afterwards all of `v`
/// is. Does nothing for an empty slice.
///
/// # Complexity
///
/// O(log n)
///
/// # Examples
///
/// ```
/// use order_statistics::minmax_heap::{is_minmax_heap, push_minmax_heap};
///
/// let mut heap = Vec::new();
/// for value in [17, 16, 31, 30, 10, 13, 12] {
///     heap.push(value);
///     push_minmax_heap(&mut heap);
/// }
///
/// assert!(is_minmax_heap(&heap));
/// assert_eq!(heap[0], 10);
/// ```
pub fn push_minmax_heap<T: Ord>(v: &mut [T]) {
    push_minmax_heap_by(v, T::lt);
}

/// Sifts the last element of `v` into the min-max heap formed by the rest,
/// under `is_less`.
///
/// See [`push_minmax_heap`].
pub fn push_minmax_heap_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if let Some(last) = v.len().checked_sub(1) {
        raw::sift_up(v, last, &mut is_less);
    }
}

/// Moves the minimum of the min-max heap `v` to the last position and makes
/// `v[..v.len() - 1]` a min-max heap again.
///
/// Does nothing for an empty slice.
///
/// # Complexity
///
/// O(log n)
///
/// # Examples
///
/// ```
/// use order_statistics::minmax_heap::{make_minmax_heap, pop_minmax_heap};
///
/// let mut heap = vec![17, 16, 31, 30, 10, 13, 12];
/// make_minmax_heap(&mut heap);
///
/// pop_minmax_heap(&mut heap);
/// assert_eq!(heap.pop(), Some(10));
/// assert_eq!(heap[0], 12);
/// ```
pub fn pop_minmax_heap<T: Ord>(v: &mut [T]) {
    pop_minmax_heap_by(v, T::lt);
}

/// Moves the minimum under `is_less` of the min-max heap `v` to the last
/// position and makes `v[..v.len() - 1]` a min-max heap again.
///
/// Passing a reversed comparator pops the maximum of a max-min heap.
pub fn pop_minmax_heap_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let Some(last) = v.len().checked_sub(1) else {
        return;
    };
    v.swap(0, last);
    raw::sift_down(&mut v[..last], 0, &mut is_less);
}

/// Moves the maximum of the min-max heap `v` to the last position and makes
/// `v[..v.len() - 1]` a min-max heap again.
///
/// # Complexity
///
/// O(log n)
///
/// # Examples
///
/// ```
/// use order_statistics::minmax_heap::{is_minmax_heap, make_minmax_heap, pop_max_minmax_heap};
///
/// let mut heap = vec![17, 16, 31, 30, 10, 13, 12];
/// make_minmax_heap(&mut heap);
///
/// pop_max_minmax_heap(&mut heap);
/// assert_eq!(heap.pop(), Some(31));
/// assert!(is_minmax_heap(&heap));
/// ```
pub fn pop_max_minmax_heap<T: Ord>(v: &mut [T]) {
    pop_max_minmax_heap_by(v, T::lt);
}

/// Moves the maximum under `is_less` of the min-max heap `v` to the last
/// position and makes `v[..v.len() - 1]` a min-max heap again.
pub fn pop_max_minmax_heap_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let Some(position) = raw::max_position(v, &mut is_less) else {
        return;
    };
    let last = v.len() - 1;
    if position < last {
        v.swap(position, last);
        raw::sift_down(&mut v[..last], position, &mut is_less);
    }
}

/// Returns the position of the maximum of the min-max heap `v`, or `None` if
/// it is empty.
///
/// # Examples
///
/// ```
/// use order_statistics::minmax_heap::minmax_heap_max_position;
///
/// let heap = [8, 71, 41, 31, 10, 11, 16, 46, 51, 31, 21, 13];
/// assert_eq!(minmax_heap_max_position(&heap), Some(1));
/// assert_eq!(minmax_heap_max_position(&[8]), Some(0));
/// assert_eq!(minmax_heap_max_position::<i32>(&[]), None);
/// ```
#[must_use]
pub fn minmax_heap_max_position<T: Ord>(v: &[T]) -> Option<usize> {
    minmax_heap_max_position_by(v, T::lt)
}

/// Returns the position of the maximum under `is_less` of the min-max heap
/// `v`, or `None` if it is empty.
#[must_use]
pub fn minmax_heap_max_position_by<T, F>(v: &[T], mut is_less: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    raw::max_position(v, &mut is_less)
}

/// Restores the min-max heap after the element at `index` was overwritten.
///
/// Everything except `v[index]` must satisfy the heap invariant.
///
/// # Complexity
///
/// O(log n)
///
/// # Panics
///
/// Panics if `index` is out of bounds.
///
/// # Examples
///
/// ```
/// use order_statistics::minmax_heap::{is_minmax_heap, make_minmax_heap, update_minmax_heap};
///
/// let mut heap = [17, 16, 31, 30, 10, 13, 12];
/// make_minmax_heap(&mut heap);
///
/// heap[0] = 99;
/// update_minmax_heap(&mut heap, 0);
/// assert!(is_minmax_heap(&heap));
/// assert_eq!(heap[0], 12);
/// ```
pub fn update_minmax_heap<T: Ord>(v: &mut [T], index: usize) {
    update_minmax_heap_by(v, index, T::lt);
}

/// Restores the min-max heap under `is_less` after the element at `index`
/// was overwritten.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
pub fn update_minmax_heap_by<T, F>(v: &mut [T], index: usize, mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    assert!(index < v.len(), "`update_minmax_heap_by()` - `index` is out of bounds!");
    raw::update(v, index, &mut is_less);
}

/// Moves the element at `index` to the last position and makes
/// `v[..v.len() - 1]` a min-max heap again.
///
/// # Complexity
///
/// O(log n)
///
/// # Panics
///
/// Panics if `index` is out of bounds.
///
/// # Examples
///
/// ```
/// use order_statistics::minmax_heap::{is_minmax_heap, make_minmax_heap, remove_minmax_heap};
///
/// let mut heap = vec![17, 16, 31, 30, 10, 13, 12];
/// make_minmax_heap(&mut heap);
///
/// let removed = heap[4];
/// remove_minmax_heap(&mut heap, 4);
/// assert_eq!(heap.pop(), Some(removed));
/// assert!(is_minmax_heap(&heap));
/// ```
pub fn remove_minmax_heap<T: Ord>(v: &mut [T], index: usize) {
    remove_minmax_heap_by(v, index, T::lt);
}

/// Moves the element at `index` to the last position and makes
/// `v[..v.len() - 1]` a min-max heap under `is_less` again.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
pub fn remove_minmax_heap_by<T, F>(v: &mut [T], index: usize, mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    assert!(index < v.len(), "`remove_minmax_heap_by()` - `index` is out of bounds!");
    let last = v.len() - 1;
    if index < last {
        v.swap(index, last);
        raw::update(&mut v[..last], index, &mut is_less);
    }
}

/// Sorts the min-max heap `v` in ascending order by repeatedly popping the
/// maximum.
///
/// # Complexity
///
/// O(n log n)
///
/// # Examples
///
/// ```
/// use order_statistics::minmax_heap::{make_minmax_heap, sort_minmax_heap};
///
/// let mut v = [17, 16, 31, 30, 10, 13, 12];
/// make_minmax_heap(&mut v);
/// sort_minmax_heap(&mut v);
/// assert_eq!(v, [10, 12, 13, 16, 17, 30, 31]);
/// ```
pub fn sort_minmax_heap<T: Ord>(v: &mut [T]) {
    sort_minmax_heap_by(v, T::lt);
}

/// Sorts the min-max heap `v` in ascending order under `is_less`.
pub fn sort_minmax_heap_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for end in (2..=v.len()).rev() {
        pop_max_minmax_heap_by(&mut v[..end], &mut is_less);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    #[test]
    fn descendants_of_root_cover_everything_else() {
        let all: Vec<usize> = descendants(0, 12).collect();
        assert_eq!(all, (1..12).collect::<Vec<_>>());
    }

    #[test]
    fn descendants_follow_levels() {
        let below: Vec<usize> = descendants(1, 20).collect();
        assert_eq!(below, [3, 4, 7, 8, 9, 10, 15, 16, 17, 18, 19]);
        assert_eq!(descendants(9, 20).count(), 1);
        assert_eq!(descendants(10, 20).count(), 0);
    }

    #[test]
    fn rejects_min_level_violation_deep_in_subtree() {
        // 7 at position 7 is below the min-level 8 at the root.
        assert!(!is_minmax_heap(&[8, 71, 41, 31, 10, 11, 16, 7]));
        assert!(is_minmax_heap(&[8, 71, 41, 31, 10, 11, 16, 40]));
    }

    #[test]
    fn rejects_max_level_violation_deep_in_subtree() {
        // 72 at position 8 is above the max-level 71 at position 1.
        assert!(!is_minmax_heap(&[8, 71, 41, 31, 10, 11, 16, 46, 72]));
    }

    proptest! {
        #[test]
        fn descendants_match_parent_chain(index in 0usize..200, len in 0usize..400) {
            let expected: Vec<usize> = (index + 1..len)
                .filter(|&d| {
                    let mut up = d;
                    while up > index {
                        up = (up - 1) / 2;
                    }
                    up == index
                })
                .collect();
            let actual: Vec<usize> = descendants(index, len).collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn max_min_dual_puts_maximum_at_root(mut values in prop::collection::vec(any::<i16>(), 1..300)) {
            make_minmax_heap_by(&mut values, |a, b| a > b);
            prop_assert!(is_minmax_heap_by(&values, |a, b| a > b));
            prop_assert_eq!(Some(&values[0]), values.iter().max());
        }

        #[test]
        fn remove_moves_chosen_element_to_end(
            mut values in prop::collection::vec(any::<i16>(), 1..300),
            seed: usize,
        ) {
            make_minmax_heap(&mut values);
            let index = seed % values.len();
            let removed = values[index];

            remove_minmax_heap(&mut values, index);
            prop_assert_eq!(values.pop(), Some(removed));
            prop_assert!(is_minmax_heap(&values));
        }
    }
}
