use super::level::{Level, first_child, grandparent, parent};
use super::ordering::reversed;

/// Returns the position of the greatest element of a valid min-max heap.
#[inline]
pub(crate) fn max_position<T, F>(v: &[T], is_less: &mut F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    match v.len() {
        0 => None,
        1 => Some(0),
        2 => Some(1),
        _ => Some(if is_less(&v[1], &v[2]) { 2 } else { 1 }),
    }
}

/// Restores the invariant for the subtree rooted at `index`, assuming the
/// subtrees of its children are already valid min-max heaps.
///
/// Each round moves the node past its most extreme child or grandchild, so
/// the node descends two levels per round.
pub(crate) fn sift_down<T, F>(v: &mut [T], index: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    match Level::of(index) {
        Level::Min => sift_down_on_level(v, index, is_less),
        Level::Max => sift_down_on_level(v, index, &mut reversed(is_less)),
    }
}

/// `precedes` is `is_less` on a min level and its reverse on a max level.
/// Grandchildren share the node's level, so it stays fixed for the whole descent.
fn sift_down_on_level<T, P>(v: &mut [T], mut index: usize, precedes: &mut P)
where
    P: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    loop {
        let child = first_child(index);
        if child >= len {
            return;
        }

        let grandchild = first_child(child);
        let mut best = child;
        for candidate in [child + 1, grandchild, grandchild + 1, grandchild + 2, grandchild + 3] {
            if candidate >= len {
                break;
            }
            if precedes(&v[candidate], &v[best]) {
                best = candidate;
            }
        }

        if !precedes(&v[best], &v[index]) {
            return;
        }
        v.swap(best, index);

        // A direct child has no grandchildren, otherwise one of them would
        // have been the better candidate, so there is nothing below it to fix.
        if best < grandchild {
            return;
        }

        // The old value of `index` now sits below a node of the opposite level.
        let above = parent(best);
        if precedes(&v[above], &v[best]) {
            v.swap(above, best);
        }
        index = best;
    }
}

/// Moves the element at `index` toward the root until it no longer violates
/// any ancestor. Nodes below `index` are not examined, so this is only a full
/// repair for leaves. Returns the element's final position.
pub(crate) fn sift_up<T, F>(v: &mut [T], index: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if index > 0 && past_parent(v, index, is_less) {
        let above = parent(index);
        v.swap(index, above);
        climb(v, above, is_less)
    } else {
        climb(v, index, is_less)
    }
}

/// Restores the invariant after the element at `index` was replaced by an
/// arbitrary value.
pub(crate) fn update<T, F>(v: &mut [T], index: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(index < v.len(), "`update()` - `index` is out of bounds!");
    if index > 0 && past_parent(v, index, is_less) {
        // The parent moves down into `index` and is now the only thing out of
        // place below it.
        let above = parent(index);
        v.swap(index, above);
        sift_down(v, index, is_less);
        climb(v, above, is_less);
    } else if climb(v, index, is_less) == index {
        sift_down(v, index, is_less);
    }
}

/// Whether the element at `index` belongs above its parent: greater than a
/// max-level parent when on a min level, less than a min-level parent
/// otherwise.
#[inline]
fn past_parent<T, F>(v: &[T], index: usize, is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    let above = parent(index);
    match Level::of(index) {
        Level::Min => is_less(&v[above], &v[index]),
        Level::Max => is_less(&v[index], &v[above]),
    }
}

/// Swaps the element at `index` with its grandparent while it precedes it on
/// its own level.
fn climb<T, F>(v: &mut [T], index: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    match Level::of(index) {
        Level::Min => climb_on_level(v, index, is_less),
        Level::Max => climb_on_level(v, index, &mut reversed(is_less)),
    }
}

fn climb_on_level<T, P>(v: &mut [T], mut index: usize, precedes: &mut P) -> usize
where
    P: FnMut(&T, &T) -> bool,
{
    while index > 2 {
        let above = grandparent(index);
        if !precedes(&v[index], &v[above]) {
            break;
        }
        v.swap(index, above);
        index = above;
    }
    index
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::minmax_heap::{is_minmax_heap, make_minmax_heap};
    use alloc::vec::Vec;
    use proptest::prelude::*;

    fn is_less(a: &i32, b: &i32) -> bool {
        a < b
    }

    #[test]
    fn sift_down_from_root_of_single_violation() {
        // Valid except for the root.
        let mut v = [40, 71, 41, 31, 10, 11, 16, 46, 51, 31, 21, 13];
        sift_down(&mut v, 0, &mut is_less);
        assert!(is_minmax_heap(&v));
        assert_eq!(v[0], 10);
    }

    #[test]
    fn sift_up_leaf_past_max_parent() {
        // 90 lands under the max-level 71 and must end up at position 1.
        let mut v = [8, 71, 41, 31, 10, 11, 16, 46, 51, 31, 21, 13, 90];
        let to = sift_up(&mut v, 12, &mut is_less);
        assert!(is_minmax_heap(&v));
        assert_eq!((to, v[to]), (2, 90));
    }

    #[test]
    fn sift_up_leaf_to_root() {
        let mut v = [8, 71, 41, 31, 10, 11, 16, 46, 51, 31, 21, 13, 1];
        let to = sift_up(&mut v, 12, &mut is_less);
        assert!(is_minmax_heap(&v));
        assert_eq!((to, v[0]), (0, 1));
    }

    #[test]
    fn max_position_of_small_heaps() {
        assert_eq!(max_position::<i32, _>(&[], &mut is_less), None);
        assert_eq!(max_position(&[3], &mut is_less), Some(0));
        assert_eq!(max_position(&[3, 9], &mut is_less), Some(1));
        assert_eq!(max_position(&[3, 9, 12], &mut is_less), Some(2));
        assert_eq!(max_position(&[3, 9, 9], &mut is_less), Some(1));
    }

    proptest! {
        #[test]
        fn update_after_arbitrary_replacement(
            mut values in prop::collection::vec(-1000i32..1000, 1..300),
            seed: usize,
            replacement in -1200i32..1200,
        ) {
            make_minmax_heap(&mut values);
            let index = seed % values.len();
            values[index] = replacement;

            update(&mut values, index, &mut is_less);
            prop_assert!(is_minmax_heap(&values));
        }

        #[test]
        fn sift_up_of_appended_leaf(mut values in prop::collection::vec(-1000i32..1000, 1..300)) {
            let last = values.len() - 1;
            make_minmax_heap(&mut values[..last]);
            let appended = values[last];

            let to = sift_up(&mut values, last, &mut is_less);
            prop_assert!(is_minmax_heap(&values));
            prop_assert_eq!(values[to], appended);
        }

        #[test]
        fn max_position_holds_maximum(mut values in prop::collection::vec(-1000i32..1000, 1..300)) {
            make_minmax_heap(&mut values);
            let expected = values.iter().copied().max();
            let position = max_position(&values, &mut is_less);
            prop_assert_eq!(position.map(|p| values[p]), expected);
        }

        #[test]
        fn sift_down_preserves_elements(mut values in prop::collection::vec(-1000i32..1000, 0..300)) {
            let mut expected = values.clone();
            for index in (0..values.len() / 2).rev() {
                sift_down(&mut values, index, &mut is_less);
            }
            prop_assert!(is_minmax_heap(&values));

            let mut actual: Vec<i32> = values;
            actual.sort_unstable();
            expected.sort_unstable();
            prop_assert_eq!(actual, expected);
        }
    }
}
