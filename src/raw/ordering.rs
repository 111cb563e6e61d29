use core::cmp::Ordering;

/// Adapts `is_less` so that it answers "is `a` greater than `b`", i.e. swaps its
/// arguments. Sifting on a max level is sifting on a min level through this.
#[inline]
pub(crate) fn reversed<T, F>(is_less: &mut F) -> impl FnMut(&T, &T) -> bool + '_
where
    F: FnMut(&T, &T) -> bool,
{
    move |a: &T, b: &T| is_less(b, a)
}

/// Derives a three-way comparison from `is_less`, for the `select_nth_unstable`
/// family.
#[inline]
pub(crate) fn ordering_by<T, F>(is_less: &mut F) -> impl FnMut(&T, &T) -> Ordering + '_
where
    F: FnMut(&T, &T) -> bool,
{
    move |a: &T, b: &T| {
        if is_less(a, b) {
            Ordering::Less
        } else if is_less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn reversed_swaps_arguments(a: i32, b: i32) {
            let mut is_less = |x: &i32, y: &i32| x < y;
            let mut is_greater = reversed(&mut is_less);
            prop_assert_eq!(is_greater(&a, &b), a > b);
        }

        #[test]
        fn ordering_matches_ord(a: i32, b: i32) {
            let mut is_less = |x: &i32, y: &i32| x < y;
            let mut compare = ordering_by(&mut is_less);
            prop_assert_eq!(compare(&a, &b), a.cmp(&b));
        }
    }
}
