/// A zero-based rank into the sorted order of a sequence.
///
/// Indexing an [`OrderStatisticsTree`](crate::OrderStatisticsTree) by `Rank`
/// returns the order statistic stored at that rank position.
///
/// # Examples
///
/// ```
/// use order_statistics::{OrderStatisticsTree, Rank};
///
/// let mut data = [5, 1, 4, 2, 3];
/// let tree = OrderStatisticsTree::new(&mut data, &[2]);
///
/// assert_eq!(tree[Rank(2)], 3);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);

/// Returns the `q - 1` rank positions that split `len` elements into `q`
/// quantiles, i.e. `len * i / q` for `i` in `1..q`.
///
/// `q = 2` yields the median position, `q = 4` the quartiles and `q = 100` the
/// percentiles. Positions repeat when `q > len`, so drop duplicates before
/// passing the result as a rank list.
///
/// # Examples
///
/// ```
/// use order_statistics::quantile_ranks;
///
/// let quartiles: Vec<usize> = quantile_ranks(31, 4).collect();
/// assert_eq!(quartiles, [7, 15, 23]);
///
/// assert_eq!(quantile_ranks(31, 2).collect::<Vec<_>>(), [15]);
/// assert_eq!(quantile_ranks(31, 1).count(), 0);
/// ```
///
/// # Panics
///
/// Panics if `q` is zero.
#[allow(clippy::cast_possible_truncation)]
pub fn quantile_ranks(len: usize, q: usize) -> impl DoubleEndedIterator<Item = usize> + ExactSizeIterator {
    assert!(q > 0, "`quantile_ranks()` - `q` must be non-zero!");
    // Widened so `len * i` cannot overflow. The quotient is below `len`.
    (1..q).map(move |i| (len as u128 * i as u128 / q as u128) as usize)
}
