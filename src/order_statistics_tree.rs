//! Order-statistics trees: slices partitioned around fixed rank positions.
//!
//! Given ascending rank positions `k_1 < k_2 < ... < k_m`, an order-statistics
//! tree places at each `k_i` the element that would sit there if the slice were
//! sorted. The elements between two consecutive ranks (and before the first and
//! after the last) form a *segment*. A segment is unsorted but is kept as a
//! min-max heap, so its smallest and largest elements are O(1) to reach.
//!
//! ```text
//!   segment 0      k_1    segment 1     k_2    segment 2 (trailing)
//! [ min-max heap ] [x] [ min-max heap ] [y] [ min-max heap ]
//!   all <= x              x <= .. <= y           all >= y
//! ```
//!
//! [`make_order_statistics_tree`] builds the layout in place with one selection
//! pass per rank. [`OrderStatisticsTree`] borrows such a slice and keeps it valid
//! while elements are pushed into spare slots or removed.

use core::fmt;
use core::ops::{Index, Range};

use crate::Rank;
use crate::minmax_heap::{is_minmax_heap_by, make_minmax_heap_by};
use crate::raw;

mod maintenance;
mod segments;

pub use segments::Segments;

/// Rearranges `v` so that each position in `ranks` holds its order statistic
/// under the natural order, and each segment between ranks is a min-max heap.
///
/// `ranks` must be strictly ascending and every rank must be less than
/// `v.len()`. This is only checked in debug builds; use
/// [`OrderStatisticsTree::try_with_len_by`] for a checked constructor.
///
/// # Complexity
///
/// O(n) expected per rank for the selection passes, which work on shrinking
/// suffixes, plus O(n) for building the heaps.
///
/// # Examples
///
/// ```
/// use order_statistics::make_order_statistics_tree;
///
/// let mut v = [17, 16, 31, 30, 10, 13, 12, 15, 50, 45, 38, 39, 27, 34, 30, 28,
///              5, 25, 37, 8, 15, 65, 80, 18, 32, 14, 20, 59, 45, 36, 57];
///
/// let median = v.len() / 2;
/// make_order_statistics_tree(&mut v, &[median]);
/// assert_eq!(v[median], 30);
/// ```
pub fn make_order_statistics_tree<T: Ord>(v: &mut [T], ranks: &[usize]) {
    make_order_statistics_tree_by(v, ranks, T::lt);
}

/// Rearranges `v` so that each position in `ranks` holds its order statistic
/// under `is_less`, and each segment between ranks is a min-max heap.
///
/// See [`make_order_statistics_tree`].
pub fn make_order_statistics_tree_by<T, F>(v: &mut [T], ranks: &[usize], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(
        check_ranks(ranks, v.len()).is_ok(),
        "`make_order_statistics_tree_by()` - `ranks` must be strictly ascending and in bounds!"
    );

    let mut start = 0;
    for &rank in ranks {
        v[start..].select_nth_unstable_by(rank - start, raw::ordering_by(&mut is_less));
        make_minmax_heap_by(&mut v[start..rank], &mut is_less);
        start = rank + 1;
    }
    make_minmax_heap_by(&mut v[start..], &mut is_less);
}

/// Returns `true` if `v` is an order-statistics tree for `ranks` under the
/// natural order.
///
/// Returns `false` for a rank list that is not strictly ascending or not in
/// bounds. Every segment is checked with [`is_minmax_heap`](crate::is_minmax_heap),
/// so this takes O(n log n) time and is meant for validation and tests.
///
/// # Examples
///
/// ```
/// use order_statistics::{is_order_statistics_tree, make_order_statistics_tree};
///
/// let mut v = [9, 2, 7, 4, 5, 6, 3, 8, 1];
/// assert!(!is_order_statistics_tree(&v, &[4]));
///
/// make_order_statistics_tree(&mut v, &[4]);
/// assert!(is_order_statistics_tree(&v, &[4]));
/// assert!(!is_order_statistics_tree(&v, &[4, 4]));
/// ```
#[must_use]
pub fn is_order_statistics_tree<T: Ord>(v: &[T], ranks: &[usize]) -> bool {
    is_order_statistics_tree_by(v, ranks, T::lt)
}

/// Returns `true` if `v` is an order-statistics tree for `ranks` under
/// `is_less`.
///
/// See [`is_order_statistics_tree`].
#[must_use]
pub fn is_order_statistics_tree_by<T, F>(v: &[T], ranks: &[usize], mut is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    if check_ranks(ranks, v.len()).is_err() {
        return false;
    }

    let mut below: Option<&T> = None;
    let mut start = 0;
    for end in ranks.iter().copied().chain([v.len()]) {
        let above = v.get(end);
        let segment = &v[start..end];
        let bounded = segment.iter().chain(above).all(|x| below.is_none_or(|b| !is_less(x, b)))
            && segment.iter().all(|x| above.is_none_or(|a| !is_less(a, x)));
        if !bounded || !is_minmax_heap_by(segment, &mut is_less) {
            return false;
        }
        below = above;
        start = end + 1;
    }
    true
}

/// Checks that `ranks` is strictly ascending and every rank is below `len`.
fn check_ranks(ranks: &[usize], len: usize) -> Result<(), RankError> {
    let mut previous: Option<usize> = None;
    for &rank in ranks {
        if rank >= len {
            return Err(RankError::OutOfBounds { rank, len });
        }
        if let Some(previous) = previous
            && previous >= rank
        {
            return Err(RankError::NotAscending { previous, rank });
        }
        previous = Some(rank);
    }
    Ok(())
}

/// The reason a rank list cannot be used to build an [`OrderStatisticsTree`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RankError {
    /// A rank position does not fall inside the active elements.
    OutOfBounds { rank: usize, len: usize },
    /// A rank position is not greater than the one before it.
    NotAscending { previous: usize, rank: usize },
    /// The requested active length exceeds the length of the buffer.
    LenExceedsCapacity { len: usize, capacity: usize },
}

impl fmt::Display for RankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RankError::OutOfBounds { rank, len } => {
                write!(f, "rank {rank} is out of bounds for length {len}")
            }
            RankError::NotAscending { previous, rank } => {
                write!(f, "rank {rank} does not follow {previous} in strictly ascending order")
            }
            RankError::LenExceedsCapacity { len, capacity } => {
                write!(f, "length {len} exceeds capacity {capacity}")
            }
        }
    }
}

impl core::error::Error for RankError {}

/// An order-statistics tree borrowing its storage.
///
/// The buffer is split into active elements, `[0, len)`, and spare slots,
/// `[len, capacity)`. The active elements always form an order-statistics tree
/// for the borrowed rank list:
///
/// - the element at each tracked rank is the order statistic of that rank;
/// - every segment between two tracked ranks is a min-max heap.
///
/// Rank positions are absolute and do not move as elements come and go.
/// [`push`](Self::push) and [`insert`](Self::insert) grow the active range into
/// the spare slots, and [`remove`](Self::remove) shrinks it. A removed element
/// is left in the first spare slot. The storage itself never grows.
///
/// The comparator must be a strict weak order. It is stored, so it is an `Fn`
/// rather than the `FnMut` the free functions accept.
///
/// # Examples
///
/// ```
/// use order_statistics::{OrderStatisticsTree, Rank};
///
/// let mut buffer = [40, 10, 30, 20, 50, 0, 0, 0];
/// let mut tree = OrderStatisticsTree::with_len(&mut buffer, 5, &[2]);
/// assert_eq!(tree[Rank(2)], 30);
///
/// tree.insert(5).unwrap();
/// tree.insert(1).unwrap();
/// assert_eq!(tree[Rank(2)], 10);
///
/// assert_eq!(tree.pop_min(), Some(&1));
/// assert_eq!(tree[Rank(2)], 20);
/// assert_eq!(tree.len(), 6);
/// ```
pub struct OrderStatisticsTree<'a, T, F = fn(&T, &T) -> bool> {
    data: &'a mut [T],
    ranks: &'a [usize],
    len: usize,
    is_less: F,
}

impl<'a, T: Ord> OrderStatisticsTree<'a, T> {
    /// Builds an order-statistics tree over all of `data` under the natural
    /// order, leaving no spare slots.
    ///
    /// # Complexity
    ///
    /// O(n) expected per rank.
    ///
    /// # Panics
    ///
    /// Panics if `ranks` is not strictly ascending or a rank is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_statistics::OrderStatisticsTree;
    ///
    /// let mut data = [6, 2, 9, 4, 1];
    /// let tree = OrderStatisticsTree::new(&mut data, &[0, 2, 4]);
    /// assert_eq!(tree.statistic(1), Some(&4));
    /// ```
    pub fn new(data: &'a mut [T], ranks: &'a [usize]) -> Self {
        let len = data.len();
        Self::with_len_by(data, len, ranks, T::lt)
    }

    /// Builds an order-statistics tree over `data[..len]` under the natural
    /// order, leaving `data[len..]` as spare slots.
    ///
    /// # Panics
    ///
    /// Panics if `len > data.len()`, `ranks` is not strictly ascending, or a
    /// rank is not below `len`.
    pub fn with_len(data: &'a mut [T], len: usize, ranks: &'a [usize]) -> Self {
        Self::with_len_by(data, len, ranks, T::lt)
    }
}

impl<'a, T, F> OrderStatisticsTree<'a, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Builds an order-statistics tree over all of `data` under `is_less`.
    ///
    /// # Panics
    ///
    /// Panics if `ranks` is not strictly ascending or a rank is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_statistics::OrderStatisticsTree;
    ///
    /// // Rank 0 under "greater than" is the maximum.
    /// let mut data = [6, 2, 9, 4, 1];
    /// let tree = OrderStatisticsTree::new_by(&mut data, &[0], |a: &i32, b: &i32| a > b);
    /// assert_eq!(tree.statistic(0), Some(&9));
    /// ```
    pub fn new_by(data: &'a mut [T], ranks: &'a [usize], is_less: F) -> Self {
        let len = data.len();
        Self::with_len_by(data, len, ranks, is_less)
    }

    /// Builds an order-statistics tree over `data[..len]` under `is_less`,
    /// leaving `data[len..]` as spare slots.
    ///
    /// # Panics
    ///
    /// Panics if `len > data.len()`, `ranks` is not strictly ascending, or a
    /// rank is not below `len`.
    pub fn with_len_by(data: &'a mut [T], len: usize, ranks: &'a [usize], is_less: F) -> Self {
        match Self::try_with_len_by(data, len, ranks, is_less) {
            Ok(tree) => tree,
            Err(error) => panic!("`OrderStatisticsTree::with_len_by()` - {error}!"),
        }
    }

    /// Builds an order-statistics tree over `data[..len]` under `is_less`, or
    /// reports why the arguments do not describe one.
    ///
    /// # Errors
    ///
    /// Returns a [`RankError`] if `len > data.len()`, if `ranks` is not
    /// strictly ascending, or if a rank is not below `len`. `data` is left
    /// untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_statistics::{OrderStatisticsTree, RankError};
    ///
    /// let mut data = [3, 1, 2];
    /// let result = OrderStatisticsTree::try_with_len_by(&mut data, 3, &[1, 3], i32::lt);
    /// assert_eq!(result.err(), Some(RankError::OutOfBounds { rank: 3, len: 3 }));
    /// ```
    pub fn try_with_len_by(data: &'a mut [T], len: usize, ranks: &'a [usize], is_less: F) -> Result<Self, RankError> {
        if len > data.len() {
            return Err(RankError::LenExceedsCapacity {
                len,
                capacity: data.len(),
            });
        }
        check_ranks(ranks, len)?;

        make_order_statistics_tree_by(&mut data[..len], ranks, &is_less);
        trace!(len, ranks = ranks.len(), capacity = data.len(), "built order statistics tree");

        Ok(Self {
            data,
            ranks,
            len,
            is_less,
        })
    }

    /// Returns the number of active elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no active elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the length of the borrowed buffer, active elements and spare
    /// slots together.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns the tracked rank positions.
    #[must_use]
    pub const fn ranks(&self) -> &'a [usize] {
        self.ranks
    }

    /// Returns the active elements in tree order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len]
    }

    /// Releases the borrowed buffer, spare slots included.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_statistics::OrderStatisticsTree;
    ///
    /// let mut buffer = [3, 1, 2, 0];
    /// let mut tree = OrderStatisticsTree::with_len(&mut buffer, 3, &[]);
    /// assert_eq!(tree.pop_min(), Some(&1));
    ///
    /// let released = tree.into_inner();
    /// assert_eq!(released.len(), 4);
    /// assert_eq!(released[2], 1);
    /// ```
    #[must_use]
    pub fn into_inner(self) -> &'a mut [T] {
        self.data
    }

    /// Returns the order statistic at the `index`-th tracked rank, or `None`
    /// if fewer ranks are tracked.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn statistic(&self, index: usize) -> Option<&T> {
        self.ranks.get(index).map(|&rank| &self.data[rank])
    }

    /// Returns the element at `rank` in sorted order if `rank` is one of the
    /// tracked ranks, and `None` otherwise.
    ///
    /// # Complexity
    ///
    /// O(log m) for `m` tracked ranks.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_statistics::OrderStatisticsTree;
    ///
    /// let mut data = [50, 10, 40, 20, 30];
    /// let tree = OrderStatisticsTree::new(&mut data, &[1, 3]);
    ///
    /// assert_eq!(tree.get_by_rank(3), Some(&40));
    /// assert_eq!(tree.get_by_rank(2), None);
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<&T> {
        self.ranks.binary_search(&rank).ok().map(|_| &self.data[rank])
    }

    /// Returns the smallest active element.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the largest active element.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        self.max_position().map(|position| &self.data[position])
    }

    /// The largest element is the trailing segment's maximum, or the last
    /// tracked rank when that segment is empty.
    fn max_position(&self) -> Option<usize> {
        let tail = self.tail_start();
        if tail < self.len {
            raw::max_position(&self.data[tail..self.len], &mut &self.is_less).map(|position| tail + position)
        } else {
            self.ranks.last().copied()
        }
    }

    /// First position of the trailing segment.
    fn tail_start(&self) -> usize {
        self.ranks.last().map_or(0, |&rank| rank + 1)
    }

    /// Bounds of the `index`-th segment within the active elements.
    fn segment_bounds(&self, index: usize) -> Option<Range<usize>> {
        let start = match index {
            0 => 0,
            _ => *self.ranks.get(index - 1)? + 1,
        };
        let end = self.ranks.get(index).copied().unwrap_or(self.len);
        Some(start..end)
    }
}

/// Indexes into the tree by tracked rank.
///
/// # Panics
///
/// Panics if `rank` is not one of the tracked ranks.
///
/// # Examples
///
/// ```
/// use order_statistics::{OrderStatisticsTree, Rank};
///
/// let mut data = [50, 10, 40, 20, 30];
/// let tree = OrderStatisticsTree::new(&mut data, &[2]);
/// assert_eq!(tree[Rank(2)], 30);
/// ```
impl<T, F> Index<Rank> for OrderStatisticsTree<'_, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).expect("rank is not tracked")
    }
}

impl<T: fmt::Debug, F> fmt::Debug for OrderStatisticsTree<'_, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderStatisticsTree")
            .field("elements", &&self.data[..self.len])
            .field("ranks", &self.ranks)
            .field("capacity", &self.data.len())
            .finish_non_exhaustive()
    }
}
