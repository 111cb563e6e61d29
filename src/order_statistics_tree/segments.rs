use core::iter::FusedIterator;

use super::OrderStatisticsTree;
use crate::raw;

impl<T, F> OrderStatisticsTree<'_, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Returns the number of segments, one more than the number of tracked
    /// ranks.
    #[must_use]
    pub const fn segment_count(&self) -> usize {
        self.ranks.len() + 1
    }

    /// Returns the `index`-th segment in heap order, or `None` if `index` is
    /// not below [`segment_count`](Self::segment_count).
    ///
    /// Segment `0` precedes the first tracked rank and the last segment
    /// follows the last tracked rank. Either may be empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_statistics::OrderStatisticsTree;
    ///
    /// let mut data = [7, 3, 9, 1, 5];
    /// let tree = OrderStatisticsTree::new(&mut data, &[2]);
    ///
    /// let mut low = tree.segment(0).unwrap().to_vec();
    /// low.sort();
    /// assert_eq!(low, [1, 3]);
    /// assert_eq!(tree.segment(1).unwrap().len(), 2);
    /// assert!(tree.segment(2).is_none());
    /// ```
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<&[T]> {
        self.segment_bounds(index).map(|bounds| &self.data[bounds])
    }

    /// Returns the smallest element of the `index`-th segment.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn segment_min(&self, index: usize) -> Option<&T> {
        self.segment(index)?.first()
    }

    /// Returns the largest element of the `index`-th segment.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use order_statistics::OrderStatisticsTree;
    ///
    /// let mut data = [7, 3, 9, 1, 5, 8];
    /// let tree = OrderStatisticsTree::new(&mut data, &[2]);
    ///
    /// assert_eq!(tree.segment_min(0), Some(&1));
    /// assert_eq!(tree.segment_max(0), Some(&3));
    /// assert_eq!(tree.segment_max(1), Some(&9));
    /// ```
    #[must_use]
    pub fn segment_max(&self, index: usize) -> Option<&T> {
        let segment = self.segment(index)?;
        raw::max_position(segment, &mut &self.is_less).map(|position| &segment[position])
    }

    /// Returns an iterator over the segments, lowest first.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_statistics::OrderStatisticsTree;
    ///
    /// let mut data = [7, 3, 9, 1, 5, 8];
    /// let tree = OrderStatisticsTree::new(&mut data, &[2, 3]);
    ///
    /// let sizes: Vec<usize> = tree.segments().map(<[i32]>::len).collect();
    /// assert_eq!(sizes, [2, 0, 2]);
    /// ```
    pub fn segments(&self) -> Segments<'_, T> {
        Segments {
            rest: self.as_slice(),
            offset: 0,
            ranks: self.ranks,
            finished: false,
        }
    }

    /// Returns every active element at or below the tracked `rank`, or `None`
    /// if `rank` is not tracked.
    ///
    /// The slice ends with the order statistic itself. The elements before it
    /// are in no particular order.
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
    /// let mut data = [17, 16, 31, 30, 10, 13, 12, 15];
    /// let tree = OrderStatisticsTree::new(&mut data, &[1, 5]);
    ///
    /// let mut lowest = tree.range_to_rank(1).unwrap().to_vec();
    /// lowest.sort();
    /// assert_eq!(lowest, [10, 12]);
    /// assert_eq!(tree.range_to_rank(2), None);
    /// ```
    #[must_use]
    pub fn range_to_rank(&self, rank: usize) -> Option<&[T]> {
        self.get_by_rank(rank)?;
        Some(&self.data[..=rank])
    }

    /// Returns every active element at or above the tracked `rank`, or `None`
    /// if `rank` is not tracked.
    ///
    /// The slice starts with the order statistic itself. The elements after it
    /// are in no particular order.
    #[must_use]
    pub fn range_from_rank(&self, rank: usize) -> Option<&[T]> {
        self.get_by_rank(rank)?;
        Some(&self.data[rank..self.len])
    }
}

/// An iterator over the segments of an [`OrderStatisticsTree`].
///
/// This `struct` is created by the [`segments`](OrderStatisticsTree::segments)
/// method. Each item is a min-max heap.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Segments<'a, T> {
    rest: &'a [T],
    offset: usize,
    ranks: &'a [usize],
    finished: bool,
}

impl<'a, T> Iterator for Segments<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.ranks.split_first() {
            Some((&rank, ranks)) => {
                let (segment, rest) = self.rest.split_at(rank - self.offset);
                // Skip the rank element itself.
                self.rest = &rest[1..];
                self.offset = rank + 1;
                self.ranks = ranks;
                Some(segment)
            }
            None => {
                self.finished = true;
                Some(self.rest)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.finished { 0 } else { self.ranks.len() + 1 };
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Segments<'_, T> {}

impl<T> FusedIterator for Segments<'_, T> {}
