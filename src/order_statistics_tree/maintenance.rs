use core::ops::Range;

use super::OrderStatisticsTree;
use crate::minmax_heap::pop_minmax_heap_by;
use crate::raw;

impl<T, F> OrderStatisticsTree<'_, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Makes the element in the first spare slot active.
    ///
    /// The element joins the segment its value belongs to. Any tracked ranks
    /// above that segment then shift: each one takes the largest element
    /// beneath it, and its old value becomes the minimum of the segment
    /// above. Returns `false`, changing nothing, if there are no spare slots.
    ///
    /// # Complexity
    ///
    /// O(log n) when the element belongs in the trailing segment, otherwise
    /// O(m log n) for the `m` ranks that shift.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_statistics::OrderStatisticsTree;
    ///
    /// let mut buffer = [3, 1, 2, 0];
    /// let mut tree = OrderStatisticsTree::with_len(&mut buffer, 3, &[1]);
    /// assert_eq!(tree.statistic(0), Some(&2));
    ///
    /// assert!(tree.push());
    /// assert_eq!(tree.statistic(0), Some(&1));
    /// assert!(!tree.push());
    /// ```
    pub fn push(&mut self) -> bool {
        if self.len == self.data.len() {
            return false;
        }

        let carry = self.len;
        let mut is_less = &self.is_less;
        let data = &mut *self.data;
        let ranks = self.ranks;

        // First tracked rank whose value is strictly greater than the newcomer.
        let first_above = ranks.partition_point(|&rank| !is_less(&data[carry], &data[rank]));
        for (index, &rank) in ranks.iter().enumerate().skip(first_above) {
            let start = if index == 0 { 0 } else { ranks[index - 1] + 1 };
            exchange_max(data, start..rank, carry, &mut is_less);
            data.swap(carry, rank);
        }

        // Whatever is carried now belongs to the trailing segment, which ends
        // at the carry slot.
        let tail = self.tail_start();
        raw::sift_up(&mut self.data[tail..=carry], carry - tail, &mut &self.is_less);
        self.len += 1;

        trace!(segment = first_above, len = self.len, "pushed element");
        true
    }

    /// Writes `value` into the first spare slot and makes it active, as
    /// [`push`](Self::push) does.
    ///
    /// # Errors
    ///
    /// Returns `value` back if there are no spare slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_statistics::OrderStatisticsTree;
    ///
    /// let mut buffer = [30, 10, 20, 0];
    /// let mut tree = OrderStatisticsTree::with_len(&mut buffer, 3, &[1]);
    ///
    /// assert_eq!(tree.insert(15), Ok(()));
    /// assert_eq!(tree.statistic(0), Some(&15));
    /// assert_eq!(tree.insert(5), Err(5));
    /// ```
    pub fn insert(&mut self, value: T) -> Result<(), T> {
        if self.len == self.data.len() {
            return Err(value);
        }
        self.data[self.len] = value;
        self.push();
        Ok(())
    }

    /// Removes the active element at `position` and returns it. It now sits
    /// in the first spare slot.
    ///
    /// Tracked ranks at or above the removed element shift: each one takes
    /// the smallest element above it, and its old value becomes the maximum
    /// of the segment below.
    ///
    /// Returns `None`, changing nothing, if `position` is not active or if the
    /// trailing segment is empty, because shrinking would then leave the last
    /// tracked rank outside the active elements.
    ///
    /// # Complexity
    ///
    /// O(m log n) for the `m` ranks that shift.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_statistics::OrderStatisticsTree;
    ///
    /// let mut data = [50, 10, 40, 20, 30];
    /// let mut tree = OrderStatisticsTree::new(&mut data, &[2]);
    /// assert_eq!(tree.statistic(0), Some(&30));
    ///
    /// // Position 2 holds the median itself.
    /// assert_eq!(tree.remove(2), Some(&30));
    /// assert_eq!(tree.statistic(0), Some(&40));
    ///
    /// assert_eq!(tree.remove(3), Some(&50));
    ///
    /// // The trailing segment is empty, so the last rank cannot shift down.
    /// assert_eq!(tree.remove(0), None);
    /// ```
    pub fn remove(&mut self, position: usize) -> Option<&T> {
        if position >= self.len || self.tail_start() >= self.len {
            return None;
        }

        let len = self.len;
        let mut is_less = &self.is_less;
        let data = &mut self.data[..len];
        let ranks = self.ranks;

        let first = ranks.partition_point(|&rank| rank < position);
        if ranks.get(first) != Some(&position) {
            // Inside a segment: pull the element out of that segment's heap.
            let start = if first == 0 { 0 } else { ranks[first - 1] + 1 };
            let end = ranks.get(first).copied().unwrap_or(len);
            let last = end - 1;
            if position < last {
                data.swap(position, last);
                raw::update(&mut data[start..last], position - start, &mut is_less);
            }
            if first < ranks.len() {
                // The rank above is the largest element of the shrunken
                // segment's new contents.
                data.swap(last, end);
                raw::sift_up(&mut data[start..end], last - start, &mut is_less);
            }
        }

        // The removed element sits on `ranks[first]`; walk it up to the end.
        for (index, &rank) in ranks.iter().enumerate().skip(first) {
            let start = rank + 1;
            let end = ranks.get(index + 1).copied().unwrap_or(len);
            if start == end {
                // Empty segment: the next rank is the successor.
                data.swap(rank, end);
                continue;
            }

            // Promote the segment's minimum and drop the removed element off
            // the segment's end.
            data.swap(rank, start);
            pop_minmax_heap_by(&mut data[start..end], &mut is_less);
            if end < len {
                data.swap(end - 1, end);
                raw::sift_up(&mut data[start..end], end - 1 - start, &mut is_less);
            }
        }

        self.len -= 1;
        trace!(position, len = self.len, "removed element");
        Some(&self.data[self.len])
    }

    /// Removes the smallest active element, as [`remove`](Self::remove) does.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_statistics::OrderStatisticsTree;
    ///
    /// let mut data = [50, 10, 40, 20, 30];
    /// let mut tree = OrderStatisticsTree::new(&mut data, &[1]);
    ///
    /// assert_eq!(tree.pop_min(), Some(&10));
    /// assert_eq!(tree.statistic(0), Some(&30));
    /// ```
    pub fn pop_min(&mut self) -> Option<&T> {
        self.remove(0)
    }

    /// Removes the largest active element, as [`remove`](Self::remove) does.
    ///
    /// Returns `None` when the largest element is the last tracked rank.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_statistics::OrderStatisticsTree;
    ///
    /// let mut data = [50, 10, 40, 20, 30];
    /// let mut tree = OrderStatisticsTree::new(&mut data, &[1]);
    ///
    /// assert_eq!(tree.pop_max(), Some(&50));
    /// assert_eq!(tree.max(), Some(&40));
    /// ```
    pub fn pop_max(&mut self) -> Option<&T> {
        let position = self.max_position()?;
        self.remove(position)
    }
}

/// Swaps `v[carry]` with the maximum of the heap `v[segment]` if that maximum
/// is greater, leaving the larger of the two in `v[carry]`.
fn exchange_max<T, F>(v: &mut [T], segment: Range<usize>, carry: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let Some(top) = raw::max_position(&v[segment.clone()], is_less) else {
        return;
    };
    let top = segment.start + top;
    if is_less(&v[carry], &v[top]) {
        v.swap(carry, top);
        raw::update(&mut v[segment.clone()], top - segment.start, is_less);
    }
}
