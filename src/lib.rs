//! In-place min-max heaps and order-statistics trees for Rust.
//!
//! This crate provides two layered structures that live entirely inside a
//! caller-owned slice. Neither owns memory or allocates:
//!
//! - **Min-max heap** - a complete binary tree laid out by index, whose levels
//!   alternate between "min" and "max" levels. The minimum is at index 0 and
//!   the maximum at index 1 or 2, so both are O(1) to read. Insertion and
//!   removal are O(log n). See [`make_minmax_heap`], [`push_minmax_heap`],
//!   [`pop_minmax_heap`] and [`pop_max_minmax_heap`].
//! - **Order-statistics tree** - a slice partitioned around a fixed, ascending
//!   set of rank positions. After O(n) expected construction, each position holds
//!   the element that would occupy it in sorted order. Each segment between two
//!   ranks is a min-max heap. See [`make_order_statistics_tree`] and
//!   [`OrderStatisticsTree`].
//!
//! # Example
//!
//! ```
//! use order_statistics::{make_order_statistics_tree, quantile_ranks};
//!
//! let mut latencies = [17, 16, 31, 30, 10, 13, 12, 15, 50, 45, 38, 39, 27, 34, 30, 28,
//!                      5, 25, 37, 8, 15, 65, 80, 18, 32, 14, 20, 59, 45, 36, 57];
//!
//! // Quartiles: positions len/4, len/2 and 3*len/4.
//! let ranks: Vec<usize> = quantile_ranks(latencies.len(), 4).collect();
//! make_order_statistics_tree(&mut latencies, &ranks);
//!
//! assert_eq!(latencies[ranks[0]], 15);
//! assert_eq!(latencies[ranks[1]], 30); // the median
//! assert_eq!(latencies[ranks[2]], 39);
//! ```
//!
//! # Comparators
//!
//! Every operation comes in a natural-order form (`T: Ord`) and a `_by` form
//! taking `is_less: FnMut(&T, &T) -> bool`, which must be a strict weak
//! order. Passing "greater than" yields the max-min dual, with the maximum at
//! the root. A comparator that is not a strict weak order does not cause
//! undefined behavior, but the results are unspecified.
//!
//! # Features
//!
//! - **`no_std`** - The crate never allocates.
//! - **`tracing`** - Emits `trace`-level events from [`OrderStatisticsTree`].

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg(test)]
extern crate alloc;

/// Forwards to `tracing::trace!` when the `tracing` feature is enabled.
macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    }};
}

mod order_statistic;
mod raw;

pub mod minmax_heap;
pub mod order_statistics_tree;

pub use minmax_heap::{
    is_minmax_heap, is_minmax_heap_by, make_minmax_heap, make_minmax_heap_by, minmax_heap_max_position,
    minmax_heap_max_position_by, pop_max_minmax_heap, pop_max_minmax_heap_by, pop_minmax_heap, pop_minmax_heap_by,
    push_minmax_heap, push_minmax_heap_by, remove_minmax_heap, remove_minmax_heap_by, sort_minmax_heap,
    sort_minmax_heap_by, update_minmax_heap, update_minmax_heap_by,
};
pub use order_statistic::{Rank, quantile_ranks};
pub use order_statistics_tree::{
    OrderStatisticsTree, RankError, is_order_statistics_tree, is_order_statistics_tree_by, make_order_statistics_tree,
    make_order_statistics_tree_by,
};
