//! Index arithmetic for a complete binary tree stored in a slice.
//!
//! Node `i` has children `2i + 1` and `2i + 2`. The root sits on a min level
//! and levels alternate from there.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Level {
    Min,
    Max,
}

impl Level {
    /// Returns the level of the node at `index`: `floor(log2(index + 1))` even
    /// is a min level, odd is a max level.
    #[inline]
    pub(crate) const fn of(index: usize) -> Self {
        assert!(index < usize::MAX, "`Level::of()` - `index` == `usize::MAX`!");
        if (index + 1).ilog2() % 2 == 0 { Level::Min } else { Level::Max }
    }
}

#[inline]
pub(crate) const fn parent(index: usize) -> usize {
    debug_assert!(index > 0, "`parent()` - the root has no parent!");
    (index - 1) / 2
}

#[inline]
pub(crate) const fn grandparent(index: usize) -> usize {
    debug_assert!(index > 2, "`grandparent()` - `index` has no grandparent!");
    (index - 3) / 4
}

#[inline]
pub(crate) const fn first_child(index: usize) -> usize {
    2 * index + 1
}
