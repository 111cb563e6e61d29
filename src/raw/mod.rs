mod level;
mod ordering;
mod sift;

pub(crate) use level::{Level, first_child};
pub(crate) use ordering::ordering_by;
pub(crate) use sift::{max_position, sift_down, sift_up, update};
