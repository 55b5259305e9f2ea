//! Placement constraint for extending a path by one point
//!
//! A candidate is appended by connecting it to the last placed point. The new
//! segment must not run parallel to the segment it continues, and must not
//! touch any earlier segment. The continued segment shares the last point
//! with the new one by construction, so it is only checked for parallelism.

use crate::math::geometry::{Segment, is_parallel, line_idx_intersects};
use crate::spatial::{CellIndex, Grid};

/// Segments formed by consecutive points of a path
pub fn committed_segments(placed: &[CellIndex]) -> impl Iterator<Item = Segment> + '_ {
    placed
        .windows(2)
        .filter_map(|pair| match *pair {
            [start, end] => Some(Segment::new(start, end)),
            _ => None,
        })
}

/// Decide whether `candidate` may be appended to the path `placed`
///
/// Always legal while fewer than two points are placed.
pub fn can_insert(grid: &Grid, candidate: CellIndex, placed: &[CellIndex]) -> bool {
    let Some((&last, head)) = placed.split_last() else {
        return true;
    };
    let Some(&before_last) = head.last() else {
        return true;
    };

    let new_segment = Segment::new(candidate, last);
    if is_parallel(grid, new_segment, Segment::new(before_last, last)) {
        return false;
    }

    // Segments of `head` are every committed segment except the preceding one
    !committed_segments(head).any(|segment| line_idx_intersects(grid, new_segment, segment))
}
