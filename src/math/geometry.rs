//! Segment predicates over cell indices
//!
//! Segments are pairs of cell indices interpreted through their integer cell
//! coordinates, never through plane positions. Every test is evaluated with
//! exact integer arithmetic: divisions from the parametric and Cramer's-rule
//! forms are cross-multiplied away, so equal rationals always compare equal.

use crate::spatial::{CellCoord, CellIndex, Grid};

/// Straight connection between two cell centers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    /// First endpoint
    pub start: CellIndex,
    /// Second endpoint
    pub end: CellIndex,
}

impl Segment {
    /// Create a segment from two cell indices
    pub const fn new(start: CellIndex, end: CellIndex) -> Self {
        Self { start, end }
    }

    /// Segment with its endpoints swapped
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    fn coords(self, grid: &Grid) -> (CellCoord, CellCoord) {
        (grid.idx_to_xy(self.start), grid.idx_to_xy(self.end))
    }
}

// i128 keeps the triple products of Cramer's rule exact for any grid size
const fn wide(value: i32) -> i128 {
    value as i128
}

fn within(value: i32, a: i32, b: i32) -> bool {
    a.min(b) <= value && value <= a.max(b)
}

/// `num / den` lies in `[min(a, b), max(a, b)]`, for `den > 0`
fn ratio_within(num: i128, den: i128, a: i32, b: i32) -> bool {
    wide(a.min(b)) * den <= num && num <= wide(a.max(b)) * den
}

fn point_on_segment(p: CellCoord, a: CellCoord, b: CellCoord) -> bool {
    if a.x == b.x {
        p.x == a.x && within(p.y, a.y, b.y)
    } else if a.y == b.y {
        p.y == a.y && within(p.x, a.x, b.x)
    } else {
        // t1 == t2 with both denominators non-zero; 0 <= t1 <= 1 is p.x between the ends
        let same_parameter =
            wide(p.x - a.x) * wide(b.y - a.y) == wide(p.y - a.y) * wide(b.x - a.x);
        same_parameter && within(p.x, a.x, b.x)
    }
}

/// Cross product of the two direction vectors
fn direction_cross(a1: CellCoord, a2: CellCoord, b1: CellCoord, b2: CellCoord) -> i128 {
    wide(a1.x - a2.x) * wide(b1.y - b2.y) - wide(a1.y - a2.y) * wide(b1.x - b2.x)
}

/// Check whether cell `point` lies on the closed segment
pub fn point_is_on_line(grid: &Grid, point: CellIndex, segment: Segment) -> bool {
    let (a, b) = segment.coords(grid);
    point_on_segment(grid.idx_to_xy(point), a, b)
}

/// Check whether two segments have parallel (or degenerate) directions
pub fn is_parallel(grid: &Grid, first: Segment, second: Segment) -> bool {
    let (a1, a2) = first.coords(grid);
    let (b1, b2) = second.coords(grid);
    direction_cross(a1, a2, b1, b2) == 0
}

/// Check whether two segments touch or cross
///
/// Parallel segments intersect only when collinear and overlapping, detected
/// by an endpoint of either segment lying on the other. Otherwise the
/// intersection point of the two carrier lines must fall inside both
/// segments' bounding boxes.
pub fn line_idx_intersects(grid: &Grid, first: Segment, second: Segment) -> bool {
    let (a1, a2) = first.coords(grid);
    let (b1, b2) = second.coords(grid);

    let denominator = direction_cross(a1, a2, b1, b2);
    if denominator == 0 {
        return point_on_segment(b1, a1, a2)
            || point_on_segment(b2, a1, a2)
            || point_on_segment(a1, b1, b2)
            || point_on_segment(a2, b1, b2);
    }

    let first_det = wide(a1.x) * wide(a2.y) - wide(a1.y) * wide(a2.x);
    let second_det = wide(b1.x) * wide(b2.y) - wide(b1.y) * wide(b2.x);
    let num_x = first_det * wide(b1.x - b2.x) - wide(a1.x - a2.x) * second_det;
    let num_y = first_det * wide(b1.y - b2.y) - wide(a1.y - a2.y) * second_det;

    let (num_x, num_y, den) = if denominator < 0 {
        (-num_x, -num_y, -denominator)
    } else {
        (num_x, num_y, denominator)
    };

    ratio_within(num_x, den, a1.x, a2.x)
        && ratio_within(num_y, den, a1.y, a2.y)
        && ratio_within(num_x, den, b1.x, b2.x)
        && ratio_within(num_y, den, b1.y, b2.y)
}
