use stride_core::Point;

/// Manhattan (L1) distance between two points.
///
/// This is the A* heuristic for 4-directional movement: it never
/// overestimates the true step count on an unweighted grid.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
