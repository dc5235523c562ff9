use stride_core::Point;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append the reachable neighbors of `p` into `buf`. The caller clears
    /// `buf` before calling. A blocked or otherwise unusable source cell
    /// must yield no neighbors.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with an admissible distance estimate, as required by A*.
///
/// Every step costs exactly 1, so the estimate must never exceed the true
/// remaining step count.
pub trait AstarPather: Pather {
    /// Heuristic estimate of the distance from `from` to `to`.
    fn estimate(&self, from: Point, to: Point) -> i32;
}
