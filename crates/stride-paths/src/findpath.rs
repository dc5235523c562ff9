//! Buffer-writing path queries over [`TileMap`] snapshots.
//!
//! This module carries the caller-facing query contract: paths are written
//! into a caller-owned `i32` buffer as linear cell indices, and the return
//! value is the true step count, `-1` meaning no path.

use stride_core::{Point, TileMap};

use crate::PathFinder;
use crate::distance::manhattan;
use crate::traits::{AstarPather, Pather};

/// Adapts a [`TileMap`] to the pathfinding traits: cardinal movement over
/// open tiles with a Manhattan estimate.
pub struct TilePather<'a> {
    map: &'a TileMap,
}

impl<'a> TilePather<'a> {
    /// Create a pather over `map`.
    pub fn new(map: &'a TileMap) -> Self {
        Self { map }
    }
}

impl Pather for TilePather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        if !self.map.is_open(p) {
            return;
        }
        for n in p.neighbors_4() {
            if self.map.is_open(n) {
                buf.push(n);
            }
        }
    }
}

impl AstarPather for TilePather<'_> {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}

impl PathFinder {
    /// Find the minimum-step orthogonal path from `start` to `target` on
    /// `map` and write it into `out` as linear cell indices
    /// (`x + y * width`), start cell excluded.
    ///
    /// Returns the number of steps in the path, or `-1` if no path exists
    /// or either endpoint is out of bounds or blocked. On failure `out` is
    /// left untouched.
    ///
    /// When `start == target` the single cell index is written to `out[0]`
    /// (if there is room) and the step count is 0.
    ///
    /// When the path is longer than `out`, only the final `out.len()` steps
    /// nearest the target are written, filling the buffer from index 0; the
    /// return value is still the untruncated step count. A caller with a
    /// small buffer therefore receives the moves closest to the goal, and
    /// one needing the whole path must size the buffer to the returned
    /// count and query again.
    pub fn find_path(
        &mut self,
        map: &TileMap,
        start: Point,
        target: Point,
        out: &mut [i32],
    ) -> i32 {
        if !map.is_open(start) || !map.is_open(target) {
            return -1;
        }
        if self.width() != map.width() || self.height() != map.height() {
            self.resize(map.width(), map.height());
        }

        if start == target {
            if let Some(slot) = out.first_mut() {
                *slot = start.x + start.y * map.width();
            }
            return 0;
        }

        let pather = TilePather::new(map);
        let Some(path) = self.astar_path(&pather, start, target) else {
            return -1;
        };

        let steps = path.len() - 1;
        let skip = steps.saturating_sub(out.len());
        for (slot, p) in out.iter_mut().zip(path[1 + skip..].iter()) {
            *slot = p.x + p.y * map.width();
        }
        steps as i32
    }
}

/// One-shot convenience wrapper around [`PathFinder::find_path`].
///
/// Allocates a fresh finder per call; callers issuing repeated queries
/// should hold a [`PathFinder`] and reuse it.
pub fn find_path(map: &TileMap, start: Point, target: Point, out: &mut [i32]) -> i32 {
    let mut finder = PathFinder::new(map.width(), map.height());
    finder.find_path(map, start, target, out)
}
