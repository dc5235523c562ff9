use std::collections::BinaryHeap;

use stride_core::Point;

use crate::PathFinder;
use crate::pathfinder::FrontierRef;
use crate::traits::AstarPather;

impl PathFinder {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Every step costs 1. Returns the full path (including both endpoints)
    /// or `None` if the frontier empties before the target is reached.
    ///
    /// Ties between equal-priority frontier entries are broken arbitrarily;
    /// the path length is invariant under tie-breaking even though the exact
    /// cell sequence may differ between equally short paths.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        let start_idx = self.idx(from)?;
        let target_idx = self.idx(to)?;

        if start_idx == target_idx {
            return Some(vec![from]);
        }

        // Bump generation to lazily invalidate the whole arena.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let node = &mut self.nodes[start_idx];
            node.traveled = 0;
            node.priority = pather.estimate(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut frontier: BinaryHeap<FrontierRef> = BinaryHeap::new();
        frontier.push(FrontierRef {
            idx: start_idx,
            priority: self.nodes[start_idx].priority,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(entry) = frontier.pop() else {
                break 'search false;
            };

            let ci = entry.idx;

            // A reinserted cell leaves its older heap entries behind; skip
            // them here instead of doing a decrease-key.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == target_idx {
                break 'search true;
            }

            // Close the node: its traveled count is final from here on.
            self.nodes[ci].open = false;
            let current_traveled = self.nodes[ci].traveled;
            let current_point = self.point(ci);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = current_traveled + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Already discovered: skip closed cells and frontier
                    // entries that are at least as good.
                    if !n.open || tentative >= n.traveled {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.traveled = tentative;
                n.priority = tentative + pather.estimate(np, to);
                n.parent = ci;
                n.open = true;

                frontier.push(FrontierRef {
                    idx: ni,
                    priority: n.priority,
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            return None;
        }

        // Walk the predecessor chain back to the start, then reverse.
        let mut path = Vec::new();
        let mut ci = target_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }
}
