//! Connected-component labelling.

use crate::PathFinder;
use crate::traits::Pather;
use stride_core::Point;

impl PathFinder {
    /// Label every cell in the grid with a connected-component ID.
    ///
    /// Two cells belong to the same component if there is a chain of
    /// neighbours (as defined by `pather`) between them. Cells the pather
    /// gives no neighbours (blocked tiles, say) end up in singleton
    /// components. After this call use [`cc_at`](Self::cc_at) to query a
    /// point's label: two open cells with different labels have no path
    /// between them.
    pub fn cc_map_all<P: Pather>(&mut self, pather: &P) {
        let len = self.width() as usize * self.height() as usize;
        // Reset labels.
        for v in self.cc_labels.iter_mut() {
            *v = -1;
        }

        let mut label: i32 = 0;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        for start in 0..len {
            if self.cc_labels[start] >= 0 {
                continue;
            }

            // Iterative DFS from `start`.
            self.cc_stack.clear();
            self.cc_stack.push(start);
            self.cc_labels[start] = label;

            while let Some(ci) = self.cc_stack.pop() {
                let cp = self.point(ci);
                nbuf.clear();
                pather.neighbors(cp, &mut nbuf);

                for i in 0..nbuf.len() {
                    if let Some(ni) = self.idx(nbuf[i]) {
                        if self.cc_labels[ni] < 0 {
                            self.cc_labels[ni] = label;
                            self.cc_stack.push(ni);
                        }
                    }
                }
            }

            label += 1;
        }

        self.nbuf = nbuf;
    }

    /// Query the connected-component label of a point.
    ///
    /// Returns `None` if the point is outside the grid or labelling has not
    /// run since the last [`resize`](Self::resize).
    pub fn cc_at(&self, p: Point) -> Option<usize> {
        let i = self.idx(p)?;
        let label = self.cc_labels[i];
        if label < 0 { None } else { Some(label as usize) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::findpath::TilePather;
    use stride_core::TileMap;

    #[test]
    fn disconnected_regions_get_distinct_labels() {
        let map = TileMap::parse(
            "
            ..#..
            ..#..
            ",
        )
        .unwrap();
        let mut pf = PathFinder::new(map.width(), map.height());
        pf.cc_map_all(&TilePather::new(&map));

        let left = pf.cc_at(Point::new(0, 0)).unwrap();
        let right = pf.cc_at(Point::new(4, 1)).unwrap();
        assert_ne!(left, right);
        assert_eq!(pf.cc_at(Point::new(1, 1)), Some(left));
        assert_eq!(pf.cc_at(Point::new(3, 0)), Some(right));
    }

    #[test]
    fn blocked_cells_are_singletons() {
        let map = TileMap::parse(".#.").unwrap();
        let mut pf = PathFinder::new(map.width(), map.height());
        pf.cc_map_all(&TilePather::new(&map));

        let wall = pf.cc_at(Point::new(1, 0)).unwrap();
        assert_ne!(pf.cc_at(Point::new(0, 0)), Some(wall));
        assert_ne!(pf.cc_at(Point::new(2, 0)), Some(wall));
    }

    #[test]
    fn labels_agree_with_reachability() {
        // The reference driver's 3x3 map: (2,0) and (0,2) are both open but
        // sit in different components, which is exactly when find_path
        // reports no path.
        let map = TileMap::from_bytes(3, 3, &[0, 0, 1, 0, 1, 1, 1, 0, 1]).unwrap();
        let mut pf = PathFinder::new(map.width(), map.height());
        pf.cc_map_all(&TilePather::new(&map));
        assert_ne!(
            pf.cc_at(Point::new(2, 0)),
            pf.cc_at(Point::new(0, 2))
        );
        assert_eq!(
            pf.cc_at(Point::new(2, 0)),
            pf.cc_at(Point::new(2, 2))
        );

        let mut out = [0i32; 9];
        assert_eq!(pf.find_path(&map, Point::new(2, 0), Point::new(0, 2), &mut out), -1);
        assert_eq!(pf.find_path(&map, Point::new(2, 0), Point::new(2, 2), &mut out), 2);
    }

    #[test]
    fn cc_at_before_labelling_is_none() {
        let pf = PathFinder::new(4, 4);
        assert_eq!(pf.cc_at(Point::new(1, 1)), None);
        assert_eq!(pf.cc_at(Point::new(9, 9)), None);
    }
}
