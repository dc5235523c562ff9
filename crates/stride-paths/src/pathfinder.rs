use stride_core::Point;

/// A position with an associated cost, returned from BFS map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

// ---------------------------------------------------------------------------
// Internal node arena for the A* search
// ---------------------------------------------------------------------------

/// One search node per cell. The predecessor is an index into the same
/// arena, never a pointer, so the arena may grow freely.
#[derive(Clone)]
pub(crate) struct Node {
    /// Exact steps traveled from the start (g-cost).
    pub(crate) traveled: i32,
    /// Priority: traveled + heuristic estimate (f-cost).
    pub(crate) priority: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    /// True while the node sits on the frontier; false once finalized.
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            traveled: 0,
            priority: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node arena, ordered by priority for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct FrontierRef {
    pub(crate) idx: usize,
    pub(crate) priority: i32,
}

impl Ord for FrontierRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first.
        other.priority.cmp(&self.priority)
    }
}

impl PartialOrd for FrontierRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel value meaning "unreachable" in BFS maps.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Central coordinator for pathfinding on a width × height grid.
///
/// `PathFinder` owns all internal scratch state (node arena, BFS map,
/// component labels, neighbor buffer) so that repeated queries incur no
/// allocations after the first use. It holds nothing shared: every query
/// runs against caller-supplied map data threaded in explicitly, so
/// independent instances are safe to use from independent threads.
pub struct PathFinder {
    width: i32,
    height: i32,
    // A* arena
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // BFS caches
    pub(crate) bfs_map: Vec<i32>,
    pub(crate) bfs_results: Vec<PathNode>,
    // CC caches
    pub(crate) cc_labels: Vec<i32>,
    pub(crate) cc_stack: Vec<usize>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathFinder {
    /// Create a new `PathFinder` for a grid of the given dimensions.
    ///
    /// Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        let len = w as usize * h as usize;
        Self {
            width: w,
            height: h,
            nodes: vec![Node::default(); len],
            generation: 0,
            bfs_map: vec![UNREACHABLE; len],
            bfs_results: Vec::new(),
            cc_labels: vec![-1; len],
            cc_stack: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Change the grid dimensions, reallocating caches only when needed.
    ///
    /// If the new size fits within existing capacity, caches are kept and
    /// the generation counter is bumped so stale arena entries are ignored.
    /// Otherwise everything is reallocated.
    pub fn resize(&mut self, width: i32, height: i32) {
        let w = width.max(0);
        let h = height.max(0);
        let new_len = w as usize * h as usize;
        let capacity = self.nodes.len();
        self.width = w;
        self.height = h;

        if new_len <= capacity {
            self.generation = self.generation.wrapping_add(1);
            self.bfs_results.clear();
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;

        self.bfs_map.clear();
        self.bfs_map.resize(new_len, UNREACHABLE);
        self.bfs_results.clear();

        self.cc_labels.clear();
        self.cc_labels.resize(new_len, -1);
        self.cc_stack.clear();
    }

    /// Grid width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.x >= self.width || p.y < 0 || p.y >= self.height {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathFinder {
    /// Only the dimensions are serialized; caches are rebuilt on load.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.width, self.height).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathFinder {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (width, height) = <(i32, i32)>::deserialize(deserializer)?;
        Ok(PathFinder::new(width, height))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pathnode_round_trip() {
        let node = PathNode {
            pos: Point::new(3, 7),
            cost: 42,
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: PathNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }

    #[test]
    fn pathfinder_round_trip() {
        let pf = PathFinder::new(12, 8);
        let json = serde_json::to_string(&pf).unwrap();
        let back: PathFinder = serde_json::from_str(&json).unwrap();
        assert_eq!(back.width(), 12);
        assert_eq!(back.height(), 8);
        // Caches are freshly initialized (not serialized).
        assert_eq!(back.generation, 0);
        assert_eq!(back.bfs_map.len(), 96);
    }
}
