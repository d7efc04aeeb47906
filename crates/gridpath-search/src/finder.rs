use std::cmp::Ordering;

use gridpath_core::{Point, Range};

/// Counters describing the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Coordinates popped from the open set and closed.
    pub expanded: usize,
    /// Entries pushed onto the open set, stale ones included.
    pub pushed: usize,
}

// ---------------------------------------------------------------------------
// Per-coordinate bookkeeping
// ---------------------------------------------------------------------------

pub(crate) const NO_PARENT: usize = usize::MAX;

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) best_f: f64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) closed: bool,
}

impl Node {
    /// Forget whatever an earlier search left behind.
    #[inline]
    pub(crate) fn reset(&mut self, generation: u32) {
        *self = Node {
            generation,
            ..Node::default()
        };
    }
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0.0,
            best_f: f64::INFINITY,
            parent: NO_PARENT,
            generation: 0,
            closed: false,
        }
    }
}

/// Open-set entry, ordered so that `BinaryHeap` (a max-heap) pops the
/// smallest `f` first and, among equal `f`, the earliest push.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: f64,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Reusable A* search state for one grid rectangle.
///
/// The node arena is allocated once; each search bumps a generation counter
/// so nodes touched by earlier searches read as untouched. Every call
/// therefore starts from fresh state without reallocating.
pub struct PathFinder {
    pub(crate) rng: Range,
    pub(crate) cols: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) stats: SearchStats,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathFinder {
    /// Create a new `PathFinder` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            cols: rng.cols().max(0) as usize,
            nodes: vec![Node::default(); rng.len()],
            generation: 0,
            stats: SearchStats::default(),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Counters from the most recent call to
    /// [`astar_path`](PathFinder::astar_path).
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let row = (p.x - self.rng.min.x) as usize;
        let col = (p.y - self.rng.min.y) as usize;
        Some(row * self.cols + col)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx / self.cols) as i32 + self.rng.min.x;
        let y = (idx % self.cols) as i32 + self.rng.min.y;
        Point::new(x, y)
    }

    /// The node at `idx`, reset first if it belongs to an earlier search.
    #[inline]
    pub(crate) fn node_mut(&mut self, idx: usize) -> &mut Node {
        let generation = self.generation;
        let node = &mut self.nodes[idx];
        if node.generation != generation {
            node.reset(generation);
        }
        node
    }
}
