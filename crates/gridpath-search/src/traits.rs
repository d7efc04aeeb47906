use gridpath_core::{Grid, Point};

use crate::distance::euclidean;

/// Minimal pathfinding interface: neighbour enumeration and passability.
pub trait Pather {
    /// Append the candidate moves from `p` into `buf`. The caller clears
    /// `buf` before calling. Candidates may include blocked cells; the
    /// search filters them through [`passable`](Pather::passable).
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Whether a path may step onto `p`.
    fn passable(&self, p: Point) -> bool;
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> f64;
}

/// Full A* pather with a heuristic estimate of the remaining cost.
pub trait AstarPather: WeightedPather {
    /// Estimate of the cost from `from` to `to`.
    fn estimate(&self, from: Point, to: Point) -> f64;
}

// ---------------------------------------------------------------------------
// Obstacle grids: 8-directional, uniform step cost, Euclidean estimate
// ---------------------------------------------------------------------------

impl Pather for Grid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_8().into_iter().filter(|&n| self.contains(n)));
    }

    fn passable(&self, p: Point) -> bool {
        self.is_free(p)
    }
}

impl WeightedPather for Grid {
    /// Diagonal steps cost the same as orthogonal ones.
    fn cost(&self, _from: Point, _to: Point) -> f64 {
        1.0
    }
}

impl AstarPather for Grid {
    fn estimate(&self, from: Point, to: Point) -> f64 {
        euclidean(from, to)
    }
}
