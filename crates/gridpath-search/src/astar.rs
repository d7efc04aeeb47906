use std::collections::BinaryHeap;

use gridpath_core::Point;
use log::{debug, trace};

use crate::PathFinder;
use crate::error::SearchError;
use crate::finder::{NO_PARENT, NodeRef, SearchStats};
use crate::traits::AstarPather;

impl PathFinder {
    /// Compute a path from `start` to `goal` using A*.
    ///
    /// Returns the full path (both endpoints included, start first),
    /// `Ok(None)` when the goal cannot be reached, or an error when either
    /// endpoint lies outside the range or is not passable.
    ///
    /// The goal is recognised as soon as it shows up among the neighbours of
    /// an expanded cell, and the search stops right there.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        start: Point,
        goal: Point,
    ) -> Result<Option<Vec<Point>>, SearchError> {
        let start_idx = self.checked_idx(pather, start)?;
        let goal_idx = self.checked_idx(pather, goal)?;

        self.stats = SearchStats::default();

        if start_idx == goal_idx {
            return Ok(Some(vec![start]));
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);

        let start_f = pather.estimate(start, goal);
        {
            let node = self.node_mut(start_idx);
            node.g = 0.0;
            node.best_f = start_f;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut seq = 0u64;
        open.push(NodeRef {
            idx: start_idx,
            f: start_f,
            seq,
        });
        self.stats.pushed = 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            let ci = current.idx;

            // Superseded entry for a coordinate that is already closed.
            if self.nodes[ci].closed {
                continue;
            }
            self.nodes[ci].closed = true;
            self.stats.expanded += 1;

            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);
            trace!("expand {current_point} g={current_g} f={}", current.f);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };

                if ni == goal_idx {
                    self.node_mut(ni).parent = ci;
                    break 'search true;
                }

                if self.node_mut(ni).closed || !pather.passable(np) {
                    continue;
                }

                let g = current_g + pather.cost(current_point, np);
                let f = g + pather.estimate(np, goal);

                let n = self.node_mut(ni);
                if f >= n.best_f {
                    continue;
                }
                n.best_f = f;
                n.g = g;
                n.parent = ci;

                seq += 1;
                open.push(NodeRef { idx: ni, f, seq });
                self.stats.pushed += 1;
            }
        };

        self.nbuf = nbuf;

        if !found {
            debug!(
                "no path from {start} to {goal} (expanded {}, pushed {})",
                self.stats.expanded, self.stats.pushed
            );
            return Ok(None);
        }

        // Reconstruct path.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();

        debug!(
            "path from {start} to {goal}: {} cells (expanded {}, pushed {})",
            path.len(),
            self.stats.expanded,
            self.stats.pushed
        );
        Ok(Some(path))
    }

    fn checked_idx<P: AstarPather>(&self, pather: &P, p: Point) -> Result<usize, SearchError> {
        let idx = self.idx(p).ok_or(SearchError::OutOfBounds {
            point: p,
            range: self.rng,
        })?;
        if !pather.passable(p) {
            return Err(SearchError::Blocked { point: p });
        }
        Ok(idx)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use gridpath_core::{Grid, Range, Tile};
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    use super::*;
    use crate::distance::chebyshev;

    fn search(grid: &Grid, start: Point, goal: Point) -> Option<Vec<Point>> {
        let mut pf = PathFinder::new(grid.range());
        pf.astar_path(grid, start, goal).unwrap()
    }

    /// Every cell in bounds, free, and one king's move from the next.
    fn assert_valid(grid: &Grid, path: &[Point], start: Point, goal: Point) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        for p in path {
            assert!(grid.is_free(*p), "{p} is not a free cell");
        }
        for w in path.windows(2) {
            assert!(w[0].is_adjacent_8(w[1]), "{} -> {} is not a move", w[0], w[1]);
        }
    }

    /// Cell count of a shortest path, found by breadth-first search.
    fn bfs_len(grid: &Grid, start: Point, goal: Point) -> Option<usize> {
        let mut dist = vec![usize::MAX; grid.range().len()];
        let n = grid.size() as usize;
        let at = |p: Point| p.x as usize * n + p.y as usize;
        let mut queue = VecDeque::from([start]);
        dist[at(start)] = 1;
        while let Some(p) = queue.pop_front() {
            if p == goal {
                return Some(dist[at(p)]);
            }
            for q in p.neighbors_8() {
                if grid.is_free(q) && dist[at(q)] == usize::MAX {
                    dist[at(q)] = dist[at(p)] + 1;
                    queue.push_back(q);
                }
            }
        }
        None
    }

    #[test]
    fn open_3x3_corner_to_corner() {
        let g = Grid::open(3).unwrap();
        let path = search(&g, Point::new(0, 0), Point::new(2, 2)).unwrap();
        assert_eq!(
            path,
            vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)]
        );
    }

    #[test]
    fn detours_around_center_obstacle() {
        let g = Grid::open(3).unwrap().with_obstacles([Point::new(1, 1)]);
        let start = Point::new(0, 0);
        let goal = Point::new(2, 2);
        let path = search(&g, start, goal).unwrap();
        assert_eq!(path.len(), 4);
        assert!(!path.contains(&Point::new(1, 1)));
        assert_valid(&g, &path, start, goal);
    }

    #[test]
    fn start_equals_goal_is_single_cell() {
        let g = Grid::open(1).unwrap();
        let p = Point::new(0, 0);
        assert_eq!(search(&g, p, p), Some(vec![p]));

        let g = Grid::open(5).unwrap();
        let p = Point::new(2, 3);
        assert_eq!(search(&g, p, p), Some(vec![p]));
    }

    #[test]
    fn enclosed_goal_reports_no_path() {
        let goal = Point::new(2, 2);
        let g = Grid::open(5).unwrap().with_obstacles(goal.neighbors_8());
        assert_eq!(search(&g, Point::new(0, 0), goal), None);
    }

    #[test]
    fn wall_splitting_grid_reports_no_path() {
        let wall = (0..4).map(|x| Point::new(x, 2));
        let g = Grid::open(4).unwrap().with_obstacles(wall);
        let mut pf = PathFinder::new(g.range());
        let res = pf.astar_path(&g, Point::new(0, 0), Point::new(3, 3)).unwrap();
        assert_eq!(res, None);
        // Everything left of the wall was expanded exactly once.
        assert_eq!(pf.stats().expanded, 8);
    }

    #[test]
    fn squeezes_through_diagonal_gap() {
        // Diagonal moves are allowed between two orthogonal obstacles.
        let g = Grid::open(2)
            .unwrap()
            .with_obstacles([Point::new(0, 1), Point::new(1, 0)]);
        let path = search(&g, Point::new(0, 0), Point::new(1, 1)).unwrap();
        assert_eq!(path, vec![Point::new(0, 0), Point::new(1, 1)]);
    }

    #[test]
    fn out_of_bounds_endpoint_is_an_error() {
        let g = Grid::open(3).unwrap();
        let mut pf = PathFinder::new(g.range());
        let err = pf
            .astar_path(&g, Point::new(0, 0), Point::new(3, 0))
            .unwrap_err();
        assert_eq!(
            err,
            SearchError::OutOfBounds {
                point: Point::new(3, 0),
                range: Range::square(3)
            }
        );
        assert!(matches!(
            pf.astar_path(&g, Point::new(-1, 0), Point::new(1, 1)),
            Err(SearchError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn blocked_endpoint_is_an_error() {
        let g = Grid::open(3).unwrap().with_obstacles([Point::new(2, 2)]);
        let mut pf = PathFinder::new(g.range());
        assert_eq!(
            pf.astar_path(&g, Point::new(0, 0), Point::new(2, 2)),
            Err(SearchError::Blocked {
                point: Point::new(2, 2)
            })
        );
        assert_eq!(
            pf.astar_path(&g, Point::new(2, 2), Point::new(0, 0)),
            Err(SearchError::Blocked {
                point: Point::new(2, 2)
            })
        );
    }

    #[test]
    fn finder_is_reusable_across_searches() {
        let walled = Grid::open(6)
            .unwrap()
            .with_obstacles((0..5).map(|y| Point::new(3, y)));
        let open = Grid::open(6).unwrap();
        let mut pf = PathFinder::new(open.range());

        let first = pf
            .astar_path(&walled, Point::new(0, 0), Point::new(5, 0))
            .unwrap()
            .unwrap();
        assert_valid(&walled, &first, Point::new(0, 0), Point::new(5, 0));

        // Leftover closed flags and parents from the walled search must not leak.
        let second = pf
            .astar_path(&open, Point::new(0, 0), Point::new(5, 0))
            .unwrap()
            .unwrap();
        assert_eq!(second.len(), 6);

        let again = pf
            .astar_path(&walled, Point::new(0, 0), Point::new(5, 0))
            .unwrap()
            .unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn open_grid_length_is_chebyshev_plus_one() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let n = rng.random_range(1..12);
            let g = Grid::open(n).unwrap();
            let a = Point::new(rng.random_range(0..n), rng.random_range(0..n));
            let b = Point::new(rng.random_range(0..n), rng.random_range(0..n));
            let path = search(&g, a, b).unwrap();
            assert_eq!(path.len() as i32, chebyshev(a, b) + 1, "{a} -> {b} on {n}x{n}");
            assert_valid(&g, &path, a, b);
        }
    }

    #[test]
    fn random_grids_agree_with_bfs_on_reachability() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..300 {
            let n = rng.random_range(2..10);
            let rows = (0..n)
                .map(|_| {
                    (0..n)
                        .map(|_| {
                            if rng.random_bool(0.3) {
                                Tile::Obstacle
                            } else {
                                Tile::Free
                            }
                        })
                        .collect()
                })
                .collect();
            let g = Grid::from_rows(rows).unwrap();
            let free: Vec<Point> = g
                .iter()
                .filter(|&(_, t)| t == Tile::Free)
                .map(|(p, _)| p)
                .collect();
            if free.len() < 2 {
                continue;
            }
            let a = free[rng.random_range(0..free.len())];
            let b = free[rng.random_range(0..free.len())];

            let shortest = bfs_len(&g, a, b);
            let mut pf = PathFinder::new(g.range());
            let found = pf.astar_path(&g, a, b).unwrap();
            match (found, shortest) {
                (Some(path), Some(len)) => {
                    assert_valid(&g, &path, a, b);
                    assert!(path.len() >= len);
                    // Same input, same answer.
                    assert_eq!(pf.astar_path(&g, a, b).unwrap(), Some(path));
                }
                (None, None) => {}
                (found, shortest) => {
                    panic!("{a} -> {b}: astar {found:?}, bfs {shortest:?}")
                }
            }
        }
    }
}
