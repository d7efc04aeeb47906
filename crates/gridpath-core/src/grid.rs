//! The obstacle [`Grid`]: an immutable square map of [`Tile`]s.

use thiserror::Error;

use crate::geom::{Point, Range};

/// State of a single map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// Traversable (`0` in map files).
    #[default]
    Free,
    /// Blocked (`1` in map files).
    Obstacle,
}

impl Tile {
    /// Decode a map file value. Only `0` and `1` are valid.
    pub const fn from_value(v: i64) -> Option<Tile> {
        match v {
            0 => Some(Tile::Free),
            1 => Some(Tile::Obstacle),
            _ => None,
        }
    }

    /// The map file value of this tile.
    pub const fn value(self) -> i64 {
        match self {
            Tile::Free => 0,
            Tile::Obstacle => 1,
        }
    }
}

/// Errors raised while assembling a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,
    #[error("grid row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// An N×N map of tiles, stored row-major. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Tile>,
    n: i32,
}

impl Grid {
    /// An `n`×`n` grid with every cell free.
    pub fn open(n: i32) -> Result<Self, GridError> {
        if n <= 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            cells: vec![Tile::Free; (n as usize) * (n as usize)],
            n,
        })
    }

    /// Build a grid from rows. Every row must have as many cells as there
    /// are rows.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        let n = rows.len();
        if n == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(n * n);
        for (row, tiles) in rows.into_iter().enumerate() {
            if tiles.len() != n {
                return Err(GridError::Ragged {
                    row,
                    expected: n,
                    found: tiles.len(),
                });
            }
            cells.extend(tiles);
        }
        Ok(Self {
            cells,
            n: n as i32,
        })
    }

    /// Same as `self` but with the listed points turned into obstacles.
    /// Points outside the grid are ignored.
    pub fn with_obstacles(mut self, points: impl IntoIterator<Item = Point>) -> Self {
        for p in points {
            if let Some(i) = self.index(p) {
                self.cells[i] = Tile::Obstacle;
            }
        }
        self
    }

    /// Side length N.
    #[inline]
    pub fn size(&self) -> i32 {
        self.n
    }

    /// The bounding range `[0, N)²`.
    #[inline]
    pub fn range(&self) -> Range {
        Range::square(self.n)
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.range().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.x as usize) * (self.n as usize) + (p.y as usize))
    }

    /// The tile at `p`, or `None` if `p` is out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is inside the grid and not an obstacle.
    #[inline]
    pub fn is_free(&self, p: Point) -> bool {
        self.at(p) == Some(Tile::Free)
    }

    /// Count how many cells hold `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&t| t == tile).count()
    }

    /// Iterate over `(Point, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.range().iter().zip(self.cells.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use Tile::{Free as F, Obstacle as O};

    #[test]
    fn from_rows_and_lookup() {
        let g = Grid::from_rows(vec![vec![F, O], vec![F, F]]).unwrap();
        assert_eq!(g.size(), 2);
        assert_eq!(g.at(Point::new(0, 1)), Some(O));
        assert_eq!(g.at(Point::new(1, 0)), Some(F));
        assert_eq!(g.at(Point::new(2, 0)), None);
        assert!(!g.is_free(Point::new(0, 1)));
        assert!(!g.is_free(Point::new(-1, 0)));
        assert_eq!(g.count(O), 1);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Grid::from_rows(vec![vec![F, F], vec![F]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn empty_grid_is_rejected() {
        assert_eq!(Grid::from_rows(Vec::new()), Err(GridError::Empty));
        assert_eq!(Grid::open(0), Err(GridError::Empty));
    }

    #[test]
    fn with_obstacles_ignores_outside_points() {
        let g = Grid::open(3)
            .unwrap()
            .with_obstacles([Point::new(1, 1), Point::new(9, 9)]);
        assert_eq!(g.count(O), 1);
        assert_eq!(g.at(Point::new(1, 1)), Some(O));
    }

    #[test]
    fn iter_is_row_major() {
        let g = Grid::open(2).unwrap().with_obstacles([Point::new(0, 1)]);
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 4);
        assert_eq!(items[1], (Point::new(0, 1), O));
        assert_eq!(items[2], (Point::new(1, 0), F));
    }

    #[test]
    fn tile_values() {
        assert_eq!(Tile::from_value(0), Some(F));
        assert_eq!(Tile::from_value(1), Some(O));
        assert_eq!(Tile::from_value(2), None);
        assert_eq!(Tile::from_value(-1), None);
        assert_eq!(O.value(), 1);
    }
}
