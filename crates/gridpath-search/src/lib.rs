//! A* shortest-path search on square obstacle grids.
//!
//! Movement is 8-directional with a uniform step cost of 1 (diagonals are
//! not charged extra), and the heuristic is the Euclidean distance to the
//! goal. The search runs through [`PathFinder`], which owns the node arena
//! and reuses it between queries.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | candidate moves, passability |
//! | [`WeightedPather`] : [`Pather`] | step cost |
//! | [`AstarPather`] : [`WeightedPather`] | remaining-cost estimate |
//!
//! [`gridpath_core::Grid`] implements all three.

mod astar;
mod distance;
mod error;
mod finder;
mod traits;

pub use distance::{chebyshev, euclidean};
pub use error::SearchError;
pub use finder::{PathFinder, SearchStats};
pub use traits::{AstarPather, Pather, WeightedPather};
