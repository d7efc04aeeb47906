//! **gridpath-core** — geometry and obstacle maps shared by the gridpath
//! crates.
//!
//! This crate provides the coordinate types ([`Point`], [`Range`]) and the
//! immutable square obstacle map ([`Grid`]) that searches run on.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range};
pub use grid::{Grid, GridError, Tile};
