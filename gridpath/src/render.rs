//! Result file rendering.

use std::fmt::Write;

use gridpath_core::{Grid, Point, Tile};

/// Literal written in place of a path when the goal is unreachable.
pub const NO_PATH: &str = "-1";

/// Marker characters for the rendered map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapStyle {
    pub background: char,
    pub obstacle: char,
    pub path: char,
    pub start: char,
    pub goal: char,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            background: '-',
            obstacle: 'o',
            path: 'x',
            start: 'S',
            goal: 'G',
        }
    }
}

/// Render a found path: its length, the coordinate list, then the map.
///
/// Every coordinate and every map symbol is followed by a single space.
/// Start and goal markers take precedence over the path marker.
pub fn render_success(grid: &Grid, path: &[Point], style: &MapStyle) -> String {
    let n = grid.size() as usize;
    let mut map: Vec<char> = grid
        .iter()
        .map(|(_, tile)| match tile {
            Tile::Free => style.background,
            Tile::Obstacle => style.obstacle,
        })
        .collect();
    let mut mark = |p: Point, c: char| {
        if grid.contains(p) {
            map[p.x as usize * n + p.y as usize] = c;
        }
    };
    for &p in path {
        mark(p, style.path);
    }
    if let (Some(&start), Some(&goal)) = (path.first(), path.last()) {
        mark(start, style.start);
        mark(goal, style.goal);
    }

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", path.len());
    for p in path {
        let _ = write!(out, "{p} ");
    }
    out.push('\n');
    for row in map.chunks(n) {
        for c in row {
            out.push(*c);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

/// Render the unreachable-goal marker.
pub fn render_failure() -> String {
    NO_PATH.to_string()
}
