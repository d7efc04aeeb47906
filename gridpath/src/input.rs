//! Map file parsing.
//!
//! ```text
//! N
//! start_x start_y
//! goal_x goal_y
//! N rows of N space-separated cells, 0 = free, 1 = obstacle
//! ```

use std::str::FromStr;

use gridpath_core::{Grid, Point, Tile};

use crate::error::InputError;

/// A parsed search job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub grid: Grid,
    pub start: Point,
    pub goal: Point,
}

struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
    last: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.lines().enumerate(),
            last: 0,
        }
    }

    /// The next line and its 1-based number.
    fn advance(&mut self, what: &'static str) -> Result<(usize, &'a str), InputError> {
        match self.inner.next() {
            Some((i, line)) => {
                self.last = i + 1;
                Ok((i + 1, line))
            }
            None => Err(InputError::MissingLine {
                line: self.last + 1,
                what,
            }),
        }
    }
}

fn integers<T: FromStr>(line: usize, text: &str) -> Result<Vec<T>, InputError> {
    text.split_whitespace()
        .map(|tok| {
            tok.parse().map_err(|_| InputError::NotAnInteger {
                line,
                token: tok.to_string(),
            })
        })
        .collect()
}

fn exactly<T: FromStr>(line: usize, text: &str, n: usize) -> Result<Vec<T>, InputError> {
    let v = integers(line, text)?;
    if v.len() != n {
        return Err(InputError::WrongCount {
            line,
            expected: n,
            found: v.len(),
        });
    }
    Ok(v)
}

fn point(lines: &mut Lines<'_>, what: &'static str) -> Result<Point, InputError> {
    let (line, text) = lines.advance(what)?;
    let v: Vec<i32> = exactly(line, text, 2)?;
    Ok(Point::new(v[0], v[1]))
}

/// Parse a map file. Blank lines after the grid are ignored; anything else
/// there is an error.
pub fn parse_problem(text: &str) -> Result<Problem, InputError> {
    let mut lines = Lines::new(text);

    let (line, header) = lines.advance("grid size")?;
    let size: i64 = exactly(line, header, 1)?[0];
    if size <= 0 || size > i64::from(i32::MAX) {
        return Err(InputError::BadSize { line, size });
    }
    let n = size as usize;

    let start = point(&mut lines, "start coordinates")?;
    let goal = point(&mut lines, "goal coordinates")?;

    let mut rows = Vec::new();
    while rows.len() < n {
        let (line, text) = lines.advance("grid row")?;
        let values: Vec<i64> = exactly(line, text, n)?;
        let row = values
            .into_iter()
            .map(|value| Tile::from_value(value).ok_or(InputError::BadCell { line, value }))
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }

    while let Ok((line, text)) = lines.advance("") {
        if !text.trim().is_empty() {
            return Err(InputError::TrailingContent { line });
        }
    }

    Ok(Problem {
        grid: Grid::from_rows(rows)?,
        start,
        goal,
    })
}
