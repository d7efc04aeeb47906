//! gridpath — find a shortest 8-directional path across an obstacle grid.
//!
//! Reads a map file, runs A* from the start to the goal cell and writes
//! either the path with an annotated map or the `-1` failure marker.

pub mod error;
pub mod input;
pub mod render;

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use gridpath_search::PathFinder;
use log::{info, warn};

pub use error::{AppError, InputError, Result};
pub use input::{Problem, parse_problem};
pub use render::{MapStyle, NO_PATH, render_failure, render_success};

/// Command-line arguments.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Map file to read
    pub input: PathBuf,

    /// Result file to write
    pub output: PathBuf,
}

/// What a successful run wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A path with `length` cells, endpoints included.
    Found { length: usize },
    /// The goal is unreachable; the failure marker was written.
    NoPath,
}

/// Search a parsed problem and render the result file contents.
pub fn solve(problem: &Problem, style: &MapStyle) -> Result<(Outcome, String)> {
    let mut finder = PathFinder::new(problem.grid.range());
    let found = finder.astar_path(&problem.grid, problem.start, problem.goal)?;
    let stats = finder.stats();
    Ok(match found {
        Some(path) => {
            info!(
                "path {} -> {}: {} cells, {} expanded",
                problem.start,
                problem.goal,
                path.len(),
                stats.expanded
            );
            let text = render_success(&problem.grid, &path, style);
            (Outcome::Found { length: path.len() }, text)
        }
        None => {
            warn!(
                "no path {} -> {} after expanding {} cells",
                problem.start, problem.goal, stats.expanded
            );
            (Outcome::NoPath, render_failure())
        }
    })
}

/// Read `args.input`, search, and write `args.output`.
///
/// Nothing is written when the input is malformed or the endpoints are
/// invalid.
pub fn run(args: &Args) -> Result<Outcome> {
    let text = fs::read_to_string(&args.input).map_err(|source| AppError::Read {
        path: args.input.clone(),
        source,
    })?;
    let problem = parse_problem(&text)?;
    info!(
        "loaded {n}x{n} grid from {}",
        args.input.display(),
        n = problem.grid.size()
    );

    let (outcome, rendered) = solve(&problem, &MapStyle::default())?;

    fs::write(&args.output, rendered).map_err(|source| AppError::Write {
        path: args.output.clone(),
        source,
    })?;
    Ok(outcome)
}
