use gridpath_core::{Point, Range};
use thiserror::Error;

/// Caller errors detected before a search starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("{point} lies outside the grid {range}")]
    OutOfBounds { point: Point, range: Range },
    #[error("{point} is an obstacle")]
    Blocked { point: Point },
}
