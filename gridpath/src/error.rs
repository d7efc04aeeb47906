//! Error types for the gridpath tool.

use std::path::PathBuf;

use gridpath_core::GridError;
use gridpath_search::SearchError;
use thiserror::Error;

/// A malformed map file. Line numbers are 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("line {line}: missing {what}")]
    MissingLine { line: usize, what: &'static str },

    #[error("line {line}: expected an integer, found {token:?}")]
    NotAnInteger { line: usize, token: String },

    #[error("line {line}: expected {expected} values, found {found}")]
    WrongCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: grid size must be positive, got {size}")]
    BadSize { line: usize, size: i64 },

    #[error("line {line}: cell value {value} is neither 0 nor 1")]
    BadCell { line: usize, value: i64 },

    #[error("line {line}: unexpected content after the grid")]
    TrailingContent { line: usize },

    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),
}

/// Everything that stops the tool before it can write a result.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed input: {0}")]
    Input(#[from] InputError),

    #[error("invalid endpoints: {0}")]
    Config(#[from] SearchError),
}

pub type Result<T> = std::result::Result<T, AppError>;
