use std::fmt;

use thiserror::Error;

use super::cell::Cell;

/// Which end of a search a [PathError::OutOfBounds] refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
        }
    }
}

/// Errors returned by grid construction and path searches.
///
/// Failing to find a path is not an error; searches report that through
/// an empty path instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("{endpoint} cell {cell} is outside the {width}x{height} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        cell: Cell,
        width: usize,
        height: usize,
    },

    #[error("cell {cell} is outside the {width}x{height} grid")]
    CellOutOfBounds {
        cell: Cell,
        width: usize,
        height: usize,
    },

    #[error("grid row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("a {width}x{height} grid is too large; each dimension is limited to i32::MAX")]
    GridTooLarge { width: usize, height: usize },

    #[error("grid data has {found} cells, expected {expected}")]
    CellCountMismatch { expected: usize, found: usize },

    #[error("unrecognized grid symbol {found:?} at row {row}, column {column}")]
    InvalidCharacter {
        row: usize,
        column: usize,
        found: char,
    },
}

pub type Result<T> = std::result::Result<T, PathError>;
