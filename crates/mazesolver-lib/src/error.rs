use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::grid::Cell;

/// Convenient result alias for the maze solver library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// These cover loading and configuration problems. Failures of an individual
/// search are reported as [`SearchFailure`] values inside an
/// [`Outcome`](crate::Outcome) instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Maze file could not be located at the given path.
    #[error("maze file not found at {path}")]
    MazeNotFound { path: PathBuf },

    /// Raised when the maze text contains something other than walls and paths.
    #[error("invalid maze input on line {line}: {reason}")]
    InvalidMaze { line: usize, reason: String },

    /// Raised when the maze text contains no cells at all.
    #[error("maze input contains no cells")]
    EmptyMaze,

    /// Raised when no open cell exists on the top row to start from.
    #[error("no open cell on the first row to use as the start")]
    MissingStart,

    /// Raised when no open cell exists on the bottom row to finish on.
    #[error("no valid goal was found on the last row")]
    MissingGoal,

    /// Raised when a heuristic weight is not a positive finite number.
    #[error("heuristic weight must be a positive finite number, got {value}")]
    InvalidWeight { value: f64 },

    /// Raised when heuristic weight text does not parse as a number.
    #[error("heuristic weight '{input}' is not a number")]
    UnparsableWeight { input: String },

    /// Raised when a heuristic name is not recognised.
    #[error("unknown heuristic '{name}'; expected one of: manhattan, euclidean, chebyshev, zero")]
    UnknownHeuristic { name: String },

    /// Raised when a search algorithm name is not recognised.
    #[error("unknown search algorithm '{name}'; expected one of: depth-first, a-star")]
    UnknownAlgorithm { name: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Raised when a search configuration document cannot be decoded.
    #[error("invalid search configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why an endpoint was rejected before searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointDefect {
    OutOfBounds,
    Wall,
}

impl fmt::Display for EndpointDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointDefect::OutOfBounds => f.write_str("outside the grid"),
            EndpointDefect::Wall => f.write_str("on a wall"),
        }
    }
}

/// Typed reason a search run produced no path.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchFailure {
    /// Structural grid defect (empty grid, ragged rows, bad neighbour order).
    #[error("malformed grid: {reason}")]
    MalformedGrid { reason: String },

    /// Start or goal is out of bounds or on a wall.
    #[error("invalid endpoint {cell}: cell is {defect}")]
    InvalidEndpoint { cell: Cell, defect: EndpointDefect },

    /// Frontier exhausted without reaching the goal.
    #[error("no path from {start} to {goal}")]
    Unreachable { start: Cell, goal: Cell },
}

impl SearchFailure {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        SearchFailure::MalformedGrid {
            reason: reason.into(),
        }
    }
}
