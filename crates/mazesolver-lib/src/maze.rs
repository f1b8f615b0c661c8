//! Loader for the textual maze format.
//!
//! Each non-blank line is one row; every non-whitespace character on it is a
//! cell, `#` for a wall and `-` for an open path. Cells are usually separated
//! by single spaces but unseparated rows are accepted too. The start is the
//! first open cell of the top row and the goal the first open cell of the
//! bottom row.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result, SearchFailure};
use crate::grid::{Cell, CellKind, GridGraph};
use crate::search::{solve, Outcome, SearchConfig};

/// A parsed maze with its derived endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub name: String,
    pub cells: Vec<Vec<CellKind>>,
    pub start: Cell,
    pub goal: Cell,
}

impl Maze {
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Build the search graph for this maze.
    pub fn graph(&self) -> std::result::Result<GridGraph, SearchFailure> {
        GridGraph::new(&self.cells)
    }

    /// Run one search from the maze's start to its goal.
    pub fn solve(&self, config: &SearchConfig) -> Outcome {
        solve(&self.cells, self.start, self.goal, config)
    }
}

/// Parse maze text into a [`Maze`] called `name`.
pub fn parse_maze(name: impl Into<String>, text: &str) -> Result<Maze> {
    let mut cells = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .chars()
            .filter(|symbol| !symbol.is_whitespace())
            .map(|symbol| {
                CellKind::from_symbol(symbol).ok_or_else(|| Error::InvalidMaze {
                    line: index + 1,
                    reason: format!("unexpected character '{symbol}'"),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        cells.push(row);
    }

    let (Some(first), Some(last)) = (cells.first(), cells.last()) else {
        return Err(Error::EmptyMaze);
    };
    let start = first_open(first)
        .map(|col| Cell::new(0, col))
        .ok_or(Error::MissingStart)?;
    let goal = first_open(last)
        .map(|col| Cell::new(cells.len() - 1, col))
        .ok_or(Error::MissingGoal)?;

    Ok(Maze {
        name: name.into(),
        cells,
        start,
        goal,
    })
}

/// Read and parse a maze file, naming the maze after the file stem.
pub fn load_maze(path: &Path) -> Result<Maze> {
    if !path.is_file() {
        return Err(Error::MazeNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path)?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let maze = parse_maze(name, &text)?;
    debug!(
        path = %path.display(),
        rows = maze.rows(),
        cols = maze.cols(),
        "loaded maze"
    );
    Ok(maze)
}

fn first_open(row: &[CellKind]) -> Option<usize> {
    row.iter().position(|kind| *kind == CellKind::Open)
}
