use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SearchFailure;

/// Cost of moving between two adjacent open cells.
pub const STEP_COST: u32 = 1;

/// A `(row, col)` coordinate into the maze grid.
///
/// Serialized as a two-element `[row, col]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether `other` shares an edge with this cell.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }

    fn step(self, direction: Direction) -> Option<Cell> {
        match direction {
            Direction::Up => self.row.checked_sub(1).map(|row| Cell::new(row, self.col)),
            Direction::Down => self.row.checked_add(1).map(|row| Cell::new(row, self.col)),
            Direction::Left => self.col.checked_sub(1).map(|col| Cell::new(self.row, col)),
            Direction::Right => self.col.checked_add(1).map(|col| Cell::new(self.row, col)),
        }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell::new(row, col)
    }
}

impl From<Cell> for (usize, usize) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Classification of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    Wall,
    Open,
}

impl CellKind {
    /// Parse the textual maze convention: `#` is a wall, `-` is open.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '#' => Some(CellKind::Wall),
            '-' => Some(CellKind::Open),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::Open => '-',
        }
    }
}

/// One of the four orthogonal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Default expansion order shared by every search variant.
    pub const DEFAULT_ORDER: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(value)
    }
}

/// Implicit 4-connected graph over the open cells of a rectangular grid.
///
/// The matrix is copied into a flat row-major buffer at construction and never
/// mutated afterwards, so a `GridGraph` can be shared freely between threads
/// running independent searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGraph {
    rows: usize,
    cols: usize,
    cells: Vec<CellKind>,
    order: [Direction; 4],
}

impl GridGraph {
    /// Build a graph from a row-major matrix of cell classifications.
    ///
    /// Fails with [`SearchFailure::MalformedGrid`] when the matrix is empty or
    /// its rows differ in length.
    pub fn new(matrix: &[Vec<CellKind>]) -> Result<Self, SearchFailure> {
        let Some(first) = matrix.first() else {
            return Err(SearchFailure::malformed("grid has no rows"));
        };
        let cols = first.len();
        if cols == 0 {
            return Err(SearchFailure::malformed("grid has no columns"));
        }
        if let Some((index, row)) = matrix
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != cols)
        {
            return Err(SearchFailure::malformed(format!(
                "row {index} has {} cells, expected {cols}",
                row.len()
            )));
        }

        Ok(Self {
            rows: matrix.len(),
            cols,
            cells: matrix.iter().flatten().copied().collect(),
            order: Direction::DEFAULT_ORDER,
        })
    }

    /// Replace the neighbour expansion order.
    ///
    /// The order must name each direction exactly once.
    pub fn with_order(mut self, order: [Direction; 4]) -> Result<Self, SearchFailure> {
        for (index, direction) in order.iter().enumerate() {
            if order[..index].contains(direction) {
                return Err(SearchFailure::malformed(format!(
                    "neighbour order repeats direction {direction}"
                )));
            }
        }
        self.order = order;
        Ok(self)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Neighbour expansion order used by [`GridGraph::neighbors`].
    pub fn order(&self) -> [Direction; 4] {
        self.order
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Classification of `cell`, or `None` when it lies outside the grid.
    pub fn kind(&self, cell: Cell) -> Option<CellKind> {
        self.in_bounds(cell)
            .then(|| self.cells[cell.row * self.cols + cell.col])
    }

    pub fn is_open(&self, cell: Cell) -> bool {
        self.kind(cell) == Some(CellKind::Open)
    }

    /// Number of open cells in the grid.
    pub fn open_cells(&self) -> usize {
        self.cells
            .iter()
            .filter(|kind| **kind == CellKind::Open)
            .count()
    }

    /// Open, in-bounds cells adjacent to `cell`, in the graph's fixed order.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        self.order
            .iter()
            .filter_map(|direction| cell.step(*direction))
            .filter(|next| self.is_open(*next))
            .collect()
    }

    /// Cost of the edge between two adjacent cells.
    pub fn cost(&self, from: Cell, to: Cell) -> u32 {
        debug_assert!(from.is_adjacent(&to), "{from} and {to} are not adjacent");
        STEP_COST
    }
}
