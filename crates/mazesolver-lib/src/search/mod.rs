//! Search module for grid maze solving.
//!
//! This module provides:
//! - [`SearchVariant`] - Supported search variants (depth-first, A*)
//! - [`SearchConfig`] - Variant, heuristic and weight chosen by the caller
//! - [`SearchEngine`] - Tagged variant that runs one search
//! - [`Outcome`] - Result of a run: path or typed failure, plus statistics
//! - [`solve`] - Entry point that builds the graph and searches in one call
//!
//! # Example
//!
//! ```
//! use mazesolver_lib::{parse_maze, SearchConfig};
//!
//! let maze = parse_maze("maze", "# - #\n# - #\n# - #\n").unwrap();
//! let outcome = maze.solve(&SearchConfig::default());
//! assert_eq!(outcome.report.path_length, Some(3));
//! ```

mod engine;

pub use engine::SearchEngine;

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, SearchFailure};
use crate::grid::{Cell, CellKind, GridGraph};
use crate::heuristic::{Heuristic, Weight};
use crate::stats::{SearchReport, StatsCollector};

/// Supported search variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SearchVariant {
    /// Depth-first search (uninformed, not guaranteed shortest).
    DepthFirst,
    /// Weighted A* search (heuristic guided).
    #[default]
    AStar,
}

impl SearchVariant {
    pub const ALL: [SearchVariant; 2] = [SearchVariant::DepthFirst, SearchVariant::AStar];

    pub fn name(self) -> &'static str {
        match self {
            SearchVariant::DepthFirst => "depth-first",
            SearchVariant::AStar => "a-star",
        }
    }
}

impl fmt::Display for SearchVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchVariant {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "depth-first" | "dfs" => Ok(SearchVariant::DepthFirst),
            "a-star" | "astar" | "a*" => Ok(SearchVariant::AStar),
            _ => Err(Error::UnknownAlgorithm {
                name: value.to_string(),
            }),
        }
    }
}

/// Plain configuration values chosen by the caller for one run.
///
/// `heuristic` and `weight` only matter for [`SearchVariant::AStar`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchConfig {
    pub variant: SearchVariant,
    pub heuristic: Heuristic,
    pub weight: Weight,
}

impl SearchConfig {
    pub fn depth_first() -> Self {
        Self {
            variant: SearchVariant::DepthFirst,
            ..Self::default()
        }
    }

    pub fn a_star(heuristic: Heuristic, weight: Weight) -> Self {
        Self {
            variant: SearchVariant::AStar,
            heuristic,
            weight,
        }
    }

    /// Decode a configuration from JSON; absent fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn engine(&self) -> SearchEngine {
        match self.variant {
            SearchVariant::DepthFirst => SearchEngine::DepthFirst,
            SearchVariant::AStar => SearchEngine::WeightedAStar {
                heuristic: self.heuristic,
                weight: self.weight,
            },
        }
    }
}

/// How a search run ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    /// Path from start to goal, both included.
    Found { path: Vec<Cell> },
    Failed { failure: SearchFailure },
}

/// Immutable result of one search run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub engine: SearchEngine,
    pub start: Cell,
    pub goal: Cell,
    #[serde(flatten)]
    pub resolution: Resolution,
    /// Cells in the order they were expanded.
    pub explored: Vec<Cell>,
    pub report: SearchReport,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self.resolution, Resolution::Found { .. })
    }

    pub fn path(&self) -> Option<&[Cell]> {
        match &self.resolution {
            Resolution::Found { path } => Some(path),
            Resolution::Failed { .. } => None,
        }
    }

    pub fn failure(&self) -> Option<&SearchFailure> {
        match &self.resolution {
            Resolution::Found { .. } => None,
            Resolution::Failed { failure } => Some(failure),
        }
    }
}

/// Build a graph from `matrix` and run the configured search on it.
///
/// A malformed matrix is reported as a failed [`Outcome`] rather than an
/// error, so every call yields something the caller can report.
pub fn solve(matrix: &[Vec<CellKind>], start: Cell, goal: Cell, config: &SearchConfig) -> Outcome {
    let engine = config.engine();
    match GridGraph::new(matrix) {
        Ok(graph) => engine.search(&graph, start, goal),
        Err(failure) => Outcome {
            engine,
            start,
            goal,
            resolution: Resolution::Failed { failure },
            explored: Vec::new(),
            report: StatsCollector::start().fail(),
        },
    }
}
