//! Maze solver library entry points.
//!
//! This crate loads `#`/`-` text mazes, turns them into an implicit grid
//! graph, and runs depth-first or weighted A* search over it while recording
//! search statistics. Higher-level consumers (the CLI) should only depend on
//! the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod experiment;
pub mod frontier;
pub mod grid;
pub mod heuristic;
pub mod maze;
pub mod output;
pub mod search;
pub mod stats;

pub use error::{EndpointDefect, Error, Result, SearchFailure};
pub use experiment::{experiment_document, run_experiment, ExperimentPlan, ExperimentRun};
pub use frontier::{Frontier, PriorityFrontier, SearchNode, StackFrontier};
pub use grid::{Cell, CellKind, Direction, GridGraph, STEP_COST};
pub use heuristic::{Heuristic, Weight};
pub use maze::{load_maze, parse_maze, Maze};
pub use output::{algorithm_label, ResultsDocument, ResultsSection, RunSummary};
pub use search::{solve, Outcome, Resolution, SearchConfig, SearchEngine, SearchVariant};
pub use stats::{SearchReport, StatsCollector};
