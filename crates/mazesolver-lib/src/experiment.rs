//! Heuristic and neighbour-order experiments on a single maze.
//!
//! An experiment runs every heuristic at every requested weight, then
//! depth-first search under several neighbour orders. Runs are independent and
//! executed one after another; nothing is aggregated across them.

use tracing::info;

use crate::error::SearchFailure;
use crate::grid::Direction;
use crate::heuristic::{Heuristic, Weight};
use crate::maze::Maze;
use crate::output::{ResultsDocument, ResultsSection, RunSummary};
use crate::search::{Outcome, SearchConfig, SearchEngine};

/// Weight used for the "weighted" run when the caller does not pick any.
pub const DEFAULT_EXPERIMENT_WEIGHT: f64 = 2.7;

/// Neighbour orders compared for depth-first search, default order first.
pub const DEPTH_FIRST_ORDERS: [[Direction; 4]; 5] = [
    Direction::DEFAULT_ORDER,
    [Direction::Up, Direction::Left, Direction::Right, Direction::Down],
    [Direction::Up, Direction::Left, Direction::Down, Direction::Right],
    [Direction::Up, Direction::Right, Direction::Down, Direction::Left],
    [Direction::Up, Direction::Down, Direction::Right, Direction::Left],
];

/// What an experiment should run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentPlan {
    pub heuristics: Vec<Heuristic>,
    pub weights: Vec<Weight>,
    pub depth_first_orders: Vec<[Direction; 4]>,
}

impl Default for ExperimentPlan {
    fn default() -> Self {
        Self {
            heuristics: Heuristic::ALL.to_vec(),
            weights: vec![
                Weight::ONE,
                Weight::new(DEFAULT_EXPERIMENT_WEIGHT).unwrap_or(Weight::ONE),
            ],
            depth_first_orders: DEPTH_FIRST_ORDERS.to_vec(),
        }
    }
}

impl ExperimentPlan {
    /// Replace the weights, keeping the rest of the plan.
    pub fn with_weights(mut self, weights: Vec<Weight>) -> Self {
        self.weights = weights;
        self
    }
}

/// One run of an experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentRun {
    pub order: [Direction; 4],
    pub outcome: Outcome,
}

impl ExperimentRun {
    pub fn summary(&self, maze: &str) -> RunSummary {
        let summary = RunSummary::from_outcome(maze, &self.outcome);
        match self.outcome.engine {
            SearchEngine::DepthFirst => {
                summary.with_note(format!("neighbour order {}", format_order(&self.order)))
            }
            SearchEngine::WeightedAStar { .. } => summary,
        }
    }
}

/// Run every configuration of `plan` against `maze`.
///
/// Fails only when the maze itself does not form a valid grid.
pub fn run_experiment(
    maze: &Maze,
    plan: &ExperimentPlan,
) -> Result<Vec<ExperimentRun>, SearchFailure> {
    let graph = maze.graph()?;
    let mut runs = Vec::new();

    for weight in &plan.weights {
        for heuristic in &plan.heuristics {
            let engine = SearchConfig::a_star(*heuristic, *weight).engine();
            runs.push(ExperimentRun {
                order: graph.order(),
                outcome: engine.search(&graph, maze.start, maze.goal),
            });
        }
    }

    for order in &plan.depth_first_orders {
        let ordered = graph.clone().with_order(*order)?;
        runs.push(ExperimentRun {
            order: *order,
            outcome: SearchEngine::DepthFirst.search(&ordered, maze.start, maze.goal),
        });
    }

    info!(maze = %maze.name, runs = runs.len(), "experiment finished");
    Ok(runs)
}

/// Arrange experiment runs into a results document.
pub fn experiment_document(maze: &Maze, runs: &[ExperimentRun]) -> ResultsDocument {
    let mut a_star = ResultsSection::new("A* HEURISTIC EXPERIMENT");
    let mut depth_first = ResultsSection::new("DEPTH FIRST NEIGHBOUR ORDER EXPERIMENT");
    for run in runs {
        let summary = run.summary(&maze.name);
        match run.outcome.engine {
            SearchEngine::DepthFirst => depth_first.push(summary),
            SearchEngine::WeightedAStar { .. } => a_star.push(summary),
        }
    }
    ResultsDocument::new(vec![a_star, depth_first])
}

fn format_order(order: &[Direction; 4]) -> String {
    order
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
