//! Traversal skeleton shared by every search variant.
//!
//! [`SearchEngine`] picks the frontier and scoring rule; [`traverse`] runs the
//! common pop/expand/push loop over them. Parent links live in a flat
//! `HashMap<Cell, Cell>` and are fixed when a cell is first expanded.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{EndpointDefect, SearchFailure};
use crate::frontier::{Frontier, PriorityFrontier, SearchNode, StackFrontier};
use crate::grid::{Cell, GridGraph};
use crate::heuristic::{Heuristic, Weight};
use crate::stats::StatsCollector;

use super::{Outcome, Resolution};

/// Search variant together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "variant", rename_all = "kebab-case")]
pub enum SearchEngine {
    /// Stack-driven search; returns the first path found.
    DepthFirst,
    /// A* with `f = g + weight * h`. Only optimal for weight 1.0 and an
    /// admissible heuristic.
    WeightedAStar { heuristic: Heuristic, weight: Weight },
}

impl SearchEngine {
    /// Standard A* with the given heuristic and weight 1.0.
    pub fn a_star(heuristic: Heuristic) -> Self {
        SearchEngine::WeightedAStar {
            heuristic,
            weight: Weight::ONE,
        }
    }

    /// Run one search from `start` to `goal`.
    ///
    /// Always returns an [`Outcome`]; invalid endpoints and exhausted
    /// frontiers are reported as failures inside it.
    pub fn search(&self, graph: &GridGraph, start: Cell, goal: Cell) -> Outcome {
        match *self {
            SearchEngine::DepthFirst => traverse(
                *self,
                graph,
                start,
                goal,
                StackFrontier::new(),
                |_, _| 0.0,
                false,
            ),
            SearchEngine::WeightedAStar { heuristic, weight } => traverse(
                *self,
                graph,
                start,
                goal,
                PriorityFrontier::new(),
                move |cell, g| f64::from(g) + weight.get() * heuristic.estimate(cell, goal),
                true,
            ),
        }
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchEngine::DepthFirst => f.write_str("depth-first"),
            SearchEngine::WeightedAStar { heuristic, weight } => {
                write!(f, "a-star({heuristic}, weight {weight})")
            }
        }
    }
}

fn validate_endpoints(graph: &GridGraph, start: Cell, goal: Cell) -> Result<(), SearchFailure> {
    for cell in [start, goal] {
        let defect = if !graph.in_bounds(cell) {
            EndpointDefect::OutOfBounds
        } else if !graph.is_open(cell) {
            EndpointDefect::Wall
        } else {
            continue;
        };
        return Err(SearchFailure::InvalidEndpoint { cell, defect });
    }
    Ok(())
}

/// Pop/expand/push loop shared by both variants.
///
/// `score` maps a cell and its path cost to the frontier key. When
/// `keep_cheapest` is set, a neighbour is only pushed if its path cost beats
/// every earlier push of the same cell.
fn traverse<F, S>(
    engine: SearchEngine,
    graph: &GridGraph,
    start: Cell,
    goal: Cell,
    mut frontier: F,
    score: S,
    keep_cheapest: bool,
) -> Outcome
where
    F: Frontier,
    S: Fn(Cell, u32) -> f64,
{
    let mut stats = StatsCollector::start();
    debug!(%engine, %start, %goal, "starting search");

    if let Err(failure) = validate_endpoints(graph, start, goal) {
        debug!(%engine, %failure, "rejected search endpoints");
        return Outcome {
            engine,
            start,
            goal,
            resolution: Resolution::Failed { failure },
            explored: Vec::new(),
            report: stats.fail(),
        };
    }

    let mut visited: HashSet<Cell> = HashSet::new();
    let mut parents: HashMap<Cell, Cell> = HashMap::new();
    let mut best_cost: HashMap<Cell, u32> = HashMap::new();
    let mut explored = Vec::new();

    frontier.push(SearchNode::start(start, score(start, 0)));
    best_cost.insert(start, 0);
    stats.observe_frontier(frontier.len());

    while let Some(node) = frontier.pop() {
        stats.record_pop();
        if !visited.insert(node.cell) {
            continue;
        }
        if let Some(parent) = node.parent {
            parents.insert(node.cell, parent);
        }
        stats.record_expansion();
        explored.push(node.cell);

        if node.cell == goal {
            let path = reconstruct_path(&parents, start, goal);
            let report = stats.succeed(&path, node.g);
            debug!(
                %engine,
                expansions = report.expansions,
                path_length = path.len(),
                "search reached goal"
            );
            return Outcome {
                engine,
                start,
                goal,
                resolution: Resolution::Found { path },
                explored,
                report,
            };
        }

        for next in graph.neighbors(node.cell) {
            if visited.contains(&next) {
                continue;
            }
            let g = node.g + graph.cost(node.cell, next);
            if keep_cheapest {
                if best_cost.get(&next).is_some_and(|best| *best <= g) {
                    continue;
                }
                best_cost.insert(next, g);
            }
            frontier.push(SearchNode {
                cell: next,
                parent: Some(node.cell),
                g,
                score: score(next, g),
            });
        }
        stats.observe_frontier(frontier.len());
    }

    let report = stats.fail();
    debug!(%engine, expansions = report.expansions, "frontier exhausted");
    Outcome {
        engine,
        start,
        goal,
        resolution: Resolution::Failed {
            failure: SearchFailure::Unreachable { start, goal },
        },
        explored,
        report,
    }
}

fn reconstruct_path(parents: &HashMap<Cell, Cell>, start: Cell, goal: Cell) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match parents.get(&current) {
            Some(parent) => {
                current = *parent;
                path.push(current);
            }
            None => break,
        }
    }
    path.reverse();
    path
}
