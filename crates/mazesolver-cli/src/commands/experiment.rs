//! `experiment` command: compare heuristics, weights and neighbour orders on one maze.

use std::path::Path;

use anyhow::Result;

use mazesolver_lib::{experiment_document, run_experiment, ExperimentPlan, Maze, ResultsDocument, Weight};

use super::load_input;

/// Load the maze and run the experiment plan.
///
/// An empty `weights` list keeps the default weights.
pub fn run(file: &Path, weights: &[Weight]) -> Result<(Maze, ResultsDocument)> {
    let maze = load_input(file)?;
    let mut plan = ExperimentPlan::default();
    if !weights.is_empty() {
        plan = plan.with_weights(weights.to_vec());
    }
    let runs = run_experiment(&maze, &plan)?;
    let document = experiment_document(&maze, &runs);
    Ok((maze, document))
}

/// Report file stem, `<maze>-heuristics`.
pub fn report_stem(maze: &Maze) -> String {
    format!("{}-heuristics", maze.name)
}
