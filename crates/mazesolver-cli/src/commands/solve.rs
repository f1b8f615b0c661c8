//! `solve` command: run one or both search variants on a single maze file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use mazesolver_lib::{
    algorithm_label, Heuristic, Maze, Outcome, ResultsDocument, ResultsSection, RunSummary,
    SearchConfig, SearchVariant, Weight,
};

use super::load_input;

/// Arguments for the solve command.
#[derive(Debug, Clone)]
pub struct SolveArgs {
    pub file: PathBuf,
    /// Run only this variant; both run when unset.
    pub algorithm: Option<SearchVariant>,
    pub heuristic: Heuristic,
    pub weight: Weight,
}

impl SolveArgs {
    /// Default custom-maze run: both variants, Manhattan heuristic, weight 1.0.
    pub fn both(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            algorithm: None,
            heuristic: Heuristic::default(),
            weight: Weight::ONE,
        }
    }

    /// Run exactly the search described by `config`.
    pub fn from_config(file: impl Into<PathBuf>, config: SearchConfig) -> Self {
        Self {
            file: file.into(),
            algorithm: Some(config.variant),
            heuristic: config.heuristic,
            weight: config.weight,
        }
    }

    /// Search configurations to run, in report order.
    pub fn configs(&self) -> Vec<SearchConfig> {
        let a_star = SearchConfig::a_star(self.heuristic, self.weight);
        match self.algorithm {
            None => vec![SearchConfig::depth_first(), a_star],
            Some(SearchVariant::DepthFirst) => vec![SearchConfig::depth_first()],
            Some(SearchVariant::AStar) => vec![a_star],
        }
    }
}

/// Results of a solve run.
#[derive(Debug, Clone)]
pub struct SolveRun {
    pub maze: Maze,
    pub outcomes: Vec<Outcome>,
    pub document: ResultsDocument,
}

impl SolveRun {
    /// Report file stem, `<maze>-results`.
    pub fn report_stem(&self) -> String {
        format!("{}-results", self.maze.name)
    }
}

/// Read a JSON search configuration file.
pub fn load_config(path: &Path) -> Result<SearchConfig> {
    SearchConfig::load(path)
        .with_context(|| format!("failed to load search config {}", path.display()))
}

/// Load the maze and run every configured search on it.
pub fn run(args: &SolveArgs) -> Result<SolveRun> {
    let maze = load_input(&args.file)?;

    let mut sections = Vec::new();
    let mut outcomes = Vec::new();
    for config in args.configs() {
        let outcome = maze.solve(&config);
        debug!(maze = %maze.name, engine = %outcome.engine, success = outcome.is_success(), "solved");
        let mut section = ResultsSection::new(algorithm_label(&outcome.engine));
        section.push(RunSummary::from_outcome(&maze.name, &outcome));
        sections.push(section);
        outcomes.push(outcome);
    }

    Ok(SolveRun {
        maze,
        outcomes,
        document: ResultsDocument::new(sections),
    })
}
