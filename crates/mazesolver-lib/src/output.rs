use std::fmt::Write;

use serde::Serialize;

use crate::error::SearchFailure;
use crate::grid::Cell;
use crate::heuristic::{Heuristic, Weight};
use crate::search::{Outcome, SearchEngine};
use crate::stats::SearchReport;

/// Width of the dashed section banners in results files.
const BANNER_WIDTH: usize = 86;

/// Upper-case algorithm label used in results headings.
pub fn algorithm_label(engine: &SearchEngine) -> String {
    match engine {
        SearchEngine::DepthFirst => "DEPTH FIRST SEARCH".to_string(),
        SearchEngine::WeightedAStar { heuristic, weight } => {
            let standard = *weight == Weight::ONE;
            match (standard, heuristic) {
                (true, Heuristic::Manhattan) => "A* GRAPH SEARCH".to_string(),
                (true, heuristic) => format!(
                    "A* GRAPH SEARCH ({} HEURISTIC)",
                    heuristic.name().to_uppercase()
                ),
                (false, heuristic) => format!(
                    "WEIGHTED A* GRAPH SEARCH ({} HEURISTIC, WEIGHT {})",
                    heuristic.name().to_uppercase(),
                    weight
                ),
            }
        }
    }
}

/// Flattened, serializable view of one search run on a named maze.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub maze: String,
    pub algorithm: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub start: Cell,
    pub goal: Cell,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Cell>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<SearchFailure>,
    pub report: SearchReport,
}

impl RunSummary {
    pub fn from_outcome(maze: impl Into<String>, outcome: &Outcome) -> Self {
        Self {
            maze: maze.into(),
            algorithm: algorithm_label(&outcome.engine),
            note: None,
            start: outcome.start,
            goal: outcome.goal,
            path: outcome.path().map(<[Cell]>::to_vec),
            failure: outcome.failure().cloned(),
            report: outcome.report.clone(),
        }
    }

    /// Attach a short annotation such as the neighbour order used.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Render in the results-file text layout.
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "RESULTS FOR {} USING {}:",
            self.maze, self.algorithm
        );
        if let Some(note) = &self.note {
            let _ = writeln!(buffer, "Note: {note}");
        }
        match (&self.path, &self.failure) {
            (Some(path), _) => {
                let _ = writeln!(buffer, "Path found: {}", format_path(path));
                let _ = writeln!(buffer, "Path length: {}", path.len());
                if let Some(cost) = self.report.path_cost {
                    let _ = writeln!(buffer, "Path cost: {cost}");
                }
            }
            (None, Some(failure)) => {
                let _ = writeln!(buffer, "Outcome: {failure}");
            }
            (None, None) => {
                let _ = writeln!(buffer, "Outcome: no result");
            }
        }
        let _ = writeln!(
            buffer,
            "Number of explored nodes: {}",
            self.report.expansions
        );
        let _ = writeln!(buffer, "Number of steps: {}", self.report.frontier_pops);
        let _ = writeln!(buffer, "Peak frontier size: {}", self.report.peak_frontier);
        let _ = writeln!(
            buffer,
            "Execution Time: {:.6} seconds",
            self.report.elapsed.as_secs_f64()
        );
        buffer
    }
}

/// Group of runs printed under one banner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsSection {
    pub heading: String,
    pub runs: Vec<RunSummary>,
}

impl ResultsSection {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            runs: Vec::new(),
        }
    }

    pub fn push(&mut self, run: RunSummary) {
        self.runs.push(run);
    }
}

/// Complete results document handed to the report writer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultsDocument {
    pub sections: Vec<ResultsSection>,
}

impl ResultsDocument {
    pub fn new(sections: Vec<ResultsSection>) -> Self {
        Self { sections }
    }

    pub fn runs(&self) -> impl Iterator<Item = &RunSummary> {
        self.sections.iter().flat_map(|section| section.runs.iter())
    }

    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        for section in &self.sections {
            let _ = writeln!(buffer, "{}\n", banner(&section.heading));
            for run in &section.runs {
                let _ = write!(buffer, "{}\n\n\n", run.render_text());
            }
        }
        buffer
    }
}

fn banner(heading: &str) -> String {
    format!("{:-^width$}", format!("{heading} RESULTS"), width = BANNER_WIDTH)
}

fn format_path(path: &[Cell]) -> String {
    let cells = path
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{cells}]")
}
