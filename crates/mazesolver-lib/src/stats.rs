//! Per-run search statistics.

use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};

use crate::grid::Cell;

/// Immutable statistics for one search run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchReport {
    pub success: bool,
    /// Cells popped from the frontier for the first time.
    pub expansions: usize,
    /// Every frontier pop, including stale entries discarded as already visited.
    pub frontier_pops: usize,
    /// Largest number of entries held by the frontier at once.
    pub peak_frontier: usize,
    /// Number of cells in the path, start and goal included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_length: Option<usize>,
    /// Sum of edge costs along the path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_cost: Option<u32>,
    #[serde(rename = "elapsed_seconds", serialize_with = "serialize_seconds")]
    pub elapsed: Duration,
}

fn serialize_seconds<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

/// Passive observer that the engine feeds while a search runs.
///
/// Created when the search call starts and consumed when it ends, so the
/// measured time covers validation, traversal and path reconstruction.
#[derive(Debug)]
pub struct StatsCollector {
    started: Instant,
    expansions: usize,
    frontier_pops: usize,
    peak_frontier: usize,
}

impl StatsCollector {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            expansions: 0,
            frontier_pops: 0,
            peak_frontier: 0,
        }
    }

    pub fn record_pop(&mut self) {
        self.frontier_pops += 1;
    }

    pub fn record_expansion(&mut self) {
        self.expansions += 1;
    }

    pub fn observe_frontier(&mut self, len: usize) {
        self.peak_frontier = self.peak_frontier.max(len);
    }

    /// Seal the report for a run that reached the goal.
    pub fn succeed(self, path: &[Cell], cost: u32) -> SearchReport {
        SearchReport {
            success: true,
            expansions: self.expansions,
            frontier_pops: self.frontier_pops,
            peak_frontier: self.peak_frontier,
            path_length: Some(path.len()),
            path_cost: Some(cost),
            elapsed: self.started.elapsed(),
        }
    }

    /// Seal the report for a run that failed.
    pub fn fail(self) -> SearchReport {
        SearchReport {
            success: false,
            expansions: self.expansions,
            frontier_pops: self.frontier_pops,
            peak_frontier: self.peak_frontier,
            path_length: None,
            path_cost: None,
            elapsed: self.started.elapsed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collector_tracks_counts_and_peak() {
        let mut collector = StatsCollector::start();
        collector.observe_frontier(1);
        collector.record_pop();
        collector.record_expansion();
        collector.observe_frontier(4);
        collector.record_pop();
        collector.observe_frontier(2);

        let path = [Cell::new(0, 0), Cell::new(0, 1)];
        let report = collector.succeed(&path, 1);
        assert!(report.success);
        assert_eq!(report.expansions, 1);
        assert_eq!(report.frontier_pops, 2);
        assert_eq!(report.peak_frontier, 4);
        assert_eq!(report.path_length, Some(2));
        assert_eq!(report.path_cost, Some(1));
    }

    #[test]
    fn failed_report_has_no_path_fields() {
        let report = StatsCollector::start().fail();
        assert!(!report.success);
        assert_eq!(report.path_length, None);

        let json = serde_json::to_value(&report).expect("serialize");
        assert!(json.get("path_length").is_none());
        assert!(json["elapsed_seconds"].is_f64());
    }
}
