use mazesolver_lib::{
    parse_maze, ResultsDocument, ResultsSection, RunSummary, SearchConfig,
};

const CORRIDOR: &str = "# - #\n# - #\n# - #\n";
const BLOCKED: &str = "# - #\n# # #\n# - #\n";

#[test]
fn summary_text_lists_path_and_statistics() {
    let maze = parse_maze("corridor", CORRIDOR).expect("valid maze");
    let outcome = maze.solve(&SearchConfig::default());
    let summary = RunSummary::from_outcome(&maze.name, &outcome);

    let text = summary.render_text();
    assert!(text.starts_with("RESULTS FOR corridor USING A* GRAPH SEARCH:\n"));
    assert!(text.contains("Path found: [(0, 1), (1, 1), (2, 1)]\n"));
    assert!(text.contains("Path length: 3\n"));
    assert!(text.contains("Path cost: 2\n"));
    assert!(text.contains("Number of explored nodes: 3\n"));
    assert!(text.contains("Number of steps: 3\n"));
    assert!(text.contains("Peak frontier size: 1\n"));
    assert!(text.contains(" seconds\n"));
}

#[test]
fn failed_runs_report_the_failure() {
    let maze = parse_maze("blocked", BLOCKED).expect("valid maze");
    let outcome = maze.solve(&SearchConfig::depth_first());
    let summary = RunSummary::from_outcome(&maze.name, &outcome);

    let text = summary.render_text();
    assert!(text.contains("USING DEPTH FIRST SEARCH"));
    assert!(text.contains("Outcome: no path from (0, 1) to (2, 1)\n"));
    assert!(!text.contains("Path found"));
}

#[test]
fn document_serializes_sections_as_json() {
    let maze = parse_maze("corridor", CORRIDOR).expect("valid maze");
    let mut section = ResultsSection::new("DEPTH FIRST SEARCH");
    section.push(RunSummary::from_outcome(
        &maze.name,
        &maze.solve(&SearchConfig::depth_first()),
    ));
    let document = ResultsDocument::new(vec![section]);

    let json = serde_json::to_value(&document).expect("serialize");
    let run = &json["sections"][0]["runs"][0];
    assert_eq!(run["maze"], "corridor");
    assert_eq!(run["algorithm"], "DEPTH FIRST SEARCH");
    assert_eq!(run["path"], serde_json::json!([[0, 1], [1, 1], [2, 1]]));
    assert_eq!(run["report"]["expansions"], 3);
    assert!(run.get("failure").is_none());

    let text = document.render_text();
    assert!(text.starts_with('-'));
    assert!(text.contains("DEPTH FIRST SEARCH RESULTS"));
    assert!(text.ends_with("\n\n\n"));
}
