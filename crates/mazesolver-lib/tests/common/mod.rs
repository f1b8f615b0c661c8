#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;

use mazesolver_lib::{load_maze, Cell, CellKind, GridGraph, Maze};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn sample_maze(name: &str) -> Maze {
    let path = fixtures_dir().join("sample-mazes").join(format!("{name}.txt"));
    load_maze(&path).expect("sample maze loads")
}

/// Build a matrix from rows of `#`/`-` symbols, ignoring spaces.
pub fn matrix(rows: &[&str]) -> Vec<Vec<CellKind>> {
    rows.iter()
        .map(|row| row.chars().filter_map(CellKind::from_symbol).collect())
        .collect()
}

pub fn graph(rows: &[&str]) -> GridGraph {
    GridGraph::new(&matrix(rows)).expect("valid grid")
}

/// Breadth-first reference distance used to check optimality.
pub fn bfs_distance(graph: &GridGraph, start: Cell, goal: Cell) -> Option<u32> {
    let mut distances = HashMap::from([(start, 0u32)]);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        let distance = distances[&current];
        if current == goal {
            return Some(distance);
        }
        for next in graph.neighbors(current) {
            if !distances.contains_key(&next) {
                distances.insert(next, distance + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

/// Assert that `path` is a walk of adjacent open cells from `start` to `goal`.
pub fn assert_valid_path(graph: &GridGraph, path: &[Cell], start: Cell, goal: Cell) {
    assert_eq!(path.first(), Some(&start), "path must begin at the start");
    assert_eq!(path.last(), Some(&goal), "path must end at the goal");
    for cell in path {
        assert!(graph.is_open(*cell), "{cell} is not an open cell");
    }
    for pair in path.windows(2) {
        assert!(
            pair[0].is_adjacent(&pair[1]),
            "{} and {} are not adjacent",
            pair[0],
            pair[1]
        );
    }
}
