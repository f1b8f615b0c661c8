//! Integration tests for the `samples`, `experiment` and `menu` commands.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn samples_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/sample-mazes")
}

fn mazesolver(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mazesolver").expect("binary exists");
    cmd.current_dir(workdir.path())
        .env("NO_COLOR", "1")
        .env_remove("MAZESOLVER_SAMPLES_DIR");
    cmd
}

#[test]
fn samples_solves_every_fixture_with_both_variants() {
    let workdir = TempDir::new().expect("create temp dir");

    mazesolver(&workdir)
        .arg("samples")
        .arg("--dir")
        .arg(samples_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("maze-VLarge"))
        .stdout(predicate::str::contains("sample-results.txt file."));

    let report =
        fs::read_to_string(workdir.path().join("sample-results.txt")).expect("report written");
    assert_eq!(report.matches("RESULTS FOR maze-").count(), 8);
    let easy = report.find("maze-Easy USING DEPTH").expect("easy run");
    let vlarge = report.find("maze-VLarge USING DEPTH").expect("vlarge run");
    assert!(easy < vlarge, "samples are ordered smallest first");
}

#[test]
fn samples_directory_comes_from_the_environment() {
    let workdir = TempDir::new().expect("create temp dir");

    mazesolver(&workdir)
        .env("MAZESOLVER_SAMPLES_DIR", samples_dir())
        .args(["--no-report", "samples"])
        .assert()
        .success()
        .stdout(predicate::str::contains("maze-Medium"));
}

#[test]
fn samples_without_a_directory_fails() {
    let workdir = TempDir::new().expect("create temp dir");

    mazesolver(&workdir)
        .arg("samples")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read sample directory sample-mazes"));
}

#[test]
fn experiment_writes_into_extra_statistics() {
    let workdir = TempDir::new().expect("create temp dir");

    mazesolver(&workdir)
        .arg("experiment")
        .arg(samples_dir().join("maze-Easy.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("A* HEURISTIC EXPERIMENT"))
        .stdout(predicate::str::contains("DEPTH FIRST NEIGHBOUR ORDER EXPERIMENT"));

    let report = fs::read_to_string(
        workdir
            .path()
            .join("extra-statistics")
            .join("maze-Easy-heuristics.txt"),
    )
    .expect("report written");
    assert!(report.contains("WEIGHTED A* GRAPH SEARCH (MANHATTAN HEURISTIC, WEIGHT 2.7)"));
    assert!(report.contains("A* GRAPH SEARCH (CHEBYSHEV HEURISTIC)"));
    assert!(report.contains("Note: neighbour order up, down, right, left"));
}

#[test]
fn experiment_accepts_custom_weights() {
    let workdir = TempDir::new().expect("create temp dir");

    mazesolver(&workdir)
        .args(["--no-report", "experiment", "--weights", "1,4"])
        .arg(samples_dir().join("maze-Easy.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("WEIGHTED A* GRAPH SEARCH (ZERO HEURISTIC, WEIGHT 4)"))
        .stdout(predicate::str::contains("WEIGHT 2.7").not());
}

#[test]
fn menu_quits_on_q() {
    let workdir = TempDir::new().expect("create temp dir");

    mazesolver(&workdir)
        .arg("menu")
        .write_stdin("z\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the Maze Solver!"))
        .stdout(predicate::str::contains("Invalid option, please try again."))
        .stdout(predicate::str::ends_with("Goodbye!\n"));
}

#[test]
fn menu_custom_maze_reports_bad_input_and_continues() {
    let workdir = TempDir::new().expect("create temp dir");
    let maze = samples_dir().join("maze-Easy.txt");

    mazesolver(&workdir)
        .arg("menu")
        .write_stdin(format!("c\nmissing.txt\nc\n{}\nq\n", maze.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: file cannot be found or input is invalid",
        ))
        .stdout(predicate::str::contains("Maze solved!"));

    assert!(workdir.path().join("maze-Easy-results.txt").is_file());
}
