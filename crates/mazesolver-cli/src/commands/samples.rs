//! `samples` command: solve every bundled sample maze with both variants.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::{debug, warn};

use mazesolver_lib::{
    algorithm_label, Maze, ResultsDocument, ResultsSection, RunSummary, SearchConfig,
};

use super::load_input;

/// Environment variable overriding the sample maze directory.
pub const SAMPLES_DIR_ENV: &str = "MAZESOLVER_SAMPLES_DIR";
/// Sample maze directory used when neither the flag nor the variable is set.
pub const DEFAULT_SAMPLES_DIR: &str = "sample-mazes";
/// Report file stem for the samples run.
pub const SAMPLES_REPORT_STEM: &str = "sample-results";

/// Resolve the sample directory: explicit flag, then environment, then default.
pub fn resolve_samples_dir(flag: Option<&Path>) -> PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }
    match env::var_os(SAMPLES_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(DEFAULT_SAMPLES_DIR),
    }
}

/// Load every `maze-*.txt` file in `dir`, smallest grid first.
///
/// Files that fail to load are logged and skipped.
pub fn discover_samples(dir: &Path) -> Result<Vec<Maze>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read sample directory {}", dir.display()))?;

    let mut mazes = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_sample = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with("maze-") && name.ends_with(".txt"));
        if !is_sample {
            continue;
        }
        match load_input(&path) {
            Ok(maze) => mazes.push(maze),
            Err(err) => {
                warn!(path = %path.display(), error = ?err, "skipping unusable sample maze");
            }
        }
    }

    mazes.sort_by(|a, b| {
        (a.rows() * a.cols())
            .cmp(&(b.rows() * b.cols()))
            .then_with(|| a.name.cmp(&b.name))
    });
    debug!(dir = %dir.display(), count = mazes.len(), "discovered sample mazes");
    Ok(mazes)
}

/// Solve all samples with depth-first search and standard A*.
pub fn run(dir: &Path) -> Result<ResultsDocument> {
    let mazes = discover_samples(dir)?;
    if mazes.is_empty() {
        bail!("no sample mazes found in {}", dir.display());
    }

    let configs = [SearchConfig::depth_first(), SearchConfig::default()];
    let sections = configs
        .iter()
        .map(|config| {
            let mut section = ResultsSection::new(algorithm_label(&config.engine()));
            for maze in &mazes {
                section.push(RunSummary::from_outcome(&maze.name, &maze.solve(config)));
            }
            section
        })
        .collect();
    Ok(ResultsDocument::new(sections))
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::tempdir;

    #[test]
    fn flag_wins_over_default() {
        let dir = resolve_samples_dir(Some(Path::new("custom")));
        assert_eq!(dir, PathBuf::from("custom"));
    }

    #[test]
    fn discovery_orders_by_size_and_skips_other_files() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("maze-Big.txt"), "# - # #\n# - - #\n# # - #\n")
            .expect("write maze");
        fs::write(dir.path().join("maze-Small.txt"), "# - #\n# - #\n").expect("write maze");
        fs::write(dir.path().join("maze-Broken.txt"), "# x #\n").expect("write maze");
        fs::write(dir.path().join("notes.txt"), "# - #\n").expect("write file");

        let names: Vec<_> = discover_samples(dir.path())
            .expect("discover")
            .into_iter()
            .map(|maze| maze.name)
            .collect();
        assert_eq!(names, ["maze-Small", "maze-Big"]);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let err = run(dir.path()).expect_err("no samples");
        assert!(err.to_string().contains("no sample mazes found"));
    }

    #[test]
    fn samples_document_has_one_section_per_variant() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("maze-Small.txt"), "# - #\n# - #\n").expect("write maze");

        let document = run(dir.path()).expect("solve samples");
        assert_eq!(document.sections.len(), 2);
        assert_eq!(document.sections[0].heading, "DEPTH FIRST SEARCH");
        assert_eq!(document.sections[1].heading, "A* GRAPH SEARCH");
        assert_eq!(document.runs().count(), 2);
    }
}
